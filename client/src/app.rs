//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    contact::ContactPage, crop_yield::CropYieldPage, disease::DiseasePage,
    fertilizer::FertilizerPage, home::HomePage, market::MarketPage, soil_crop::SoilCropPage,
    weather::WeatherPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Pages own their form state; nothing is shared through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cropix.css"/>
        <Title text="Cropix"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("crop-recommendation") view=CropYieldPage/>
                    <Route path=StaticSegment("fertilizer-recommendation") view=FertilizerPage/>
                    <Route path=StaticSegment("soil-crop-recommendation") view=SoilCropPage/>
                    <Route path=StaticSegment("disease-detection") view=DiseasePage/>
                    <Route path=StaticSegment("weather-forecast") view=WeatherPage/>
                    <Route path=StaticSegment("market-forecast") view=MarketPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
