//! Market price forecast page: one card per forecast date.

use forms::endpoints::MarketForecast;
use forms::endpoints::market::PriceForecast;
use leptos::prelude::*;

use super::panel::{Labels, form_panel, summary_panel};
use crate::state::submit::{dismiss, form_signal, submit};

fn forecast_view(forecast: PriceForecast, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <section class="result-card">
            <h2>{format!("Forecast for {}", forecast.crop)}</h2>
            <div class="forecast-grid">
                {forecast
                    .points
                    .into_iter()
                    .map(|point| {
                        view! {
                            <article class="forecast-card">
                                <h3 class="forecast-card__date">{point.day().to_owned()}</h3>
                                <p class="forecast-card__price">{point.price_label()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="btn" on:click=move |_| on_dismiss.run(())>
                "New Forecast"
            </button>
        </section>
    }
}

#[component]
pub fn MarketPage() -> impl IntoView {
    let state = form_signal::<MarketForecast>();
    let on_submit = Callback::new(move |()| submit::<MarketForecast>(state));
    let on_dismiss = Callback::new(move |()| dismiss(state));
    let forecast = move || state.with(|s| s.result().success().cloned());

    view! {
        <section class="page-section">
            <h1>"Market Price Forecast"</h1>
            <p class="page-section__intro">
                "Forecast weekly prices for a crop before you decide when to sell."
            </p>
            {form_panel(
                state,
                Labels {
                    idle: "Get Forecast",
                    busy: "Loading...",
                },
                on_submit,
            )}
            <Show when=move || forecast().is_some() fallback=move || summary_panel(state)>
                {move || forecast().map(|f| forecast_view(f, on_dismiss))}
            </Show>
        </section>
    }
}
