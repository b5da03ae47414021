//! Home page with one feature card per advisory tool.

use leptos::prelude::*;

use crate::state::routes::feature_cards;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-hero">
            <h1>"Smart farming decisions, backed by data"</h1>
            <p>
                "Cropix predicts yields, recommends fertilizer and crops, spots plant diseases, \
                 and forecasts weather and market prices."
            </p>
            <a class="btn btn--primary" href="#features">
                "Explore the tools"
            </a>
        </section>
        <section id="features" class="feature-grid">
            {feature_cards()
                .map(|(page, blurb)| {
                    view! {
                        <a class="feature-card" href=page.path>
                            <h3 class="feature-card__title">{page.label}</h3>
                            <p class="feature-card__blurb">{blurb}</p>
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}
