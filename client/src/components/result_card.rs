//! Result area below a form: busy text, success summary, or error.

use leptos::prelude::*;

use crate::state::result_view::ResultView;

#[component]
pub fn ResultCard(
    #[prop(into)] result: Signal<ResultView>,
    on_dismiss: Callback<()>,
    #[prop(default = "Predict Again")] dismiss_label: &'static str,
) -> impl IntoView {
    move || match result.get() {
        ResultView::Hidden => ().into_any(),
        ResultView::Busy => view! { <p class="result-card__busy">"Loading..."</p> }.into_any(),
        ResultView::Ready { headline, details } => view! {
            <section class="result-card">
                <h2 class="result-card__headline">{headline}</h2>
                <ul class="result-card__details">
                    {details.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
                <button class="btn" on:click=move |_| on_dismiss.run(())>
                    {dismiss_label}
                </button>
            </section>
        }
        .into_any(),
        ResultView::Failed(message) => view! {
            <section class="result-card result-card--error">
                <p class="result-card__error">{message}</p>
                <button class="btn" on:click=move |_| on_dismiss.run(())>
                    "Dismiss"
                </button>
            </section>
        }
        .into_any(),
    }
}
