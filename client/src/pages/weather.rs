//! Weather forecast page: a current-conditions card plus one card per day.

use forms::endpoints::WeatherForecast;
use forms::endpoints::weather::{DailyForecast, WeatherReport};
use leptos::prelude::*;

use super::panel::{Labels, form_panel, summary_panel};
use crate::state::submit::{dismiss, form_signal, submit};

fn day_card(day: DailyForecast) -> impl IntoView {
    view! {
        <article class="forecast-card">
            <h3 class="forecast-card__date">{day.date.clone()}</h3>
            <p>{day.condition.clone()}</p>
            <p>{format!("{}°C - {}°C", day.min_temp_c, day.max_temp_c)}</p>
            <p>{format!("Avg: {}°C", day.avg_temp_c)}</p>
            <p>{format!("Humidity: {}%", day.avg_humidity)}</p>
            <p>{format!("Chance of rain: {}%", day.chance_of_rain)}</p>
        </article>
    }
}

fn report_view(report: WeatherReport, on_dismiss: Callback<()>) -> impl IntoView {
    let current = report.current().cloned();
    let city = report.city_name.clone();
    let day_count = report.days.len();
    view! {
        <section class="result-card">
            {current
                .map(|today| {
                    view! {
                        <div class="weather-current">
                            <h2>{format!("Current Weather in {city}")}</h2>
                            <p class="weather-current__temp">
                                {format!("{}°C", today.avg_temp_c)}
                            </p>
                            <p>{today.condition}</p>
                            <p>{format!("Humidity: {}%", today.avg_humidity)}</p>
                            <p>{format!("Chance of rain: {}%", today.chance_of_rain)}</p>
                        </div>
                    }
                })}
            <h2>{format!("{day_count}-Day Weather Forecast for {}", report.city_name)}</h2>
            <div class="forecast-grid">
                {report.days.into_iter().map(day_card).collect_view()}
            </div>
            <button class="btn" on:click=move |_| on_dismiss.run(())>
                "New Forecast"
            </button>
        </section>
    }
}

#[component]
pub fn WeatherPage() -> impl IntoView {
    let state = form_signal::<WeatherForecast>();
    let on_submit = Callback::new(move |()| submit::<WeatherForecast>(state));
    let on_dismiss = Callback::new(move |()| dismiss(state));
    let report = move || state.with(|s| s.result().success().cloned());

    view! {
        <section class="page-section">
            <h1>"Weather Forecast"</h1>
            <p class="page-section__intro">
                "Plan field work with a daily forecast for your city."
            </p>
            {form_panel(
                state,
                Labels {
                    idle: "Get Forecast",
                    busy: "Loading...",
                },
                on_submit,
            )}
            <Show when=move || report().is_some() fallback=move || summary_panel(state)>
                {move || report().map(|r| report_view(r, on_dismiss))}
            </Show>
        </section>
    }
}
