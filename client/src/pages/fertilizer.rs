//! Fertilizer recommendation page.

use forms::endpoints::Fertilizer;
use leptos::prelude::*;

use super::panel::{Labels, prediction_page};

#[component]
pub fn FertilizerPage() -> impl IntoView {
    prediction_page::<Fertilizer>(
        "Fertilizer Recommendation",
        "Enter your crop and current soil nutrient levels.",
        Labels {
            idle: "Get Recommendation",
            busy: "Loading...",
        },
    )
}
