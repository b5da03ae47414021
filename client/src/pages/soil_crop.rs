//! Soil-based crop recommendation page.

use forms::endpoints::SoilCrop;
use leptos::prelude::*;

use super::panel::{Labels, prediction_page};

#[component]
pub fn SoilCropPage() -> impl IntoView {
    prediction_page::<SoilCrop>(
        "Soil Based Crop Recommendation",
        "Enter soil nutrients and local climate to find the best-suited crop.",
        Labels {
            idle: "Get Recommendation",
            busy: "Loading...",
        },
    )
}
