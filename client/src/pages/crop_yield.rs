//! Crop yield prediction page.

use forms::endpoints::CropYield;
use leptos::prelude::*;

use super::panel::{Labels, prediction_page};

#[component]
pub fn CropYieldPage() -> impl IntoView {
    prediction_page::<CropYield>(
        "Crop Yield Prediction",
        "Enter your farm details to estimate the expected yield per hectare.",
        Labels {
            idle: "Predict Yield",
            busy: "Predicting...",
        },
    )
}
