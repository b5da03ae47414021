//! `POST /recommend_fertilizer/`

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::remote::{Endpoint, FormSpec};
use crate::render::Summary;

pub static SCHEMA: FormSchema = FormSchema {
    id: "fertilizer",
    title: "Fertilizer Recommendation",
    fields: &[
        FieldSpec::new("Crop", "Crop", FieldKind::Text).placeholder("e.g., Wheat, Rice"),
        FieldSpec::new("Current_N", "Current Nitrogen (N)", FieldKind::Float)
            .placeholder("Enter current Nitrogen content"),
        FieldSpec::new("Current_P", "Current Phosphorus (P)", FieldKind::Float)
            .placeholder("Enter current Phosphorus content"),
        FieldSpec::new("Current_K", "Current Potassium (K)", FieldKind::Float)
            .placeholder("Enter current Potassium content"),
    ],
};

/// Fertilizer recommendation form.
pub struct Fertilizer;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FertilizerRequest {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Current_N")]
    pub current_n: f64,
    #[serde(rename = "Current_P")]
    pub current_p: f64,
    #[serde(rename = "Current_K")]
    pub current_k: f64,
}

/// Recommended N/P/K levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FertilizerRecommendation {
    #[serde(rename = "recommended_N")]
    pub nitrogen: f64,
    #[serde(rename = "recommended_P")]
    pub phosphorus: f64,
    #[serde(rename = "recommended_K")]
    pub potassium: f64,
}

impl FormSpec for Fertilizer {
    type Request = FertilizerRequest;
    type Outcome = FertilizerRecommendation;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<FertilizerRequest, ValidationError> {
        Ok(FertilizerRequest {
            crop: form.text("Crop")?,
            current_n: form.float("Current_N")?,
            current_p: form.float("Current_P")?,
            current_k: form.float("Current_K")?,
        })
    }
}

impl Endpoint for Fertilizer {
    const PATH: &'static str = "/recommend_fertilizer/";
    type Response = FertilizerRecommendation;

    fn outcome(
        _request: &FertilizerRequest,
        response: FertilizerRecommendation,
    ) -> Result<FertilizerRecommendation, SubmitError> {
        Ok(response)
    }
}

impl Summary for FertilizerRecommendation {
    fn headline(&self) -> String {
        "Recommended Fertilizer Levels".to_owned()
    }

    fn details(&self) -> Vec<String> {
        vec![
            format!("Nitrogen (N): {}", self.nitrogen),
            format!("Phosphorus (P): {}", self.phosphorus),
            format!("Potassium (K): {}", self.potassium),
        ]
    }
}
