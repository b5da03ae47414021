//! `POST /recommend_soil_crop/`

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::remote::{Endpoint, FormSpec};
use crate::render::Summary;

pub static SCHEMA: FormSchema = FormSchema {
    id: "soil_crop",
    title: "Soil Based Crop Recommendation",
    fields: &[
        FieldSpec::new("N", "Nitrogen (N)", FieldKind::Float).placeholder("Enter Nitrogen content"),
        FieldSpec::new("P", "Phosphorus (P)", FieldKind::Float)
            .placeholder("Enter Phosphorus content"),
        FieldSpec::new("K", "Potassium (K)", FieldKind::Float)
            .placeholder("Enter Potassium content"),
        FieldSpec::new("temperature", "Temperature (°C)", FieldKind::Float)
            .placeholder("Enter temperature"),
        FieldSpec::new("humidity", "Humidity (%)", FieldKind::Float).placeholder("Enter humidity"),
        FieldSpec::new("ph", "pH", FieldKind::Float).placeholder("Enter pH value"),
        FieldSpec::new("rainfall", "Rainfall (mm)", FieldKind::Float).placeholder("Enter rainfall"),
    ],
};

/// Soil-based crop recommendation form.
pub struct SoilCrop;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilCropRequest {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub recommended_crop: String,
}

impl FormSpec for SoilCrop {
    type Request = SoilCropRequest;
    type Outcome = CropRecommendation;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<SoilCropRequest, ValidationError> {
        Ok(SoilCropRequest {
            nitrogen: form.float("N")?,
            phosphorus: form.float("P")?,
            potassium: form.float("K")?,
            temperature: form.float("temperature")?,
            humidity: form.float("humidity")?,
            ph: form.float("ph")?,
            rainfall: form.float("rainfall")?,
        })
    }
}

impl Endpoint for SoilCrop {
    const PATH: &'static str = "/recommend_soil_crop/";
    type Response = CropRecommendation;

    fn outcome(
        _request: &SoilCropRequest,
        response: CropRecommendation,
    ) -> Result<CropRecommendation, SubmitError> {
        if response.recommended_crop.trim().is_empty() {
            return Err(SubmitError::Incomplete(
                "no crop recommendation returned".to_owned(),
            ));
        }
        Ok(response)
    }
}

impl Summary for CropRecommendation {
    fn headline(&self) -> String {
        format!("Recommended Crop: {}", self.recommended_crop)
    }

    fn details(&self) -> Vec<String> {
        vec![format!(
            "The recommended crop for your soil conditions is: {}",
            self.recommended_crop
        )]
    }
}
