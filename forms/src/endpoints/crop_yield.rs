//! `POST /predict_crop_yield/`

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::remote::{Endpoint, FormSpec};
use crate::render::Summary;

pub static SCHEMA: FormSchema = FormSchema {
    id: "crop_yield",
    title: "Crop Yield Prediction",
    fields: &[
        FieldSpec::new("Crop", "Crop Type", FieldKind::Text).placeholder("e.g., Wheat, Rice"),
        FieldSpec::new("Season", "Season", FieldKind::Text).placeholder("e.g., Kharif, Rabi"),
        FieldSpec::new("Area", "Area (hectares)", FieldKind::Float)
            .placeholder("Enter farm area in hectares"),
        FieldSpec::new("Fertilizer", "Fertilizer (tonnes)", FieldKind::Float)
            .placeholder("Enter fertilizer amount in tonnes"),
        FieldSpec::new("Crop_Year", "Crop Year", FieldKind::Int { min: None, max: None })
            .placeholder("Enter crop year"),
        FieldSpec::new("Pesticide", "Pesticide (tonnes)", FieldKind::Float)
            .placeholder("Enter pesticide amount in tonnes"),
        FieldSpec::new("Annual_Rainfall", "Annual Rainfall (mm)", FieldKind::Float)
            .placeholder("Enter annual rainfall in mm"),
    ],
};

/// Crop yield prediction form.
pub struct CropYield;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropYieldRequest {
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Area")]
    pub area: f64,
    #[serde(rename = "Fertilizer")]
    pub fertilizer: f64,
    #[serde(rename = "Crop_Year")]
    pub crop_year: i64,
    #[serde(rename = "Pesticide")]
    pub pesticide: f64,
    #[serde(rename = "Annual_Rainfall")]
    pub annual_rainfall: f64,
}

/// Predicted yield in tonnes per hectare.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    pub predicted_yield: f64,
}

impl FormSpec for CropYield {
    type Request = CropYieldRequest;
    type Outcome = YieldPrediction;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<CropYieldRequest, ValidationError> {
        Ok(CropYieldRequest {
            crop: form.text("Crop")?,
            season: form.text("Season")?,
            area: form.float("Area")?,
            fertilizer: form.float("Fertilizer")?,
            crop_year: form.int("Crop_Year")?,
            pesticide: form.float("Pesticide")?,
            annual_rainfall: form.float("Annual_Rainfall")?,
        })
    }
}

impl Endpoint for CropYield {
    const PATH: &'static str = "/predict_crop_yield/";
    type Response = YieldPrediction;

    fn outcome(
        _request: &CropYieldRequest,
        response: YieldPrediction,
    ) -> Result<YieldPrediction, SubmitError> {
        Ok(response)
    }
}

impl Summary for YieldPrediction {
    fn headline(&self) -> String {
        format!("Predicted Crop Yield: {:.2} tonnes/hectare", self.predicted_yield)
    }

    fn details(&self) -> Vec<String> {
        vec![format!(
            "Based on your inputs, the predicted crop yield is approximately {:.2} tonnes/hectare.",
            self.predicted_yield
        )]
    }
}

#[cfg(test)]
#[path = "crop_yield_test.rs"]
mod crop_yield_test;
