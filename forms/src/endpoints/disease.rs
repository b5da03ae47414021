//! `POST /detect_disease/`
//!
//! The only field holds the picked image as base64. The browser reads files
//! as data URIs, so the `data:...;base64,` header is stripped while building
//! the request; the CLI stores bare base64 and passes through unchanged.

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::image::strip_data_uri_prefix;
use crate::remote::{Endpoint, FormSpec};
use crate::render::Summary;

pub const IMAGE_FIELD: &str = "image_base64";

pub static SCHEMA: FormSchema = FormSchema {
    id: "disease",
    title: "Detect Crop Diseases",
    fields: &[FieldSpec::new(IMAGE_FIELD, "Crop Image", FieldKind::Image)],
};

/// Disease detection from a leaf/crop photo.
pub struct DiseaseDetection;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRequest {
    pub image_base64: String,
}

/// Predicted disease class and model confidence in `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDiagnosis {
    pub predicted_disease: String,
    pub confidence: f64,
}

impl DiseaseDiagnosis {
    /// Confidence as a percentage with two decimals, e.g. `"97.53%"`.
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

impl FormSpec for DiseaseDetection {
    type Request = DiseaseRequest;
    type Outcome = DiseaseDiagnosis;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<DiseaseRequest, ValidationError> {
        let raw = form.text(IMAGE_FIELD)?;
        let image_base64 = strip_data_uri_prefix(&raw);
        if image_base64.is_empty() {
            return Err(ValidationError::Missing { field: IMAGE_FIELD });
        }
        Ok(DiseaseRequest {
            image_base64: image_base64.to_owned(),
        })
    }
}

impl Endpoint for DiseaseDetection {
    const PATH: &'static str = "/detect_disease/";
    type Response = DiseaseDiagnosis;

    fn outcome(
        _request: &DiseaseRequest,
        response: DiseaseDiagnosis,
    ) -> Result<DiseaseDiagnosis, SubmitError> {
        Ok(response)
    }
}

impl Summary for DiseaseDiagnosis {
    fn headline(&self) -> String {
        self.predicted_disease.clone()
    }

    fn details(&self) -> Vec<String> {
        vec![format!("Confidence: {}", self.confidence_percent())]
    }
}

#[cfg(test)]
#[path = "disease_test.rs"]
mod disease_test;
