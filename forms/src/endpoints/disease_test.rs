use super::*;
use crate::image::encode_image;
use crate::remote::{RemoteForm, decode_response};
use crate::result::ResultState;

const LEAF_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nleaf";

#[test]
fn data_uri_prefix_is_stripped_from_payload() {
    let encoded = encode_image(LEAF_BYTES);
    let mut form = RemoteForm::<DiseaseDetection>::new();
    form.set_field(IMAGE_FIELD, format!("data:image/png;base64,{encoded}"));
    let submission = form.begin_submit().expect("image present");
    assert_eq!(submission.request.image_base64, encoded);

    let body = serde_json::to_value(&submission.request).expect("serialize");
    assert_eq!(body, serde_json::json!({ "image_base64": encoded }));
}

#[test]
fn bare_base64_passes_through() {
    let encoded = encode_image(LEAF_BYTES);
    let mut form = RemoteForm::<DiseaseDetection>::new();
    form.set_field(IMAGE_FIELD, encoded.clone());
    let submission = form.begin_submit().expect("image present");
    assert_eq!(submission.request.image_base64, encoded);
}

#[test]
fn header_without_payload_is_missing() {
    let mut form = RemoteForm::<DiseaseDetection>::new();
    form.set_field(IMAGE_FIELD, "data:image/png;base64,");
    let errors = form.begin_submit().expect_err("no payload");
    assert_eq!(errors, vec![ValidationError::Missing { field: IMAGE_FIELD }]);
}

#[test]
fn no_image_blocks_submission() {
    let mut form = RemoteForm::<DiseaseDetection>::new();
    assert!(form.begin_submit().is_err());
    assert!(form.result().is_idle());
}

#[test]
fn diagnosis_renders_confidence_as_percentage() {
    let request = DiseaseRequest {
        image_base64: "AAAA".to_owned(),
    };
    let diagnosis = decode_response::<DiseaseDetection>(
        &request,
        200,
        r#"{"predicted_disease":"Tomato___Late_blight","confidence":0.975312}"#,
    )
    .expect("decodes");
    assert_eq!(diagnosis.headline(), "Tomato___Late_blight");
    assert_eq!(diagnosis.details(), vec!["Confidence: 97.53%"]);
}

#[test]
fn service_error_body_becomes_application_error() {
    let mut form = RemoteForm::<DiseaseDetection>::new();
    form.set_field(IMAGE_FIELD, "AAAA");
    let submission = form.begin_submit().expect("image present");
    let outcome = decode_response::<DiseaseDetection>(
        &submission.request,
        200,
        r#"{"error":"cannot identify image file"}"#,
    );
    assert_eq!(
        outcome,
        Err(SubmitError::Application("cannot identify image file".to_owned()))
    );
    form.complete(submission.token, outcome);
    assert_eq!(
        form.result(),
        &ResultState::Error("cannot identify image file".to_owned())
    );
}
