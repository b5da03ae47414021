use super::*;
use crate::remote::{RemoteForm, decode_response};
use crate::result::ResultState;

fn filled_form() -> RemoteForm<CropYield> {
    let mut form = RemoteForm::<CropYield>::new();
    for (name, value) in [
        ("Crop", "Wheat"),
        ("Season", "Kharif"),
        ("Area", "10"),
        ("Fertilizer", "50"),
        ("Crop_Year", "2023"),
        ("Pesticide", "5"),
        ("Annual_Rainfall", "1200"),
    ] {
        assert!(form.set_field(name, value));
    }
    form
}

#[test]
fn wheat_kharif_scenario_builds_expected_body() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    let body = serde_json::to_value(&submission.request).expect("serialize");
    assert_eq!(
        body,
        serde_json::json!({
            "Crop": "Wheat",
            "Season": "Kharif",
            "Area": 10.0,
            "Fertilizer": 50.0,
            "Crop_Year": 2023,
            "Pesticide": 5.0,
            "Annual_Rainfall": 1200.0
        })
    );
}

#[test]
fn wheat_kharif_scenario_renders_prediction() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    let outcome =
        decode_response::<CropYield>(&submission.request, 200, r#"{"predicted_yield":3.45}"#);
    assert!(form.complete(submission.token, outcome));

    let prediction = form.result().success().expect("success");
    assert_eq!(prediction.headline(), "Predicted Crop Yield: 3.45 tonnes/hectare");
    assert_eq!(
        prediction.details(),
        vec!["Based on your inputs, the predicted crop yield is approximately 3.45 tonnes/hectare."]
    );
}

#[test]
fn numeric_fields_equal_parsed_input() {
    let mut form = filled_form();
    form.set_field("Area", "2.75");
    form.set_field("Annual_Rainfall", "  980.125 ");
    form.set_field("Crop_Year", "1998");
    let request = form.begin_submit().expect("form is valid").request;
    assert_eq!(request.area, "2.75".parse::<f64>().expect("float"));
    assert_eq!(request.annual_rainfall, 980.125);
    assert_eq!(request.crop_year, 1998);
}

#[test]
fn non_ok_status_yields_error_with_code() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    let outcome = decode_response::<CropYield>(&submission.request, 500, "Internal Server Error");
    assert!(form.complete(submission.token, outcome));
    assert_eq!(
        form.result(),
        &ResultState::Error("HTTP error! status: 500".to_owned())
    );
    assert!(form.result().success().is_none());
}

#[test]
fn empty_required_field_blocks_submission() {
    let mut form = filled_form();
    form.set_field("Season", "");
    let errors = form.begin_submit().expect_err("season missing");
    assert_eq!(errors, vec![ValidationError::Missing { field: "Season" }]);
    assert!(form.result().is_idle());
    assert_eq!(form.latest_token(), None);
}

#[test]
fn predict_again_keeps_inputs() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    form.complete(
        submission.token,
        Ok(YieldPrediction {
            predicted_yield: 1.0,
        }),
    );
    form.dismiss();
    assert!(form.result().is_idle());
    assert_eq!(form.form().get("Crop"), "Wheat");
}
