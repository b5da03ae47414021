use super::*;
use crate::remote::{RemoteForm, decode_response};

fn request(crop: &str) -> MarketRequest {
    MarketRequest {
        crop_name: crop.to_owned(),
        weeks_to_forecast: 3,
    }
}

#[test]
fn crop_must_be_one_of_the_four_options() {
    let mut form = RemoteForm::<MarketForecast>::new();
    form.set_field("crop_name", "Barley");
    let errors = form.begin_submit().expect_err("unknown crop");
    assert!(matches!(
        errors.as_slice(),
        [ValidationError::UnknownChoice { field: "crop_name", .. }]
    ));
}

#[test]
fn weeks_bounded_to_a_year() {
    let mut form = RemoteForm::<MarketForecast>::new();
    form.set_field("crop_name", "Maize");
    form.set_field("weeks_to_forecast", "53");
    assert!(form.begin_submit().is_err());
    form.set_field("weeks_to_forecast", "52");
    let request = form.begin_submit().expect("valid").request;
    assert_eq!(request.weeks_to_forecast, 52);
    assert_eq!(
        serde_json::to_value(&request).expect("serialize"),
        serde_json::json!({ "crop_name": "Maize", "weeks_to_forecast": 52 })
    );
}

#[test]
fn series_for_requested_crop_is_sorted_by_date() {
    let body = serde_json::json!({
        "forecast": {
            "Wheat": {
                "2025-01-19T00:00:00": 2391.5,
                "2025-01-05T00:00:00": 2350.0,
                "2025-01-12T00:00:00": 2374.256
            }
        }
    });
    let forecast = decode_response::<MarketForecast>(&request("Wheat"), 200, &body.to_string())
        .expect("decodes");
    assert_eq!(forecast.headline(), "Forecast for Wheat");
    assert_eq!(
        forecast.details(),
        vec![
            "2025-01-05: ₹2350.00/Quintal",
            "2025-01-12: ₹2374.26/Quintal",
            "2025-01-19: ₹2391.50/Quintal",
        ]
    );
}

#[test]
fn missing_crop_series_is_incomplete() {
    let body = r#"{"forecast":{"Rice":{"2025-01-05":1.0}}}"#;
    let err =
        decode_response::<MarketForecast>(&request("Wheat"), 200, body).expect_err("no wheat");
    assert_eq!(
        err,
        SubmitError::Incomplete("no price forecast returned for Wheat".to_owned())
    );
}

#[test]
fn empty_crop_series_is_incomplete() {
    let body = r#"{"forecast":{"Wheat":{}}}"#;
    assert!(matches!(
        decode_response::<MarketForecast>(&request("Wheat"), 200, body),
        Err(SubmitError::Incomplete(_))
    ));
}

#[test]
fn unknown_crop_error_from_service_is_application_error() {
    let body = r#"{"error":"Crop 'Soybean' not found in historical data."}"#;
    let err = decode_response::<MarketForecast>(&request("Soybean"), 200, body).expect_err("error");
    assert!(matches!(err, SubmitError::Application(message) if message.contains("Soybean")));
}

#[test]
fn price_point_day_handles_plain_dates() {
    let point = PricePoint {
        date: "2025-02-02".to_owned(),
        price: 10.0,
    };
    assert_eq!(point.day(), "2025-02-02");
    assert_eq!(point.price_label(), "₹10.00/Quintal");
}
