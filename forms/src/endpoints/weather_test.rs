use super::*;
use crate::remote::{RemoteForm, decode_response};

fn request() -> WeatherRequest {
    WeatherRequest {
        city: "Nagpur".to_owned(),
        days: 2,
    }
}

fn day(date: &str) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "min_temp_c": 24.1,
        "max_temp_c": 38.6,
        "avg_temp_c": 31.2,
        "avg_humidity": 41,
        "condition": "Sunny",
        "chance_of_rain": 0
    })
}

#[test]
fn days_above_fourteen_is_blocked() {
    let mut form = RemoteForm::<WeatherForecast>::new();
    form.set_field("city", "London");
    form.set_field("days", "15");
    let errors = form.begin_submit().expect_err("15 days exceeds bound");
    assert_eq!(
        errors,
        vec![ValidationError::AboveMax {
            field: "days",
            value: 15,
            max: 14
        }]
    );
    assert_eq!(form.latest_token(), None);
    assert_eq!(
        form.field_error("days").as_deref(),
        Some("days must be at most 14, got 15")
    );
}

#[test]
fn days_defaults_to_seven() {
    let mut form = RemoteForm::<WeatherForecast>::new();
    form.set_field("city", "London");
    let request = form.begin_submit().expect("valid").request;
    assert_eq!(request, WeatherRequest { city: "London".to_owned(), days: 7 });
}

#[test]
fn response_without_city_name_falls_back_to_request() {
    let body = serde_json::json!({ "forecast": [day("2025-05-01"), day("2025-05-02")] });
    let report = decode_response::<WeatherForecast>(&request(), 200, &body.to_string())
        .expect("decodes");
    assert_eq!(report.city_name, "Nagpur");
    assert_eq!(report.days.len(), 2);
    assert_eq!(report.current().map(|d| d.date.as_str()), Some("2025-05-01"));
}

#[test]
fn service_city_name_wins() {
    let body = serde_json::json!({
        "city_name": "Nagpur, Maharashtra",
        "forecast": [day("2025-05-01")],
    });
    let report = decode_response::<WeatherForecast>(&request(), 200, &body.to_string())
        .expect("decodes");
    assert_eq!(report.headline(), "Weather Forecast for Nagpur, Maharashtra");
    assert_eq!(
        report.details(),
        vec!["2025-05-01: 24.1°C - 38.6°C, avg 31.2°C, humidity 41%, Sunny, 0% chance of rain"]
    );
}

#[test]
fn empty_forecast_is_incomplete() {
    let body = r#"{"city_name":"Nagpur","forecast":[]}"#;
    let err = decode_response::<WeatherForecast>(&request(), 200, body).expect_err("empty");
    assert_eq!(err, SubmitError::Incomplete("no forecast returned for Nagpur".to_owned()));
}

#[test]
fn missing_api_key_error_is_surfaced() {
    let body = r#"{"error":"Weather API key not found."}"#;
    let err = decode_response::<WeatherForecast>(&request(), 200, body).expect_err("error");
    assert_eq!(err.to_string(), "Weather API key not found.");
}
