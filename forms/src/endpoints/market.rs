//! `POST /forecast_market_prices/`
//!
//! The service answers `{"forecast": {"<crop>": {"<date>": price}}}`. Only
//! the requested crop's series is rendered, and it must be non-empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::remote::{Endpoint, FormSpec};
use crate::render::Summary;

/// Crops with historical price data.
pub const CROP_OPTIONS: &[&str] = &["Wheat", "Rice", "Maize", "Soybean"];

pub const MAX_WEEKS: i64 = 52;

pub static SCHEMA: FormSchema = FormSchema {
    id: "market",
    title: "Market Price Forecast",
    fields: &[
        FieldSpec::new("crop_name", "Crop Name", FieldKind::Choice(CROP_OPTIONS))
            .placeholder("Select a crop"),
        FieldSpec::new(
            "weeks_to_forecast",
            "Weeks to Forecast",
            FieldKind::Int {
                min: Some(1),
                max: Some(MAX_WEEKS),
            },
        )
        .initial("4"),
    ],
};

/// Weekly price forecast for one crop.
pub struct MarketForecast;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketRequest {
    pub crop_name: String,
    pub weeks_to_forecast: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketResponse {
    pub forecast: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Date key as sent by the service (ISO 8601).
    pub date: String,
    /// Price in rupees per quintal.
    pub price: f64,
}

impl PricePoint {
    /// Calendar date part of the key, without any time component.
    #[must_use]
    pub fn day(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        format!("₹{:.2}/Quintal", self.price)
    }
}

/// Price series for the requested crop, oldest date first.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceForecast {
    pub crop: String,
    pub points: Vec<PricePoint>,
}

impl FormSpec for MarketForecast {
    type Request = MarketRequest;
    type Outcome = PriceForecast;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<MarketRequest, ValidationError> {
        Ok(MarketRequest {
            crop_name: form.text("crop_name")?,
            weeks_to_forecast: form.int("weeks_to_forecast")?,
        })
    }
}

impl Endpoint for MarketForecast {
    const PATH: &'static str = "/forecast_market_prices/";
    type Response = MarketResponse;

    fn outcome(
        request: &MarketRequest,
        mut response: MarketResponse,
    ) -> Result<PriceForecast, SubmitError> {
        let series = response
            .forecast
            .remove(&request.crop_name)
            .filter(|series| !series.is_empty())
            .ok_or_else(|| {
                SubmitError::Incomplete(format!(
                    "no price forecast returned for {}",
                    request.crop_name
                ))
            })?;

        Ok(PriceForecast {
            crop: request.crop_name.clone(),
            points: series
                .into_iter()
                .map(|(date, price)| PricePoint { date, price })
                .collect(),
        })
    }
}

impl Summary for PriceForecast {
    fn headline(&self) -> String {
        format!("Forecast for {}", self.crop)
    }

    fn details(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|point| format!("{}: {}", point.day(), point.price_label()))
            .collect()
    }
}

#[cfg(test)]
#[path = "market_test.rs"]
mod market_test;
