//! `POST /weather_forecast/`

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::remote::{Endpoint, FormSpec};
use crate::render::Summary;

pub const MAX_DAYS: i64 = 14;

pub static SCHEMA: FormSchema = FormSchema {
    id: "weather",
    title: "Weather Forecast",
    fields: &[
        FieldSpec::new("city", "Location (City)", FieldKind::Text)
            .placeholder("Enter city name (e.g., London)"),
        FieldSpec::new(
            "days",
            "Number of Days",
            FieldKind::Int {
                min: Some(1),
                max: Some(MAX_DAYS),
            },
        )
        .initial("7"),
    ],
};

/// Multi-day weather forecast for a city.
pub struct WeatherForecast;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub city: String,
    pub days: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub city_name: Option<String>,
    pub forecast: Vec<DailyForecast>,
}

/// One forecast day as reported by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub avg_temp_c: f64,
    pub avg_humidity: f64,
    pub condition: String,
    pub chance_of_rain: f64,
}

impl DailyForecast {
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {}°C - {}°C, avg {}°C, humidity {}%, {}, {}% chance of rain",
            self.date,
            self.min_temp_c,
            self.max_temp_c,
            self.avg_temp_c,
            self.avg_humidity,
            self.condition,
            self.chance_of_rain
        )
    }
}

/// Non-empty forecast for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub city_name: String,
    pub days: Vec<DailyForecast>,
}

impl WeatherReport {
    /// First forecast day, shown as the current conditions.
    #[must_use]
    pub fn current(&self) -> Option<&DailyForecast> {
        self.days.first()
    }
}

impl FormSpec for WeatherForecast {
    type Request = WeatherRequest;
    type Outcome = WeatherReport;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<WeatherRequest, ValidationError> {
        Ok(WeatherRequest {
            city: form.text("city")?,
            days: form.int("days")?,
        })
    }
}

impl Endpoint for WeatherForecast {
    const PATH: &'static str = "/weather_forecast/";
    type Response = WeatherResponse;

    fn outcome(
        request: &WeatherRequest,
        response: WeatherResponse,
    ) -> Result<WeatherReport, SubmitError> {
        if response.forecast.is_empty() {
            return Err(SubmitError::Incomplete(format!(
                "no forecast returned for {}",
                request.city
            )));
        }
        let city_name = response
            .city_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| request.city.clone());
        Ok(WeatherReport {
            city_name,
            days: response.forecast,
        })
    }
}

impl Summary for WeatherReport {
    fn headline(&self) -> String {
        format!("Weather Forecast for {}", self.city_name)
    }

    fn details(&self) -> Vec<String> {
        self.days.iter().map(DailyForecast::summary_line).collect()
    }
}

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;
