//! Prediction-service endpoints.
//!
//! One module per page. Each declares the field schema, the request body
//! (with the service's exact field names), the response schema, and the
//! outcome rendered on success.

pub mod crop_yield;
pub mod disease;
pub mod fertilizer;
pub mod market;
pub mod soil_crop;
pub mod weather;

pub use crop_yield::CropYield;
pub use disease::DiseaseDetection;
pub use fertilizer::Fertilizer;
pub use market::MarketForecast;
pub use soil_crop::SoilCrop;
pub use weather::WeatherForecast;
