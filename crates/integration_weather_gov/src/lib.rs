//! weather.gov integration
//!
//! Client for the National Weather Service API (<https://api.weather.gov>).
//! Resolves coordinates to forecast grid points, follows the point's forecast
//! link and lists active alerts. No API key is needed, but the service asks
//! every caller to send an identifying `User-Agent`.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{NwsClient, WeatherClient};
pub use config::WeatherGovConfig;
pub use error::{ApiFailure, WeatherGovError};
pub use models::{
    AlertCollection, AlertFeature, AlertProperties, Feature, ForecastPeriod, ForecastProperties,
    ForecastResponse, PointMetadata, PointResponse, ProblemDetails, QuantitativeValue,
};
