//! weather.gov client
//!
//! HTTP client for the National Weather Service API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinates, ForecastType};
use reqwest::{
    Client, RequestBuilder, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::{
    config::WeatherGovConfig,
    error::{ApiFailure, WeatherGovError},
    models::{AlertCollection, ForecastResponse, PointResponse},
};

/// Header carrying a per-request id for log correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Weather client trait for fetching weather.gov data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a coordinate pair to its forecast grid metadata
    async fn fetch_point(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointResponse, WeatherGovError>;

    /// Day/night forecast for a location
    ///
    /// Looks up the point first, then fetches the forecast URL it links to.
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherGovError>;

    /// Hour-by-hour forecast for a location
    async fn fetch_hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherGovError>;

    /// Alerts currently in effect at a location
    async fn fetch_active_alerts(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AlertCollection, WeatherGovError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// weather.gov HTTP client implementation
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    config: WeatherGovConfig,
}

impl NwsClient {
    /// Create a new weather.gov client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configuration is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(config: WeatherGovConfig) -> Result<Self, WeatherGovError> {
        config.validate().map_err(WeatherGovError::Configuration)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| WeatherGovError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherGovError> {
        Self::new(WeatherGovConfig::default())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &WeatherGovConfig {
        &self.config
    }

    fn point_url(&self, coordinates: Coordinates) -> String {
        format!("{}/points/{coordinates}", self.config.base_url())
    }

    fn alerts_url(&self) -> String {
        format!("{}/alerts/active", self.config.base_url())
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> WeatherGovError {
        if error.is_timeout() {
            WeatherGovError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if error.is_builder() {
            // The request never left the client, so retrying cannot help.
            WeatherGovError::ParseError(format!("Invalid request: {error}"))
        } else {
            WeatherGovError::ConnectionFailed(error.to_string())
        }
    }

    /// Send a GET and decode the JSON body, mapping error statuses
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, WeatherGovError> {
        let request_id = Uuid::new_v4();
        let response = request
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        debug!(%request_id, status = status.as_u16(), url = %response.url(), "Received response");

        if !status.is_success() {
            // The status alone decides the failure; an unreadable body only
            // loses the problem details.
            let body = response.text().await.unwrap_or_default();
            let failure = ApiFailure::from_body(status.as_u16(), &body);
            warn!(
                %request_id,
                status = failure.status,
                problem_type = failure.problem_type.as_deref().unwrap_or("-"),
                correlation_id = failure.correlation_id.as_deref().unwrap_or("-"),
                title = %failure.message,
                "weather.gov returned an error"
            );
            return Err(failure.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        serde_json::from_slice(&body).map_err(|e| WeatherGovError::ParseError(e.to_string()))
    }

    /// Point lookup followed by the linked forecast document
    async fn fetch_linked_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        forecast_type: ForecastType,
    ) -> Result<ForecastResponse, WeatherGovError> {
        let point = self.fetch_point(latitude, longitude).await?;

        let url = point
            .properties
            .forecast_url(forecast_type)
            .ok_or_else(|| WeatherGovError::MissingData(missing_link_message(forecast_type)))?;
        let url = Url::parse(url.trim()).map_err(|e| {
            WeatherGovError::ParseError(format!("Invalid forecast URL {url:?}: {e}"))
        })?;

        debug!(url = %url, ?forecast_type, "Fetching forecast");
        self.get_json(self.client.get(url)).await
    }
}

fn missing_link_message(forecast_type: ForecastType) -> String {
    match forecast_type {
        ForecastType::Daily => "Forecast URL not found in point data".to_string(),
        ForecastType::Hourly => "Hourly forecast URL not found in point data".to_string(),
    }
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_point(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointResponse, WeatherGovError> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let url = self.point_url(coordinates);
        debug!(url = %url, "Fetching point metadata");

        self.get_json(self.client.get(&url)).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherGovError> {
        self.fetch_linked_forecast(latitude, longitude, ForecastType::Daily)
            .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherGovError> {
        self.fetch_linked_forecast(latitude, longitude, ForecastType::Hourly)
            .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_active_alerts(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AlertCollection, WeatherGovError> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let url = self.alerts_url();
        debug!(url = %url, point = %coordinates, "Fetching active alerts");

        let alerts: AlertCollection = self
            .get_json(
                self.client
                    .get(&url)
                    .query(&[("point", coordinates.to_string())]),
            )
            .await?;

        debug!(count = alerts.features.len(), "Received alerts");
        Ok(alerts)
    }

    async fn is_healthy(&self) -> bool {
        let reference = Coordinates::new_york();
        self.fetch_point(reference.latitude(), reference.longitude())
            .await
            .is_ok()
    }
}
