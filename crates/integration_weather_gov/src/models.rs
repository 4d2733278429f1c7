//! weather.gov wire models
//!
//! GeoJSON-shaped response bodies as weather.gov sends them. Field names follow
//! the upstream camelCase; every upstream field the service may omit is an
//! `Option`. Fields without a typed counterpart land in an `extra` map, so a
//! decoded document re-serializes with every field it arrived with.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use domain::{
    AlertSeverity, Coordinates, DomainError, ForecastType, PeriodForecast, Temperature,
    TemperatureUnit, WeatherAlert, WeatherForecast, Wind,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use validator::Validate;

use crate::error::WeatherGovError;

/// Label used for alerts whose severity is missing
pub const UNKNOWN_SEVERITY: &str = "UNKNOWN";

/// Gridpoint forecasts are regenerated roughly hourly
const FORECAST_REFRESH_HOURS: i64 = 1;

/// GeoJSON feature envelope
///
/// `@context` and `geometry` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(rename = "@context", default)]
    pub context: Option<Value>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub feature_type: Option<String>,

    #[serde(default)]
    pub geometry: Option<Value>,

    #[serde(default)]
    pub properties: P,
}

/// Response of `GET /points/{lat},{lon}`
pub type PointResponse = Feature<PointMetadata>;

/// Response of `GET <forecast URL>`
pub type ForecastResponse = Feature<ForecastProperties>;

/// One feature of an alert collection
pub type AlertFeature = Feature<AlertProperties>;

/// Grid metadata for a coordinate pair, with links to its resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointMetadata {
    /// Forecast office id (e.g. `OKX`)
    pub grid_id: Option<String>,
    pub grid_x: Option<i32>,
    pub grid_y: Option<i32>,
    pub forecast_office: Option<String>,
    /// Absolute URL of the day/night forecast
    pub forecast: Option<String>,
    /// Absolute URL of the hourly forecast
    pub forecast_hourly: Option<String>,
    pub forecast_grid_data: Option<String>,
    pub observation_stations: Option<String>,
    pub time_zone: Option<String>,
    pub radar_station: Option<String>,
    /// `@id`, `cwa`, `relativeLocation`, zone links and the like
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PointMetadata {
    /// Non-blank forecast link for the requested granularity
    #[must_use]
    pub fn forecast_url(&self, forecast_type: ForecastType) -> Option<&str> {
        let link = match forecast_type {
            ForecastType::Daily => self.forecast.as_deref(),
            ForecastType::Hourly => self.forecast_hourly.as_deref(),
        };
        link.filter(|url| !url.trim().is_empty())
    }
}

/// A value with a WMO unit code, e.g. `{"unitCode": "wmoUnit:percent", "value": 20}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    pub unit_code: Option<String>,
    /// Kept as sent, so `20` stays an integer
    pub value: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuantitativeValue {
    /// Numeric value as a float
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_ref().and_then(Number::as_f64)
    }
}

/// Properties of a forecast document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    pub updated: Option<DateTime<FixedOffset>>,
    pub units: Option<String>,
    pub forecast_generator: Option<String>,
    pub generated_at: Option<DateTime<FixedOffset>>,
    pub update_time: Option<DateTime<FixedOffset>>,
    /// ISO-8601 interval, e.g. `2024-01-15T10:00:00+00:00/P7DT14H`
    pub valid_times: Option<String>,
    pub elevation: Option<QuantitativeValue>,
    /// Chronologically ordered, non-overlapping periods
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feature<ForecastProperties> {
    /// Forecast periods in upstream order
    #[must_use]
    pub fn periods(&self) -> &[ForecastPeriod] {
        &self.properties.periods
    }

    /// Convert to a domain forecast for `coordinates`
    ///
    /// # Errors
    ///
    /// Returns `MissingData` if the document has no periods, no generation
    /// time, or a period lacks a required value, and `InvalidData` if a value
    /// is out of range.
    pub fn to_weather_forecast(
        &self,
        coordinates: Coordinates,
        forecast_type: ForecastType,
    ) -> Result<WeatherForecast, WeatherGovError> {
        let props = &self.properties;
        let generated = props
            .generated_at
            .or(props.update_time)
            .or(props.updated)
            .ok_or_else(|| missing("Forecast generation time not found"))?
            .with_timezone(&Utc);

        if props.periods.is_empty() {
            return Err(missing("Forecast contains no periods"));
        }

        let periods = props
            .periods
            .iter()
            .map(PeriodForecast::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let forecast = WeatherForecast {
            forecast_type,
            generated_time: generated,
            coordinates,
            periods,
            next_update: generated + Duration::hours(FORECAST_REFRESH_HOURS),
        };
        forecast.validate().map_err(DomainError::from)?;
        Ok(forecast)
    }
}

/// One period of a forecast
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub number: Option<u32>,
    /// Display name, e.g. "Tonight" or "Wednesday"
    pub name: Option<String>,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub is_daytime: Option<bool>,
    pub temperature: Option<i32>,
    /// `F` or `C`
    pub temperature_unit: Option<String>,
    pub temperature_trend: Option<String>,
    pub probability_of_precipitation: Option<QuantitativeValue>,
    pub relative_humidity: Option<QuantitativeValue>,
    /// Free text such as `10 mph` or `5 to 10 mph`
    pub wind_speed: Option<String>,
    pub wind_gust: Option<String>,
    /// 16-point compass abbreviation, e.g. `NW`
    pub wind_direction: Option<String>,
    pub icon: Option<String>,
    pub short_forecast: Option<String>,
    pub detailed_forecast: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ForecastPeriod {
    /// Temperature with its unit, when both are present and the unit is known
    #[must_use]
    pub fn temperature_reading(&self) -> Option<Temperature> {
        let value = self.temperature?;
        let unit = self.temperature_unit.as_deref()?.parse::<TemperatureUnit>().ok()?;
        Some(Temperature::new(f64::from(value), unit))
    }
}

impl TryFrom<&ForecastPeriod> for PeriodForecast {
    type Error = WeatherGovError;

    fn try_from(period: &ForecastPeriod) -> Result<Self, Self::Error> {
        let label = period.name.as_deref().unwrap_or("forecast period");

        let start_time = period
            .start_time
            .ok_or_else(|| missing(format!("Start time missing for {label}")))?;
        let end_time = period
            .end_time
            .ok_or_else(|| missing(format!("End time missing for {label}")))?;
        let temperature = period
            .temperature_reading()
            .ok_or_else(|| missing(format!("Temperature missing for {label}")))?;
        let (speed, speed_unit) = period
            .wind_speed
            .as_deref()
            .and_then(parse_wind_speed)
            .ok_or_else(|| missing(format!("Wind speed missing for {label}")))?;

        let direction_degrees = match period.wind_direction.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(direction) => Wind::degrees_from_cardinal(direction)?,
        };

        Ok(Self {
            start_time,
            end_time,
            description: period
                .short_forecast
                .clone()
                .filter(|text| !text.trim().is_empty())
                .ok_or_else(|| missing(format!("Short forecast missing for {label}")))?,
            temperature,
            wind: Wind {
                speed,
                direction_degrees,
                gust_speed: period
                    .wind_gust
                    .as_deref()
                    .and_then(parse_wind_speed)
                    .map(|(gust, _)| gust),
                speed_unit,
            },
            precipitation_probability: period
                .probability_of_precipitation
                .as_ref()
                .and_then(percentage),
            relative_humidity: period.relative_humidity.as_ref().and_then(percentage),
            precipitation_amount: None,
            precipitation_unit: None,
            cloud_cover_percentage: None,
        })
    }
}

/// Parse `"10 mph"` or `"5 to 10 mph"` into the (upper bound) speed and unit
fn parse_wind_speed(text: &str) -> Option<(f64, String)> {
    let mut highest: Option<f64> = None;
    let mut unit = None;

    for token in text.split_whitespace() {
        match token.parse::<f64>() {
            Ok(value) => highest = Some(highest.map_or(value, |h| h.max(value))),
            Err(_) if token != "to" => unit = Some(token.to_string()),
            Err(_) => {},
        }
    }

    Some((highest?, unit.unwrap_or_else(|| "mph".to_string())))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(value: &QuantitativeValue) -> Option<u8> {
    value.as_f64().map(|v| v.round().clamp(0.0, 100.0) as u8)
}

fn non_blank(text: Option<&String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty()).cloned()
}

fn missing(message: impl Into<String>) -> WeatherGovError {
    WeatherGovError::MissingData(message.into())
}

/// Response of `GET /alerts/active`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertCollection {
    #[serde(rename = "@context", default)]
    pub context: Option<Value>,

    #[serde(rename = "type", default)]
    pub collection_type: Option<String>,

    /// Alerts; empty when nothing is in effect
    #[serde(default)]
    pub features: Vec<AlertFeature>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub updated: Option<DateTime<FixedOffset>>,

    /// e.g. `pagination`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlertCollection {
    /// Number of alerts active at `now`
    #[must_use]
    pub fn active_alert_count_at(&self, now: DateTime<Utc>) -> usize {
        self.features
            .iter()
            .filter(|feature| feature.properties.is_active_at(now))
            .count()
    }

    /// Number of alerts active right now
    #[must_use]
    pub fn active_alert_count(&self) -> usize {
        self.active_alert_count_at(Utc::now())
    }

    /// Whether any alert is rated severe or extreme
    #[must_use]
    pub fn has_severe_alerts(&self) -> bool {
        self.features
            .iter()
            .any(|feature| feature.properties.severity_level().is_severe())
    }

    /// Convert every feature to a domain alert
    ///
    /// # Errors
    ///
    /// Returns `MissingData` for the first feature lacking an id, event,
    /// headline, description or validity window.
    pub fn to_weather_alerts(&self) -> Result<Vec<WeatherAlert>, WeatherGovError> {
        self.features
            .iter()
            .map(|feature| -> Result<WeatherAlert, WeatherGovError> {
                let alert = WeatherAlert::try_from(feature)?;
                alert.validate().map_err(DomainError::from)?;
                Ok(alert)
            })
            .collect()
    }
}

/// Properties of a single alert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    pub id: Option<String>,
    pub area_desc: Option<String>,
    pub sent: Option<DateTime<FixedOffset>>,
    pub effective: Option<DateTime<FixedOffset>>,
    pub onset: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    pub ends: Option<DateTime<FixedOffset>>,
    pub status: Option<String>,
    pub message_type: Option<String>,
    pub category: Option<String>,
    pub severity: Option<String>,
    pub certainty: Option<String>,
    pub urgency: Option<String>,
    /// Event name, e.g. "Winter Storm Warning"
    pub event: Option<String>,
    pub sender_name: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
    pub response: Option<String>,
    pub parameters: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlertProperties {
    /// Whether `effective <= now <= expires`
    ///
    /// An alert missing either bound is never active.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match (self.effective, self.expires) {
            (Some(effective), Some(expires)) => now >= effective && now <= expires,
            _ => false,
        }
    }

    /// Whether the alert is in effect right now
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Upper-cased severity, or `UNKNOWN` when absent
    #[must_use]
    pub fn normalized_severity(&self) -> String {
        self.severity
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| UNKNOWN_SEVERITY.to_string(), str::to_ascii_uppercase)
    }

    /// Severity as a domain level
    #[must_use]
    pub fn severity_level(&self) -> AlertSeverity {
        self.severity
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(AlertSeverity::Unknown)
    }
}

impl TryFrom<&AlertFeature> for WeatherAlert {
    type Error = WeatherGovError;

    fn try_from(feature: &AlertFeature) -> Result<Self, Self::Error> {
        let props = &feature.properties;
        let id = props
            .id
            .clone()
            .or_else(|| feature.id.clone())
            .ok_or_else(|| missing("Alert id not found"))?;
        let alert_type = props
            .event
            .clone()
            .ok_or_else(|| missing(format!("Event missing for alert {id}")))?;
        let start_time = props
            .effective
            .ok_or_else(|| missing(format!("Effective time missing for alert {id}")))?;
        let end_time = props
            .expires
            .ok_or_else(|| missing(format!("Expiry time missing for alert {id}")))?;

        let headline = non_blank(props.headline.as_ref())
            .ok_or_else(|| missing(format!("Headline missing for alert {id}")))?;
        let description = non_blank(props.description.as_ref())
            .ok_or_else(|| missing(format!("Description missing for alert {id}")))?;

        Ok(Self {
            alert_type,
            headline,
            description,
            severity: props.severity_level(),
            start_time,
            end_time,
            area: props.area_desc.clone(),
            id,
        })
    }
}

/// Problem body returned with error responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    pub title: Option<String>,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub instance: Option<String>,
    pub correlation_id: Option<String>,
}
