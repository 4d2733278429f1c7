//! Current weather conditions at an observation station

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::value_objects::{Coordinates, Temperature, Wind};

/// Cloud cover below this percentage counts as clear
const CLEAR_SKY_MAX_CLOUD_COVER: u8 = 30;

/// Observed conditions at a specific location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CurrentConditions {
    /// When the observation was taken
    pub observation_time: DateTime<Utc>,

    /// Observed temperature
    pub temperature: Temperature,

    /// Observed wind
    #[validate(nested)]
    pub wind: Wind,

    /// Text description of the conditions
    #[validate(length(min = 1))]
    pub description: String,

    /// Relative humidity percentage (0-100)
    #[validate(range(max = 100))]
    pub relative_humidity: u8,

    /// Precipitation over the last hour
    #[validate(range(min = 0.0))]
    pub precipitation_last_hour: Option<f64>,

    /// Cloud cover percentage (0-100)
    #[validate(range(max = 100))]
    pub cloud_cover_percentage: u8,

    /// Where the observation was taken
    pub coordinates: Coordinates,

    /// Observation station identifier (e.g. `KNYC`)
    #[validate(length(min = 1))]
    pub station_id: String,

    /// Visibility as reported by the station
    pub visibility: Option<String>,

    /// Barometric pressure in `pressure_unit`
    pub barometric_pressure: f64,

    /// Unit for `barometric_pressure`
    pub pressure_unit: Option<String>,
}

impl CurrentConditions {
    /// Whether precipitation was recorded in the last hour
    #[must_use]
    pub fn has_precipitation(&self) -> bool {
        self.precipitation_last_hour.is_some_and(|p| p > 0.0)
    }

    /// Whether conditions count as clear (cloud cover below 30%)
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.cloud_cover_percentage < CLEAR_SKY_MAX_CLOUD_COVER
    }
}
