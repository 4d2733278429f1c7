//! A single forecast period (hourly or half-day)

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::value_objects::{Temperature, Wind};

/// First local hour counted as daytime
const DAYTIME_START_HOUR: u32 = 6;
/// First local hour counted as night again
const DAYTIME_END_HOUR: u32 = 20;

/// Forecast for one period of time
///
/// Timestamps keep the offset they were issued with, so hour-of-day
/// predicates are evaluated in the forecast location's local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PeriodForecast {
    /// Period start
    pub start_time: DateTime<FixedOffset>,

    /// Period end
    pub end_time: DateTime<FixedOffset>,

    /// Short text description (e.g. "Sunny")
    #[validate(length(min = 1))]
    pub description: String,

    /// Forecast temperature
    pub temperature: Temperature,

    /// Forecast wind
    #[validate(nested)]
    pub wind: Wind,

    /// Chance of precipitation (0-100)
    #[validate(range(max = 100))]
    pub precipitation_probability: Option<u8>,

    /// Relative humidity (0-100)
    #[validate(range(max = 100))]
    pub relative_humidity: Option<u8>,

    /// Expected precipitation amount in `precipitation_unit`
    #[validate(range(min = 0.0))]
    pub precipitation_amount: Option<f64>,

    /// Unit for `precipitation_amount`
    pub precipitation_unit: Option<String>,

    /// Cloud cover (0-100)
    #[validate(range(max = 100))]
    pub cloud_cover_percentage: Option<u8>,
}

impl PeriodForecast {
    /// Whether the period starts during the day (06:00 to 19:59 local time)
    #[must_use]
    pub fn is_daytime(&self) -> bool {
        (DAYTIME_START_HOUR..DAYTIME_END_HOUR).contains(&self.start_time.hour())
    }

    /// Length of the period in whole hours
    #[must_use]
    pub fn duration_hours(&self) -> i64 {
        (self.end_time - self.start_time).num_hours()
    }
}
