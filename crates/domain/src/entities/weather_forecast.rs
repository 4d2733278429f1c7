//! A complete forecast made of ordered periods

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::PeriodForecast;
use crate::value_objects::Coordinates;

/// Granularity of a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastType {
    /// Hour-by-hour forecast
    Hourly,
    /// Day/night forecast
    Daily,
}

/// Forecast for one location, made of chronologically ordered periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeatherForecast {
    /// Hourly or daily
    pub forecast_type: ForecastType,

    /// When the forecast was generated
    pub generated_time: DateTime<Utc>,

    /// Location the forecast applies to
    pub coordinates: Coordinates,

    /// Ordered, non-overlapping periods
    #[validate(length(min = 1), nested)]
    pub periods: Vec<PeriodForecast>,

    /// When a newer forecast is expected
    pub next_update: DateTime<Utc>,
}

impl WeatherForecast {
    /// Hours from the first period's start to the last period's end
    #[must_use]
    pub fn total_forecast_hours(&self) -> i64 {
        match (self.periods.first(), self.periods.last()) {
            (Some(first), Some(last)) => (last.end_time - first.start_time).num_hours(),
            _ => 0,
        }
    }

    /// Number of periods in this forecast
    #[must_use]
    pub fn number_of_periods(&self) -> usize {
        self.periods.len()
    }

    /// Whether `now` is past the announced next update
    #[must_use]
    pub fn needs_update_at(&self, now: DateTime<Utc>) -> bool {
        now > self.next_update
    }

    /// Whether the forecast is stale right now
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.needs_update_at(Utc::now())
    }
}
