//! Weather alert entity

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Alert severity, most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    Unknown,
}

impl AlertSeverity {
    /// Upper-case wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extreme => "EXTREME",
            Self::Severe => "SEVERE",
            Self::Moderate => "MODERATE",
            Self::Minor => "MINOR",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Severe or extreme
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(self, Self::Extreme | Self::Severe)
    }
}

impl FromStr for AlertSeverity {
    type Err = std::convert::Infallible;

    /// Case-insensitive; anything unrecognized becomes `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "EXTREME" => Self::Extreme,
            "SEVERE" => Self::Severe,
            "MODERATE" => Self::Moderate,
            "MINOR" => Self::Minor,
            _ => Self::Unknown,
        })
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weather alert in effect over some area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WeatherAlert {
    /// Issuer-assigned identifier
    #[validate(length(min = 1))]
    pub id: String,

    /// Event name (e.g. "Winter Storm Warning")
    #[validate(length(min = 1))]
    pub alert_type: String,

    #[validate(length(min = 1))]
    pub headline: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub severity: AlertSeverity,

    /// Effective from (inclusive)
    pub start_time: DateTime<FixedOffset>,

    /// Expires at (inclusive)
    pub end_time: DateTime<FixedOffset>,

    /// Human-readable affected area
    pub area: Option<String>,
}

impl WeatherAlert {
    /// Whether `now` falls within `[start_time, end_time]`
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.start_time && now <= self.end_time
    }

    /// Whether the alert is in effect right now
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}
