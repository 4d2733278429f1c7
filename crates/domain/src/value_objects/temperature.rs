//! Temperature value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Fahrenheit temperature scale
    Fahrenheit,
    /// Celsius temperature scale
    Celsius,
    /// Kelvin temperature scale
    Kelvin,
}

impl TemperatureUnit {
    /// Display symbol for the unit
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
            Self::Kelvin => "K",
        }
    }
}

/// Accepts the short codes used in forecast periods (`F`, `C`, `K`) as well
/// as the WMO unit codes used in quantitative values (`wmoUnit:degF`, ...).
impl FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let code = code.strip_prefix("wmoUnit:").unwrap_or(code);
        match code {
            "F" | "degF" => Ok(Self::Fahrenheit),
            "C" | "degC" => Ok(Self::Celsius),
            "K" => Ok(Self::Kelvin),
            _ => Err(DomainError::InvalidTemperatureUnit(s.to_string())),
        }
    }
}

/// A temperature reading with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Numeric value in `unit`
    pub value: f64,
    /// Scale the value is expressed in
    pub unit: TemperatureUnit,
}

impl Temperature {
    /// Create a new temperature reading
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Formatted with one decimal and the unit symbol, e.g. `72.5°F`
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.1}{}", self.value, self.unit.symbol())
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
