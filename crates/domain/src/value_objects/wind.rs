//! Wind value object

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// The 16 compass points, clockwise from north in 22.5° steps
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Wind conditions: speed, direction and optional gusts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Wind {
    /// Sustained wind speed in `speed_unit`
    #[validate(range(min = 0.0))]
    pub speed: f64,

    /// Direction the wind blows from, in degrees (0-360)
    #[validate(range(max = 360))]
    pub direction_degrees: u16,

    /// Gust speed in `speed_unit`
    #[validate(range(min = 0.0))]
    pub gust_speed: Option<f64>,

    /// Unit of measurement for wind speed (e.g. mph, km/h)
    #[validate(length(min = 1))]
    pub speed_unit: String,
}

impl Wind {
    /// Cardinal direction (N, NNE, NE, ...) nearest to `direction_degrees`
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cardinal_direction(&self) -> &'static str {
        let index = (f64::from(self.direction_degrees % 360) / 22.5).round() as usize;
        COMPASS_POINTS[index % COMPASS_POINTS.len()]
    }

    /// Degrees for a 16-point compass abbreviation such as `NW` or `SSE`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWindDirection` for anything that is not
    /// one of the 16 compass points.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn degrees_from_cardinal(direction: &str) -> Result<u16, DomainError> {
        let wanted = direction.trim().to_ascii_uppercase();
        COMPASS_POINTS
            .iter()
            .position(|point| *point == wanted)
            .map(|index| (index as f64 * 22.5).round() as u16)
            .ok_or_else(|| DomainError::InvalidWindDirection(direction.to_string()))
    }
}
