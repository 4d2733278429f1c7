//! Geographic coordinates value object
//!
//! Every request against weather.gov is keyed by a latitude/longitude pair.
//! Construction validates the ranges, so holding a [`Coordinates`] means the
//! pair is safe to send upstream.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Coordinates;
//!
//! let nyc = Coordinates::new(40.7128, -74.0060).expect("valid coordinates");
//! assert_eq!(nyc.to_string(), "40.712800,-74.006000");
//!
//! assert!(Coordinates::new(91.0, 0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a latitude or longitude is out of range
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidCoordinates {
    /// Latitude outside [-90, 90] (or NaN)
    #[error("Invalid latitude {0}. Must be between -90 and 90")]
    Latitude(f64),

    /// Longitude outside [-180, 180] (or NaN)
    #[error("Invalid longitude {0}. Must be between -180 and 180")]
    Longitude(f64),
}

/// A validated latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = InvalidCoordinates;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinates {
    /// Minimum/maximum latitude in degrees
    pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

    /// Minimum/maximum longitude in degrees
    pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    /// Create a new coordinate pair with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates::Latitude` if latitude is not in [-90, 90]
    /// and `InvalidCoordinates::Longitude` if longitude is not in [-180, 180].
    /// Latitude is checked first. NaN is rejected for both.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !Self::LATITUDE_RANGE.contains(&latitude) {
            return Err(InvalidCoordinates::Latitude(latitude));
        }
        if !Self::LONGITUDE_RANGE.contains(&longitude) {
            return Err(InvalidCoordinates::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// New York City, used as a reference point inside NWS coverage
    #[must_use]
    pub const fn new_york() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.006,
        }
    }
}

/// Fixed-point rendering with six decimals, as weather.gov expects in paths
/// and query strings: `40.712800,-74.006000`.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = Coordinates::new(52.52, 13.405).expect("valid coordinates");
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert_eq!(
            Coordinates::new(91.0, 0.0),
            Err(InvalidCoordinates::Latitude(91.0))
        );
        assert!(Coordinates::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert_eq!(
            Coordinates::new(0.0, 181.0),
            Err(InvalidCoordinates::Longitude(181.0))
        );
        assert!(Coordinates::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_latitude_checked_first() {
        assert!(matches!(
            Coordinates::new(100.0, 200.0),
            Err(InvalidCoordinates::Latitude(_))
        ));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_display_six_decimals() {
        let loc = Coordinates::new(40.7128, -74.0060).unwrap();
        assert_eq!(loc.to_string(), "40.712800,-74.006000");
    }

    #[test]
    fn test_error_messages() {
        let err = Coordinates::new(91.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid latitude 91. Must be between -90 and 90");

        let err = Coordinates::new(0.0, -181.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid longitude -181.5. Must be between -180 and 180"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinates =
            serde_json::from_str(r#"{"latitude": 40.0, "longitude": -74.0}"#).unwrap();
        assert!((ok.latitude() - 40.0).abs() < f64::EPSILON);

        let bad = serde_json::from_str::<Coordinates>(r#"{"latitude": 95.0, "longitude": 0.0}"#);
        assert!(bad.is_err());

        let missing = serde_json::from_str::<Coordinates>(r#"{"latitude": 40.0}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let loc = Coordinates::new_york();
        let json = serde_json::to_string(&loc).unwrap();
        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
