//! Property-based tests for domain value objects and entities
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use domain::{
    AlertSeverity, Coordinates, Temperature, TemperatureUnit, WeatherAlert, Wind,
};
use proptest::prelude::*;

fn wind(direction_degrees: u16) -> Wind {
    Wind {
        speed: 5.0,
        direction_degrees,
        gust_speed: None,
        speed_unit: "mph".to_string(),
    }
}

fn alert(start: DateTime<FixedOffset>, hours: i64) -> WeatherAlert {
    WeatherAlert {
        id: "urn:test".to_string(),
        alert_type: "Heat Advisory".to_string(),
        headline: "Heat Advisory in effect".to_string(),
        description: "Hot temperatures expected.".to_string(),
        severity: AlertSeverity::Moderate,
        start_time: start,
        end_time: start + Duration::hours(hours),
        area: None,
    }
}

// ============================================================================
// Coordinates Property Tests
// ============================================================================

mod coordinates_tests {
    use super::*;

    proptest! {
        #[test]
        fn deserialization_applies_validation(
            lat in -200.0f64..200.0,
            lon in -400.0f64..400.0
        ) {
            let json = serde_json::json!({"latitude": lat, "longitude": lon});
            let decoded = serde_json::from_value::<Coordinates>(json);
            prop_assert_eq!(decoded.is_ok(), Coordinates::new(lat, lon).is_ok());
        }

        #[test]
        fn display_parses_back_within_rounding(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0
        ) {
            let coords = Coordinates::new(lat, lon).unwrap();
            let rendered = coords.to_string();
            let (lat_text, lon_text) = rendered.split_once(',').unwrap();
            prop_assert!((lat_text.parse::<f64>().unwrap() - lat).abs() <= 5e-7);
            prop_assert!((lon_text.parse::<f64>().unwrap() - lon).abs() <= 5e-7);
        }
    }
}

// ============================================================================
// Wind Property Tests
// ============================================================================

mod wind_tests {
    use super::*;

    proptest! {
        #[test]
        fn cardinal_direction_is_within_half_step(degrees in 0u16..=360) {
            let cardinal = wind(degrees).cardinal_direction();
            let center = Wind::degrees_from_cardinal(cardinal).unwrap();
            let diff = (f64::from(degrees) - f64::from(center)).abs();
            let diff = diff.min(360.0 - diff);
            prop_assert!(diff <= 11.75, "{degrees} -> {cardinal} ({center})");
        }

        #[test]
        fn degrees_out_of_range_fail_validation(degrees in 361u16..) {
            use validator::Validate;
            prop_assert!(wind(degrees).validate().is_err());
        }
    }
}

// ============================================================================
// Temperature Property Tests
// ============================================================================

mod temperature_tests {
    use super::*;

    proptest! {
        #[test]
        fn formatted_has_one_decimal_and_symbol(value in -100.0f64..150.0) {
            let formatted = Temperature::new(value, TemperatureUnit::Celsius).formatted();
            prop_assert!(formatted.ends_with("°C"));
            let number = formatted.trim_end_matches("°C");
            prop_assert_eq!(number.split('.').nth(1).map(str::len), Some(1));
        }
    }
}

// ============================================================================
// WeatherAlert Property Tests
// ============================================================================

mod alert_tests {
    use super::*;

    fn start() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
            .unwrap()
    }

    proptest! {
        #[test]
        fn active_exactly_within_window(hours in 1i64..72, offset_minutes in -6000i64..6000) {
            let alert = alert(start(), hours);
            let now = start().with_timezone(&Utc) + Duration::minutes(offset_minutes);
            let expected = offset_minutes >= 0 && offset_minutes <= hours * 60;
            prop_assert_eq!(alert.is_active_at(now), expected);
        }

        #[test]
        fn severity_parse_ignores_case(
            name in prop::sample::select(vec!["extreme", "severe", "moderate", "minor"]),
            upper in any::<bool>()
        ) {
            let input = if upper { name.to_uppercase() } else { name.to_string() };
            let parsed: AlertSeverity = input.parse().unwrap();
            prop_assert_ne!(parsed, AlertSeverity::Unknown);
            prop_assert_eq!(parsed.as_str(), name.to_uppercase());
        }
    }
}
