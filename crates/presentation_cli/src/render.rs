//! Human-readable output

use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Utc};
use integration_weather_gov::{
    AlertCollection, ForecastPeriod, ForecastResponse, PointResponse, QuantitativeValue,
};
use serde::Serialize;

const TIME_FORMAT: &str = "%a %Y-%m-%d %H:%M %:z";

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Render `value` as pretty JSON or with the given text renderer
    pub fn render<T: Serialize>(self, value: &T, text: fn(&T) -> String) -> anyhow::Result<String> {
        match self {
            Self::Text => Ok(text(value)),
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

fn time(value: Option<DateTime<FixedOffset>>) -> String {
    value.map_or_else(|| "-".to_string(), |t| t.format(TIME_FORMAT).to_string())
}

pub fn point(point: &PointResponse) -> String {
    let props = &point.properties;
    let grid = match (props.grid_x, props.grid_y) {
        (Some(x), Some(y)) => format!("{} {x},{y}", or_dash(props.grid_id.as_deref())),
        _ => or_dash(props.grid_id.as_deref()).to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "📍 Grid:                 {grid}");
    let _ = writeln!(out, "   Forecast:             {}", or_dash(props.forecast.as_deref()));
    let _ = writeln!(
        out,
        "   Hourly forecast:      {}",
        or_dash(props.forecast_hourly.as_deref())
    );
    let _ = writeln!(
        out,
        "   Observation stations: {}",
        or_dash(props.observation_stations.as_deref())
    );
    let _ = write!(out, "   Time zone:            {}", or_dash(props.time_zone.as_deref()));
    out
}

fn period_line(period: &ForecastPeriod) -> String {
    let name = period.name.as_deref().filter(|n| !n.is_empty()).map_or_else(
        || time(period.start_time),
        ToString::to_string,
    );
    let temperature = period
        .temperature_reading()
        .map_or_else(|| "-".to_string(), |t| t.formatted());

    let mut line = format!(
        "{name}: {temperature}, {}",
        or_dash(period.short_forecast.as_deref())
    );

    if let Some(speed) = period.wind_speed.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(line, ", wind {speed}");
        if let Some(direction) = period.wind_direction.as_deref().filter(|d| !d.is_empty()) {
            let _ = write!(line, " {direction}");
        }
    }

    if let Some(chance) = period
        .probability_of_precipitation
        .as_ref()
        .and_then(QuantitativeValue::as_f64)
    {
        let _ = write!(line, ", {chance:.0}% precip");
    }

    line
}

pub fn forecast(forecast: &ForecastResponse) -> String {
    let periods = forecast.periods();
    if periods.is_empty() {
        return "No forecast periods available".to_string();
    }

    let mut out = format!(
        "🌤️  Forecast (updated {})",
        time(forecast.properties.update_time.or(forecast.properties.updated))
    );
    for period in periods {
        let _ = write!(out, "\n   {}", period_line(period));
    }
    out
}

pub fn alerts(alerts: &AlertCollection) -> String {
    alerts_at(alerts, Utc::now())
}

fn alerts_at(alerts: &AlertCollection, now: DateTime<Utc>) -> String {
    if alerts.features.is_empty() {
        return "✅ No active alerts".to_string();
    }

    let mut out = format!(
        "⚠️  {} alert(s), {} in effect now{}",
        alerts.features.len(),
        alerts.active_alert_count_at(now),
        if alerts.has_severe_alerts() {
            " (severe weather)"
        } else {
            ""
        }
    );

    for feature in &alerts.features {
        let props = &feature.properties;
        let _ = write!(
            out,
            "\n\n[{}] {}\n   {} → {}",
            props.normalized_severity(),
            or_dash(props.event.as_deref()),
            time(props.effective),
            time(props.expires),
        );
        if let Some(headline) = props.headline.as_deref().filter(|h| !h.is_empty()) {
            let _ = write!(out, "\n   {headline}");
        }
        if let Some(area) = props.area_desc.as_deref().filter(|a| !a.is_empty()) {
            let _ = write!(out, "\n   Area: {area}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use integration_weather_gov::{
        AlertFeature, AlertProperties, Feature, ForecastProperties, PointMetadata,
        QuantitativeValue,
    };

    use super::*;

    fn feature<P>(properties: P) -> Feature<P> {
        Feature {
            context: None,
            id: None,
            feature_type: Some("Feature".to_string()),
            geometry: None,
            properties,
        }
    }

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample_period() -> ForecastPeriod {
        ForecastPeriod {
            name: Some("Tonight".to_string()),
            start_time: Some(ts("2024-01-15T18:00:00-05:00")),
            end_time: Some(ts("2024-01-16T06:00:00-05:00")),
            temperature: Some(30),
            temperature_unit: Some("F".to_string()),
            probability_of_precipitation: Some(QuantitativeValue {
                unit_code: Some("wmoUnit:percent".to_string()),
                value: Some(40.into()),
                ..Default::default()
            }),
            wind_speed: Some("5 to 10 mph".to_string()),
            wind_direction: Some("NW".to_string()),
            short_forecast: Some("Chance Snow".to_string()),
            ..Default::default()
        }
    }

    fn sample_alert(severity: &str) -> AlertFeature {
        feature(AlertProperties {
            event: Some("Winter Storm Warning".to_string()),
            severity: Some(severity.to_string()),
            effective: Some(ts("2024-01-15T09:00:00-05:00")),
            expires: Some(ts("2024-01-16T06:00:00-05:00")),
            headline: Some("Heavy snow expected".to_string()),
            area_desc: Some("Kings; Queens".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn point_shows_grid_and_links() {
        let text = point(&feature(PointMetadata {
            grid_id: Some("OKX".to_string()),
            grid_x: Some(33),
            grid_y: Some(35),
            forecast: Some("https://api.weather.gov/gridpoints/OKX/33,35/forecast".to_string()),
            ..Default::default()
        }));

        assert!(text.contains("OKX 33,35"));
        assert!(text.contains("/gridpoints/OKX/33,35/forecast"));
        assert!(text.contains("Time zone:            -"));
    }

    #[test]
    fn period_line_includes_all_parts() {
        assert_eq!(
            period_line(&sample_period()),
            "Tonight: 30.0°F, Chance Snow, wind 5 to 10 mph NW, 40% precip"
        );
    }

    #[test]
    fn period_line_tolerates_missing_values() {
        let line = period_line(&ForecastPeriod::default());
        assert_eq!(line, "-: -, -");
    }

    #[test]
    fn forecast_lists_periods() {
        let text = forecast(&feature(ForecastProperties {
            periods: vec![sample_period(), sample_period()],
            ..Default::default()
        }));
        assert_eq!(text.matches("Tonight").count(), 2);
        assert!(text.starts_with("🌤️  Forecast (updated -)"));
    }

    #[test]
    fn empty_forecast() {
        assert_eq!(
            forecast(&feature(ForecastProperties::default())),
            "No forecast periods available"
        );
    }

    #[test]
    fn no_alerts() {
        assert_eq!(alerts(&AlertCollection::default()), "✅ No active alerts");
    }

    #[test]
    fn alerts_summary_and_details() {
        let collection = AlertCollection {
            features: vec![sample_alert("Severe")],
            ..Default::default()
        };
        let now = ts("2024-01-15T12:00:00-05:00").with_timezone(&Utc);
        let text = alerts_at(&collection, now);

        assert!(text.starts_with("⚠️  1 alert(s), 1 in effect now (severe weather)"));
        assert!(text.contains("[SEVERE] Winter Storm Warning"));
        assert!(text.contains("Heavy snow expected"));
        assert!(text.contains("Area: Kings; Queens"));
    }

    #[test]
    fn json_output_is_pretty() {
        let collection = AlertCollection::default();
        let json = OutputFormat::Json.render(&collection, alerts).unwrap();
        assert!(json.contains("\"features\": []"));

        let text = OutputFormat::Text.render(&collection, alerts).unwrap();
        assert_eq!(text, "✅ No active alerts");
    }
}
