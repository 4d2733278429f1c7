//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use infrastructure::AppConfig;

/// weather.gov CLI
#[derive(Debug, Parser)]
#[command(name = "weather-gov")]
#[command(author, version, about = "Query forecasts and alerts from weather.gov", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the User-Agent sent to weather.gov
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Override the per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print the raw response as pretty JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// A coordinate pair as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct Location {
    /// Latitude in degrees (-90 to 90)
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees (-180 to 180)
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Look up the forecast grid for a location
    ///
    /// Example: weather-gov point 40.7128 -74.0060
    Point(Location),

    /// Show the forecast for a location
    ///
    /// Example: weather-gov forecast 40.7128 -74.0060 --hourly
    Forecast {
        #[command(flatten)]
        location: Location,

        /// Hour-by-hour instead of day/night periods
        #[arg(long)]
        hourly: bool,
    },

    /// List alerts currently in effect at a location
    Alerts(Location),

    /// Check that weather.gov is reachable
    Health,
}

impl Cli {
    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.weather.base_url.clone_from(base_url);
        }
        if let Some(user_agent) = &self.user_agent {
            config.weather.user_agent.clone_from(user_agent);
        }
        if let Some(timeout) = self.timeout {
            config.weather.timeout_secs = timeout;
        }
        if self.verbose > 0 {
            config.telemetry.log_filter = log_filter_from_verbosity(self.verbose).to_string();
        }
    }
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weather-gov").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = parse(&["point", "-33.86", "-151.2"]);
        assert_eq!(
            cli.command,
            Command::Point(Location {
                latitude: -33.86,
                longitude: -151.2,
            })
        );
    }

    #[test]
    fn parses_hourly_forecast() {
        let cli = parse(&["forecast", "40.7128", "-74.006", "--hourly"]);
        match cli.command {
            Command::Forecast { location, hourly } => {
                assert!(hourly);
                assert!((location.longitude + 74.006).abs() < f64::EPSILON);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["alerts", "40.7", "-74.0", "--json", "-vv", "--timeout", "5"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let result = Cli::try_parse_from(["weather-gov", "point", "north", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = parse(&[
            "--base-url",
            "http://localhost:8080",
            "--user-agent",
            "tester (t@example.com)",
            "--timeout",
            "3",
            "-v",
            "health",
        ]);

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.weather.base_url, "http://localhost:8080");
        assert_eq!(config.weather.user_agent, "tester (t@example.com)");
        assert_eq!(config.weather.timeout_secs, 3);
        assert_eq!(config.telemetry.log_filter, "info");
    }

    #[test]
    fn no_overrides_keep_config() {
        let cli = parse(&["health"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
