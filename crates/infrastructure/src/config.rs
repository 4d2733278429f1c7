//! Application configuration
//!
//! Sources are layered, later ones winning:
//!
//! 1. built-in defaults
//! 2. `config.toml` in the working directory (optional), or an explicit file
//!    (required when given)
//! 3. environment variables prefixed with `WEATHER_GOV_`, using `__` between
//!    nested keys, e.g. `WEATHER_GOV_WEATHER__TIMEOUT_SECS=10`

use std::path::Path;

use integration_weather_gov::WeatherGovConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Prefix of environment variables read by [`AppConfig::load`]
pub const CONFIG_ENV_PREFIX: &str = "WEATHER_GOV";

const DEFAULT_CONFIG_FILE: &str = "config";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// weather.gov client configuration
    #[serde(default)]
    pub weather: WeatherGovConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` does not exist, a file cannot be
    /// parsed, or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Self::load`], reading environment overrides from `env` instead
    /// of the process environment when given
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.weather
            .validate()
            .map_err(|e| format!("weather: {e}"))?;
        self.telemetry
            .validate()
            .map_err(|e| format!("telemetry: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn empty_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_with_env(None, empty_env()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nothing-here.toml");
        assert!(AppConfig::load_with_env(Some(&missing), empty_env()).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_file(
            r#"
            [weather]
            base_url = "http://localhost:9999"
            timeout_secs = 7

            [telemetry]
            log_filter = "debug"
            format = "json"
            "#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), empty_env()).unwrap();
        assert_eq!(config.weather.base_url, "http://localhost:9999");
        assert_eq!(config.weather.timeout_secs, 7);
        assert_eq!(
            config.weather.user_agent,
            WeatherGovConfig::default().user_agent
        );
        assert_eq!(config.telemetry.log_filter, "debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_file("[weather]\ntimeout_secs = 7\n");

        let mut env = config::Map::new();
        env.insert(
            "WEATHER_GOV_WEATHER__TIMEOUT_SECS".to_string(),
            "12".to_string(),
        );
        env.insert(
            "WEATHER_GOV_WEATHER__USER_AGENT".to_string(),
            "my-app (me@example.com)".to_string(),
        );
        env.insert("UNRELATED_VARIABLE".to_string(), "ignored".to_string());

        let config = AppConfig::load_with_env(Some(file.path()), Some(env)).unwrap();
        assert_eq!(config.weather.timeout_secs, 12);
        assert_eq!(config.weather.user_agent, "my-app (me@example.com)");
        assert_eq!(config.weather.base_url, "https://api.weather.gov");
    }

    #[test]
    fn serialized_default_round_trips_through_file() {
        let defaults = AppConfig::default();
        let file = write_file(&toml::to_string(&defaults).unwrap());

        let loaded = AppConfig::load_with_env(Some(file.path()), empty_env()).unwrap();
        assert_eq!(loaded, defaults);
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = write_file("[weather]\ntimeout_secs = \"soon\"\n");
        assert!(AppConfig::load_with_env(Some(file.path()), empty_env()).is_err());
    }

    #[test]
    fn validate_reports_section() {
        let mut config = AppConfig::default();
        config.weather.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("weather:"), "unexpected error: {err}");
    }

    #[test]
    fn deserialize_partial_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{"telemetry": {"log_filter": "trace"}}"#).unwrap();
        assert_eq!(config.telemetry.log_filter, "trace");
        assert_eq!(config.weather, WeatherGovConfig::default());
    }
}
