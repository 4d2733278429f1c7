//! Infrastructure layer - configuration loading and logging setup
//!
//! Everything the `weather-gov` binary needs around the client itself:
//! layered configuration (defaults, file, environment) and the tracing
//! subscriber.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, CONFIG_ENV_PREFIX};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
