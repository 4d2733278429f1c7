//! Logging and tracing setup
//!
//! Installs a `tracing-subscriber` registry writing to stderr, either
//! human-readable or as JSON lines.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
