//! weather.gov error types

use domain::{DomainError, InvalidCoordinates};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ProblemDetails;

/// Message used when an error response carries no usable problem body
pub const GENERIC_FAILURE_MESSAGE: &str = "Error response from Weather API";

/// A non-2xx response from weather.gov
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("HTTP {status}: {message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiFailure {
    /// HTTP status code of the response
    pub status: u16,

    /// Problem title, or [`GENERIC_FAILURE_MESSAGE`]
    pub message: String,

    /// Machine-readable problem type URI
    pub problem_type: Option<String>,

    /// Human-readable explanation
    pub detail: Option<String>,

    /// Upstream correlation id, useful when reporting issues to NWS
    pub correlation_id: Option<String>,
}

impl ApiFailure {
    /// Failure carrying only the status and the generic message
    #[must_use]
    pub fn generic(status: u16) -> Self {
        Self {
            status,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            problem_type: None,
            detail: None,
            correlation_id: None,
        }
    }

    /// Failure populated from a problem body
    ///
    /// Falls back to [`Self::generic`] unless the body names a problem `type`.
    #[must_use]
    pub fn from_problem(status: u16, problem: ProblemDetails) -> Self {
        if problem.problem_type.is_none() {
            return Self::generic(status);
        }

        Self {
            status,
            message: problem
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            problem_type: problem.problem_type,
            detail: problem.detail,
            correlation_id: problem.correlation_id,
        }
    }

    /// Build a failure from a raw error body, whatever it contains
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        serde_json::from_str::<ProblemDetails>(body)
            .map_or_else(|_| Self::generic(status), |p| Self::from_problem(status, p))
    }

    /// Rate limited or a server-side problem
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.status == 429 || self.status >= 500
    }
}

/// Errors that can occur while talking to weather.gov
#[derive(Debug, Error)]
pub enum WeatherGovError {
    /// Coordinates out of range; nothing was sent
    #[error(transparent)]
    Validation(#[from] InvalidCoordinates),

    /// weather.gov answered with a non-2xx status
    #[error("Weather API error: {0}")]
    Upstream(ApiFailure),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// A successful response lacked a field the operation depends on
    #[error("{0}")]
    MissingData(String),

    /// Transport-level failure
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A decoded value violates a domain constraint
    #[error("Invalid data: {0}")]
    InvalidData(#[from] DomainError),

    /// Failed to decode a successful response, or a link it carries
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<ApiFailure> for WeatherGovError {
    fn from(failure: ApiFailure) -> Self {
        Self::Upstream(failure)
    }
}

impl WeatherGovError {
    /// Returns true if repeating the same request may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::ConnectionFailed(_) => true,
            Self::Upstream(failure) => failure.is_transient(),
            _ => false,
        }
    }

    /// HTTP status of an upstream failure
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream(failure) => Some(failure.status),
            _ => None,
        }
    }
}
