//! Domain-level errors

use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Unrecognised temperature unit code
    #[error("Invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// Unrecognised compass direction
    #[error("Invalid wind direction: {0}")]
    InvalidWindDirection(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}
