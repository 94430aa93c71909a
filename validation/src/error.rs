//! Validation error types.
//!
//! Invalid field values are not errors; they are reported as `FieldCheck`
//! results. These errors cover building an engine from configuration.

use thiserror::Error;

use crate::rule::Rule;

/// Result type for validation setup.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors that can occur while configuring the validation engine.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid pattern for {rule} rule: {message}")]
    InvalidPattern { rule: Rule, message: String },

    #[error("Invalid validation config: {message}")]
    Config { message: String },
}

impl ValidationError {
    pub fn invalid_pattern(rule: Rule, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            rule,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config {
            message: e.to_string(),
        }
    }
}
