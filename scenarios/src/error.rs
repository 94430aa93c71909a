//! Scenario error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while loading or running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture {path}: {message}")]
    Fixture { path: PathBuf, message: String },

    #[error("Scenario {name} has no form")]
    MissingForm { name: String },

    #[error("Step {step} failed: {message}")]
    StepExecution { step: String, message: String },

    #[error("Assertion failed at step {step}: {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn fixture(path: &Path, message: impl Into<String>) -> Self {
        Self::Fixture {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn step_execution(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StepExecution {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
