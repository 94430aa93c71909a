//! Site controller error types.

use thiserror::Error;
use vet_model::ModelError;
use vet_validation::ValidationError;

/// Result type for controller operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors that can occur while driving a controller.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
