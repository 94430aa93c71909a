//! Model error types.

use thiserror::Error;

use crate::{FieldId, FormId};

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or editing a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Duplicate field {field} in form {form}")]
    DuplicateField { form: FormId, field: FieldId },

    #[error("Unknown field {field} in form {form}")]
    UnknownField { form: FormId, field: FieldId },

    #[error("Field name must not be empty")]
    EmptyFieldName,
}

impl ModelError {
    pub fn duplicate_field(form: &FormId, field: &FieldId) -> Self {
        Self::DuplicateField {
            form: form.clone(),
            field: field.clone(),
        }
    }

    pub fn unknown_field(form: &FormId, field: &FieldId) -> Self {
        Self::UnknownField {
            form: form.clone(),
            field: field.clone(),
        }
    }
}
