//! Error annotations and visual affordances.

use vet_model::FieldId;

use crate::rule::Rule;

/// Border color of a field that has not been decided in the current pass.
pub const COLOR_NEUTRAL: &str = "#e0e0e0";
/// Border color of a valid field.
pub const COLOR_VALID: &str = "#4CAF50";
/// Border color of an invalid field.
pub const COLOR_INVALID: &str = "#f44336";

/// A hint rendered next to an invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAnnotation {
    /// The field the hint belongs to.
    pub field: FieldId,
    /// The rule that failed.
    pub rule: Rule,
    /// Human-readable message.
    pub message: String,
}

impl ErrorAnnotation {
    /// Create a new annotation.
    pub fn new(field: FieldId, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// The style signal applied to a field after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Affordance {
    /// Previous styling removed; shown while a pass is in progress.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl Affordance {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Affordance::Valid
        } else {
            Affordance::Invalid
        }
    }

    /// The CSS border color for this affordance.
    pub fn border_color(&self) -> &'static str {
        match self {
            Affordance::Neutral => COLOR_NEUTRAL,
            Affordance::Valid => COLOR_VALID,
            Affordance::Invalid => COLOR_INVALID,
        }
    }
}
