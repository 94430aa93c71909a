//! Per-field validity state.

use serde::Serialize;

/// Outcome of the latest validation pass over a field.
///
/// Fields start `Unknown` and move to `Valid` or `Invalid` on blur or on a
/// submit attempt. Only the latest pass is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// Not validated since the page loaded or the form was reset.
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    /// Build from a boolean validation result.
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}
