//! Identity types for forms and fields.
//!
//! Identifiers mirror the `id` and `name` attributes of the markup, so they
//! are strings rather than counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a field within its form (the input's `name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Create a new FieldId.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Identifier of a form (the form element's `id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Create a new FormId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for FormId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
