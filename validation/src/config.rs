//! Validation configuration.
//!
//! Defaults reproduce the site's published behavior. A page may override
//! messages or patterns by passing a JSON object; missing keys keep their
//! defaults.

use serde::{Deserialize, Serialize};
use vet_model::messages::{MSG_INVALID_EMAIL, MSG_INVALID_PHONE, MSG_REQUIRED};

use crate::error::ValidationResult;

/// Non-ASCII whitespace, as literal characters for a bracket class.
///
/// `regex-lite` classes are ASCII, so `\s` alone misses the no-break and
/// ideographic spaces an IME produces.
macro_rules! unicode_space {
    () => {
        "\u{00A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}"
    };
}

/// One or more non-whitespace, non-`@` characters, `@`, the same, `.`, the same.
pub const EMAIL_PATTERN: &str = concat!(
    r"^[^\s@",
    unicode_space!(),
    r"]+@[^\s@",
    unicode_space!(),
    r"]+\.[^\s@",
    unicode_space!(),
    r"]+$"
);

/// Digits, hyphens, parentheses, plus signs and whitespace only.
pub const TELEPHONE_PATTERN: &str = concat!(r"^[\d()+\s", unicode_space!(), r"-]+$");

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub messages: Messages,
    pub patterns: Patterns,
}

impl ValidationConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(source: &str) -> ValidationResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Annotation messages, one per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub required: String,
    pub email: String,
    pub telephone: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: MSG_REQUIRED.to_string(),
            email: MSG_INVALID_EMAIL.to_string(),
            telephone: MSG_INVALID_PHONE.to_string(),
        }
    }
}

/// Format rule patterns, in `regex-lite` syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patterns {
    pub email: String,
    pub telephone: String,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            email: EMAIL_PATTERN.to_string(),
            telephone: TELEPHONE_PATTERN.to_string(),
        }
    }
}
