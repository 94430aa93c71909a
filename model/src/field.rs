//! Field structures.
//!
//! A field is one `input` or `textarea` of a form: its current text, whether
//! it is mandatory, and the type tag that selects a format rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::FieldId;

/// The type tag of a field, taken from the HTML `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Generic text (`text`, `textarea`, or no type at all).
    #[default]
    Text,
    /// Email address (`email`).
    Email,
    /// Telephone number (`tel`).
    #[serde(rename = "tel")]
    Telephone,
    /// Any other input type; carries no format rule.
    Other(String),
}

impl FieldType {
    /// Map an HTML `type` attribute to a field type.
    ///
    /// Matching is case-insensitive, like the DOM's `type` property. An empty
    /// attribute is the generic text type.
    pub fn from_html(attr: &str) -> Self {
        let attr = attr.trim().to_ascii_lowercase();
        match attr.as_str() {
            "" | "text" | "textarea" => FieldType::Text,
            "email" => FieldType::Email,
            "tel" => FieldType::Telephone,
            _ => FieldType::Other(attr),
        }
    }

    /// Returns true if values of this type are checked against a pattern.
    pub fn has_format_rule(&self) -> bool {
        matches!(self, FieldType::Email | FieldType::Telephone)
    }

    /// The HTML spelling of this type.
    pub fn as_html(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Telephone => "tel",
            FieldType::Other(name) => name,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_html())
    }
}

/// Whitespace as browsers trim it: ASCII spaces and line breaks, the
/// Unicode space separators and the byte order mark. U+0085 is not included.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// A named input with its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The field's name within its form.
    pub id: FieldId,
    /// Current raw value, untrimmed.
    #[serde(default)]
    pub value: String,
    /// Whether the field carries the `required` attribute.
    #[serde(default)]
    pub required: bool,
    /// Type tag selecting the format rule.
    #[serde(default, rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    /// Create an empty, optional field.
    pub fn new(id: impl Into<FieldId>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            required: false,
            field_type,
        }
    }

    /// Create a generic text field.
    pub fn text(id: impl Into<FieldId>) -> Self {
        Self::new(id, FieldType::Text)
    }

    /// Create an email field.
    pub fn email(id: impl Into<FieldId>) -> Self {
        Self::new(id, FieldType::Email)
    }

    /// Create a telephone field.
    pub fn telephone(id: impl Into<FieldId>) -> Self {
        Self::new(id, FieldType::Telephone)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.value.trim_matches(is_whitespace)
    }

    /// Returns true if the trimmed value is empty.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Returns true if a whole-form pass has to look at this field.
    pub fn needs_check(&self) -> bool {
        self.required || self.field_type.has_format_rule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_html() {
        assert_eq!(FieldType::from_html("email"), FieldType::Email);
        assert_eq!(FieldType::from_html("TEL"), FieldType::Telephone);
        assert_eq!(FieldType::from_html(""), FieldType::Text);
        assert_eq!(
            FieldType::from_html("date"),
            FieldType::Other("date".to_string())
        );
    }

    #[test]
    fn test_field_builder() {
        // GIVEN
        let field = Field::email("email").required().with_value("  a@b.com ");

        // THEN
        assert!(field.required);
        assert_eq!(field.trimmed(), "a@b.com");
        assert!(!field.is_blank());
        assert!(field.needs_check());
    }

    #[test]
    fn test_whitespace_is_blank() {
        let field = Field::text("name").with_value(" \t\n");
        assert!(field.is_blank());
        assert!(!field.needs_check());
    }

    #[test]
    fn test_trim_matches_browser_whitespace() {
        // GIVEN - an IME full-width space and a byte order mark around the value
        let field = Field::text("name").with_value("\u{FEFF}\u{3000}山田\u{3000}");

        // THEN
        assert_eq!(field.trimmed(), "山田");
        assert!(Field::text("name").with_value("\u{3000}\u{00A0}").is_blank());
        // NEL is not whitespace to a browser
        assert!(!Field::text("name").with_value("\u{0085}").is_blank());
    }
}
