//! Validation rules.

use std::fmt;

/// A single validation rule. Rules are evaluated in declaration order and
/// only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// A required field must have a non-empty trimmed value.
    Required,
    /// A non-empty email value must look like `local@domain.tld`.
    EmailFormat,
    /// A non-empty telephone value may only hold digits, `-`, `(`, `)`, `+`
    /// and whitespace.
    TelephoneFormat,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::EmailFormat => "email",
            Rule::TelephoneFormat => "telephone",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of checking one field, before any rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid { rule: Rule, message: String },
}

impl FieldCheck {
    pub fn invalid(rule: Rule, message: impl Into<String>) -> Self {
        Self::Invalid {
            rule,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    /// The failing rule, if any.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid { rule, .. } => Some(*rule),
        }
    }

    /// The message to show, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid { message, .. } => Some(message),
        }
    }
}
