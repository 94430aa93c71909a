//! The validation engine.

use regex_lite::Regex;
use vet_model::{Field, FieldId, FieldType, Form};

use crate::annotation::{Affordance, ErrorAnnotation};
use crate::config::{Messages, ValidationConfig};
use crate::error::{ValidationError, ValidationResult};
use crate::rule::{FieldCheck, Rule};
use crate::surface::RenderSurface;

/// Validates fields and forms against the required-check and format rules.
///
/// Patterns are compiled once at construction. Every pass is synchronous and
/// total: any field yields a `FieldCheck`, never an error.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    messages: Messages,
    email: Regex,
    telephone: Regex,
}

impl ValidationEngine {
    /// Create an engine from a configuration.
    pub fn new(config: &ValidationConfig) -> ValidationResult<Self> {
        Ok(Self {
            messages: config.messages.clone(),
            email: compile(Rule::EmailFormat, &config.patterns.email)?,
            telephone: compile(Rule::TelephoneFormat, &config.patterns.telephone)?,
        })
    }

    /// Create an engine with the site's default messages and patterns.
    pub fn with_defaults() -> ValidationResult<Self> {
        Self::new(&ValidationConfig::default())
    }

    /// Decide a field's validity without rendering anything.
    pub fn check_field(&self, field: &Field) -> FieldCheck {
        let value = field.trimmed();

        if field.required && value.is_empty() {
            return FieldCheck::invalid(Rule::Required, &self.messages.required);
        }

        if value.is_empty() {
            return FieldCheck::Valid;
        }

        match field.field_type {
            FieldType::Email if !self.email.is_match(value) => {
                FieldCheck::invalid(Rule::EmailFormat, &self.messages.email)
            }
            FieldType::Telephone if !self.telephone.is_match(value) => {
                FieldCheck::invalid(Rule::TelephoneFormat, &self.messages.telephone)
            }
            _ => FieldCheck::Valid,
        }
    }

    /// Validate a single field and render its outcome.
    ///
    /// The field's previous annotation is always removed first, so a field
    /// never shows more than one.
    pub fn validate_field<S: RenderSurface + ?Sized>(&self, field: &Field, surface: &mut S) -> bool {
        surface.clear(&field.id);

        let check = self.check_field(field);
        if let FieldCheck::Invalid { rule, message } = &check {
            log::debug!("field {} failed {} rule", field.id, rule);
            surface.annotate(&ErrorAnnotation::new(field.id.clone(), *rule, message.clone()));
        } else {
            log::trace!("field {} is valid", field.id);
        }

        let valid = check.is_valid();
        surface.mark(&field.id, Affordance::from_valid(valid));
        valid
    }

    /// Validate a whole form and render every field's outcome.
    pub fn validate_form<S: RenderSurface + ?Sized>(&self, form: &Form, surface: &mut S) -> bool {
        self.validate_form_report(form, surface).is_valid()
    }

    /// Validate a whole form, returning the outcome of every checked field.
    ///
    /// Checks every field that is required or carries a format rule. All of
    /// them are rendered, so the user sees every error at once.
    pub fn validate_form_report<S: RenderSurface + ?Sized>(
        &self,
        form: &Form,
        surface: &mut S,
    ) -> FormReport {
        let outcomes: Vec<FieldOutcome> = form
            .fields()
            .iter()
            .filter(|field| field.needs_check())
            .map(|field| FieldOutcome {
                field: field.id.clone(),
                valid: self.validate_field(field, surface),
            })
            .collect();

        let report = FormReport { outcomes };
        log::debug!(
            "form {}: {} checked, {} invalid",
            form.id(),
            report.len(),
            report.invalid_fields().count()
        );
        report
    }
}

fn compile(rule: Rule, pattern: &str) -> ValidationResult<Regex> {
    Regex::new(pattern).map_err(|e| ValidationError::invalid_pattern(rule, e.to_string()))
}

/// The outcome of one field in a whole-form pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: FieldId,
    pub valid: bool,
}

/// Outcomes of a whole-form pass, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    outcomes: Vec<FieldOutcome>,
}

impl FormReport {
    /// Returns true if every checked field is valid.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.valid)
    }

    /// All outcomes.
    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.outcomes
    }

    /// Ids of the fields that failed.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldId> {
        self.outcomes.iter().filter(|o| !o.valid).map(|o| &o.field)
    }

    /// Number of fields checked.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Patterns;
    use crate::surface::AnnotationBoard;
    use vet_model::messages::{MSG_INVALID_EMAIL, MSG_INVALID_PHONE, MSG_REQUIRED};

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults().unwrap()
    }

    #[test]
    fn test_required_empty_and_whitespace() {
        let engine = engine();

        for value in ["", "   ", "\t\n"] {
            // GIVEN
            let mut board = AnnotationBoard::new();
            let field = Field::text("name").required().with_value(value);

            // WHEN
            let valid = engine.validate_field(&field, &mut board);

            // THEN
            assert!(!valid);
            assert_eq!(board.len(), 1);
            let annotation = board.annotation(&field.id).unwrap();
            assert_eq!(annotation.rule, Rule::Required);
            assert_eq!(annotation.message, MSG_REQUIRED);
            assert_eq!(board.affordance(&field.id), Affordance::Invalid);
        }
    }

    #[test]
    fn test_email_format() {
        let engine = engine();

        assert!(engine.check_field(&Field::email("e").with_value("a@b.com")).is_valid());
        assert!(engine.check_field(&Field::email("e").with_value(" a@b.co.jp ")).is_valid());

        for bad in ["foo.bar", "a@bcom", "a@.com", "@b.com", "a b@c.com", "a@b@c.com"] {
            let check = engine.check_field(&Field::email("e").with_value(bad));
            assert_eq!(check.rule(), Some(Rule::EmailFormat), "value {bad:?}");
            assert_eq!(check.message(), Some(MSG_INVALID_EMAIL));
        }
    }

    #[test]
    fn test_telephone_format() {
        let engine = engine();

        for good in ["03-1234-5678", "+81 (3) 1234 5678", "0120123456"] {
            assert!(engine.check_field(&Field::telephone("t").with_value(good)).is_valid());
        }

        let check = engine.check_field(&Field::telephone("t").with_value("call-me"));
        assert_eq!(check.rule(), Some(Rule::TelephoneFormat));
        assert_eq!(check.message(), Some(MSG_INVALID_PHONE));
    }

    #[test]
    fn test_full_width_space_is_whitespace() {
        let engine = engine();

        // GIVEN - values typed with an IME full-width space
        let phone = Field::telephone("t").with_value("03\u{3000}1234\u{3000}5678");
        let email = Field::email("e").with_value("yamada\u{3000}hanako@example.jp");

        // THEN
        assert!(engine.check_field(&phone).is_valid());
        assert_eq!(engine.check_field(&email).rule(), Some(Rule::EmailFormat));
        let blank = Field::email("e").required().with_value("\u{3000}");
        assert_eq!(engine.check_field(&blank).rule(), Some(Rule::Required));
    }

    #[test]
    fn test_pattern_whitespace_agrees_with_trimming() {
        // GIVEN - the telephone class minus digits and punctuation is whitespace only
        let engine = engine();

        // WHEN / THEN
        for c in ('\0'..='\u{FFFF}').filter(|c| !c.is_ascii_digit() && !"()+-".contains(*c)) {
            let field = Field::telephone("t").with_value(format!("1{c}2"));
            assert_eq!(
                engine.check_field(&field).is_valid(),
                vet_model::is_whitespace(c),
                "U+{:04X}",
                c as u32
            );
        }
    }

    #[test]
    fn test_optional_empty_field_is_valid_for_every_type() {
        let engine = engine();
        for field in [Field::email("e"), Field::telephone("t"), Field::text("x")] {
            assert!(engine.check_field(&field.with_value("  ")).is_valid());
        }
    }

    #[test]
    fn test_required_check_short_circuits_format() {
        // GIVEN - required email left blank
        let field = Field::email("email").required();

        // WHEN
        let check = engine().check_field(&field);

        // THEN - only the required message, not the email one
        assert_eq!(check.rule(), Some(Rule::Required));
    }

    #[test]
    fn test_required_field_still_checked_for_format() {
        let field = Field::email("email").required().with_value("nope");
        assert_eq!(engine().check_field(&field).rule(), Some(Rule::EmailFormat));
    }

    #[test]
    fn test_other_types_have_no_format_rule() {
        let field = Field::new("d", FieldType::Other("date".into())).with_value("not a date");
        assert!(engine().check_field(&field).is_valid());
    }

    #[test]
    fn test_validate_field_is_idempotent() {
        // GIVEN
        let engine = engine();
        let mut board = AnnotationBoard::new();
        let field = Field::email("email").with_value("foo.bar");

        // WHEN
        let first = engine.validate_field(&field, &mut board);
        let second = engine.validate_field(&field, &mut board);

        // THEN
        assert_eq!(first, second);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_corrected_field_drops_stale_annotation() {
        // GIVEN
        let engine = engine();
        let mut board = AnnotationBoard::new();
        let mut field = Field::telephone("phone").with_value("call-me");
        assert!(!engine.validate_field(&field, &mut board));

        // WHEN
        field.value = "03-1234-5678".to_string();
        let valid = engine.validate_field(&field, &mut board);

        // THEN
        assert!(valid);
        assert!(board.is_empty());
        assert_eq!(board.affordance(&field.id), Affordance::Valid);
    }

    #[test]
    fn test_validate_form_annotates_every_failure() {
        // GIVEN - three required fields, one empty
        let engine = engine();
        let mut board = AnnotationBoard::new();
        let form = Form::with_fields(
            "contact-form",
            [
                Field::text("name").required().with_value("Hanako"),
                Field::email("email").required().with_value("hanako@example.jp"),
                Field::text("message").required(),
            ],
        )
        .unwrap();

        // WHEN
        let valid = engine.validate_form(&form, &mut board);

        // THEN
        assert!(!valid);
        assert_eq!(board.len(), 1);
        assert!(board.annotation(&FieldId::new("message")).is_some());
    }

    #[test]
    fn test_validate_form_checks_optional_format_fields() {
        // GIVEN - optional phone with a malformed value
        let engine = engine();
        let mut board = AnnotationBoard::new();
        let form = Form::with_fields(
            "f",
            [
                Field::text("name").required().with_value("Taro"),
                Field::telephone("phone").with_value("call-me"),
                Field::text("note").with_value("anything"),
            ],
        )
        .unwrap();

        // WHEN
        let report = engine.validate_form_report(&form, &mut board);

        // THEN - the plain optional field is not part of the pass
        assert!(!report.is_valid());
        assert_eq!(report.len(), 2);
        let invalid: Vec<_> = report.invalid_fields().map(|f| f.as_str()).collect();
        assert_eq!(invalid, vec!["phone"]);
        assert_eq!(board.affordance(&FieldId::new("note")), Affordance::Neutral);
    }

    #[test]
    fn test_empty_form_is_valid() {
        let mut board = AnnotationBoard::new();
        assert!(engine().validate_form(&Form::new("empty"), &mut board));
    }

    #[test]
    fn test_custom_config() {
        // GIVEN - digits-only phone numbers, English messages
        let mut config = ValidationConfig::default();
        config.patterns.telephone = r"^\d+$".to_string();
        config.messages.telephone = "Digits only.".to_string();
        let engine = ValidationEngine::new(&config).unwrap();

        // WHEN
        let check = engine.check_field(&Field::telephone("t").with_value("03-1234"));

        // THEN
        assert_eq!(check.message(), Some("Digits only."));
    }

    #[test]
    fn test_invalid_pattern() {
        let config = ValidationConfig {
            patterns: Patterns {
                email: "([".to_string(),
                ..Patterns::default()
            },
            ..ValidationConfig::default()
        };

        let err = ValidationEngine::new(&config).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidPattern {
                rule: Rule::EmailFormat,
                ..
            }
        ));
    }
}
