//! Form submission and blur handling.
//!
//! The DOM adapter translates browser events into `FormEvent`s and applies
//! the returned `FormReaction`. Validation itself is delegated to the
//! shared `ValidationEngine`.

use std::collections::BTreeMap;
use std::rc::Rc;

use vet_model::messages::MSG_CONTACT_THANKS;
use vet_model::{Field, FieldId, Form, ModelError, Validity};
use vet_validation::{FormReport, RenderSurface, ValidationEngine};

use crate::error::SiteResult;
use crate::notification::{Notification, NotificationKind};

/// How a form behaves once it passes validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Let the browser submit the form; only block invalid submissions.
    #[default]
    Native,
    /// Never submit; thank the visitor and reset the form instead.
    Contact,
}

/// An event delivered to a form controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed.
    FieldInput { field: FieldId, value: String },
    /// A field lost focus.
    FieldBlurred { field: FieldId },
    /// The visitor attempted to submit the form.
    Submitted,
}

/// What the submit handler decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether every checked field passed.
    pub valid: bool,
    /// Whether the browser's default submission must be cancelled.
    pub prevent_default: bool,
    /// Notification to present, if any.
    pub notification: Option<Notification>,
    /// Whether the form's values were cleared.
    pub reset: bool,
}

/// The controller's answer to a `FormEvent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormReaction {
    /// A value was stored; nothing to render.
    Updated,
    /// A single field was validated.
    Validated { field: FieldId, valid: bool },
    /// A submit attempt was handled.
    Submit(SubmitOutcome),
}

/// Drives one form: stores values, validates on blur and on submit, and
/// tracks each field's latest validity.
#[derive(Debug, Clone)]
pub struct FormController {
    form: Form,
    engine: Rc<ValidationEngine>,
    mode: SubmitMode,
    validity: BTreeMap<FieldId, Validity>,
}

impl FormController {
    /// Create a controller for a form.
    pub fn new(form: Form, engine: Rc<ValidationEngine>, mode: SubmitMode) -> Self {
        Self {
            form,
            engine,
            mode,
            validity: BTreeMap::new(),
        }
    }

    /// The form as currently filled in.
    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    /// Switch the submit behavior, e.g. when a page registers its contact form.
    pub fn set_mode(&mut self, mode: SubmitMode) {
        self.mode = mode;
    }

    /// Replace the engine; takes effect from the next event.
    pub fn set_engine(&mut self, engine: Rc<ValidationEngine>) {
        self.engine = engine;
    }

    /// The latest validity of a field; `Unknown` until it is first validated.
    pub fn validity(&self, field: &FieldId) -> Validity {
        self.validity.get(field).copied().unwrap_or_default()
    }

    /// Handle one event, rendering validation outcomes on `surface`.
    pub fn handle<S: RenderSurface + ?Sized>(
        &mut self,
        event: FormEvent,
        surface: &mut S,
    ) -> SiteResult<FormReaction> {
        match event {
            FormEvent::FieldInput { field, value } => {
                self.form.set_value(&field, value)?;
                Ok(FormReaction::Updated)
            }
            FormEvent::FieldBlurred { field } => {
                let valid = self.blur(&field, surface)?;
                Ok(FormReaction::Validated { field, valid })
            }
            FormEvent::Submitted => Ok(FormReaction::Submit(self.submit(surface))),
        }
    }

    fn blur<S: RenderSurface + ?Sized>(&mut self, id: &FieldId, surface: &mut S) -> SiteResult<bool> {
        let field = self.lookup(id)?;
        let valid = self.engine.validate_field(field, surface);
        self.validity.insert(id.clone(), Validity::from_valid(valid));
        Ok(valid)
    }

    /// Run a whole-form pass and record every checked field's validity.
    pub fn validate<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> FormReport {
        let report = self.engine.validate_form_report(&self.form, surface);
        for outcome in report.outcomes() {
            self.validity
                .insert(outcome.field.clone(), Validity::from_valid(outcome.valid));
        }
        report
    }

    fn submit<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) -> SubmitOutcome {
        let valid = self.validate(surface).is_valid();
        match self.mode {
            SubmitMode::Native => {
                if !valid {
                    log::info!("submission of {} blocked", self.form.id());
                }
                SubmitOutcome {
                    valid,
                    prevent_default: !valid,
                    notification: None,
                    reset: false,
                }
            }
            SubmitMode::Contact if valid => {
                log::info!("contact form {} accepted", self.form.id());
                self.reset(surface);
                SubmitOutcome {
                    valid,
                    prevent_default: true,
                    notification: Some(Notification::new(
                        MSG_CONTACT_THANKS,
                        NotificationKind::Success,
                    )),
                    reset: true,
                }
            }
            SubmitMode::Contact => SubmitOutcome {
                valid,
                prevent_default: true,
                notification: None,
                reset: false,
            },
        }
    }

    /// Clear every value and return all fields to `Unknown`.
    pub fn reset<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        self.form.reset();
        for field in self.form.fields() {
            surface.clear(&field.id);
        }
        self.validity.clear();
    }

    fn lookup(&self, id: &FieldId) -> SiteResult<&Field> {
        self.form
            .field(id)
            .ok_or_else(|| ModelError::unknown_field(self.form.id(), id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vet_validation::{Affordance, AnnotationBoard};

    fn controller(mode: SubmitMode) -> FormController {
        let form = Form::with_fields(
            "contact-form",
            [
                Field::text("name").required(),
                Field::email("email").required(),
                Field::telephone("phone"),
            ],
        )
        .unwrap();
        let engine = Rc::new(ValidationEngine::with_defaults().unwrap());
        FormController::new(form, engine, mode)
    }

    fn input(field: &str, value: &str) -> FormEvent {
        FormEvent::FieldInput {
            field: field.into(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_blur_moves_field_out_of_unknown() {
        // GIVEN
        let mut ctl = controller(SubmitMode::Native);
        let mut board = AnnotationBoard::new();
        let email = FieldId::new("email");
        assert_eq!(ctl.validity(&email), Validity::Unknown);

        // WHEN
        ctl.handle(input("email", "foo.bar"), &mut board).unwrap();
        let reaction = ctl
            .handle(FormEvent::FieldBlurred { field: email.clone() }, &mut board)
            .unwrap();

        // THEN
        assert_eq!(
            reaction,
            FormReaction::Validated {
                field: email.clone(),
                valid: false
            }
        );
        assert_eq!(ctl.validity(&email), Validity::Invalid);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_blur_unknown_field() {
        let mut ctl = controller(SubmitMode::Native);
        let mut board = AnnotationBoard::new();
        let err = ctl
            .handle(FormEvent::FieldBlurred { field: "fax".into() }, &mut board)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown field fax in form #contact-form");
    }

    #[test]
    fn test_native_submit_blocked_when_invalid() {
        // GIVEN
        let mut ctl = controller(SubmitMode::Native);
        let mut board = AnnotationBoard::new();
        ctl.handle(input("name", "Taro"), &mut board).unwrap();

        // WHEN
        let reaction = ctl.handle(FormEvent::Submitted, &mut board).unwrap();

        // THEN
        let FormReaction::Submit(outcome) = reaction else {
            panic!("expected submit reaction");
        };
        assert!(!outcome.valid);
        assert!(outcome.prevent_default);
        assert_eq!(board.len(), 1);
        assert_eq!(ctl.validity(&"name".into()), Validity::Valid);
        assert_eq!(ctl.validity(&"email".into()), Validity::Invalid);
    }

    #[test]
    fn test_native_submit_proceeds_when_valid() {
        let mut ctl = controller(SubmitMode::Native);
        let mut board = AnnotationBoard::new();
        ctl.handle(input("name", "Taro"), &mut board).unwrap();
        ctl.handle(input("email", "taro@example.jp"), &mut board).unwrap();

        let reaction = ctl.handle(FormEvent::Submitted, &mut board).unwrap();

        assert_eq!(
            reaction,
            FormReaction::Submit(SubmitOutcome {
                valid: true,
                prevent_default: false,
                notification: None,
                reset: false,
            })
        );
    }

    #[test]
    fn test_contact_submit_thanks_and_resets() {
        // GIVEN
        let mut ctl = controller(SubmitMode::Contact);
        let mut board = AnnotationBoard::new();
        ctl.handle(input("name", "Hanako"), &mut board).unwrap();
        ctl.handle(input("email", "hanako@example.jp"), &mut board).unwrap();
        ctl.handle(input("phone", "03-1234-5678"), &mut board).unwrap();

        // WHEN
        let FormReaction::Submit(outcome) = ctl.handle(FormEvent::Submitted, &mut board).unwrap()
        else {
            panic!("expected submit reaction");
        };

        // THEN
        assert!(outcome.valid);
        assert!(outcome.prevent_default);
        assert!(outcome.reset);
        let notification = outcome.notification.unwrap();
        assert_eq!(notification.message, MSG_CONTACT_THANKS);
        assert_eq!(notification.kind, NotificationKind::Success);
        assert!(ctl.form().fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(ctl.validity(&"email".into()), Validity::Unknown);
        assert_eq!(board.affordance(&"email".into()), Affordance::Neutral);
    }

    #[test]
    fn test_validate_does_not_submit() {
        // GIVEN - a complete contact form
        let mut ctl = controller(SubmitMode::Contact);
        let mut board = AnnotationBoard::new();
        ctl.handle(input("name", "Hanako"), &mut board).unwrap();
        ctl.handle(input("email", "hanako@example.jp"), &mut board).unwrap();

        // WHEN
        let report = ctl.validate(&mut board);

        // THEN - values survive, no reset happened
        assert!(report.is_valid());
        assert_eq!(report.len(), 3);
        assert_eq!(ctl.validity(&"name".into()), Validity::Valid);
        assert_eq!(ctl.form().field(&"name".into()).unwrap().value, "Hanako");
    }

    #[test]
    fn test_contact_submit_invalid_keeps_values() {
        let mut ctl = controller(SubmitMode::Contact);
        let mut board = AnnotationBoard::new();
        ctl.handle(input("name", "Hanako"), &mut board).unwrap();

        let FormReaction::Submit(outcome) = ctl.handle(FormEvent::Submitted, &mut board).unwrap()
        else {
            panic!("expected submit reaction");
        };

        assert!(!outcome.valid);
        assert!(outcome.prevent_default);
        assert!(outcome.notification.is_none());
        assert_eq!(ctl.form().field(&"name".into()).unwrap().value, "Hanako");
    }
}
