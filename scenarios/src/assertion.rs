//! Assertion types and builders for verifying step outcomes.

use vet_model::{FieldId, Validity};
use vet_site::{FormReaction, SubmitOutcome};
use vet_validation::{AnnotationBoard, Rule};

use crate::error::{ScenarioError, ScenarioResult};

/// What the visitor should see after a step.
#[derive(Debug, Default)]
pub struct Assertion {
    pub valid: Option<bool>,
    pub annotations: Option<usize>,
    pub annotated: Vec<(FieldId, Rule)>,
    pub messages: Vec<(FieldId, String)>,
    pub clean: Vec<FieldId>,
    pub validity: Vec<(FieldId, Validity)>,
    pub prevent_default: Option<bool>,
    pub notification: Option<Option<String>>,
    pub reset: Option<bool>,
    pub error: Option<String>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validated field or form passed.
    pub fn valid(mut self) -> Self {
        self.valid = Some(true);
        self
    }

    /// The validated field or form failed.
    pub fn invalid(mut self) -> Self {
        self.valid = Some(false);
        self
    }

    /// Exactly `n` annotations are on screen.
    pub fn annotations(mut self, n: usize) -> Self {
        self.annotations = Some(n);
        self
    }

    /// `field` shows the annotation of `rule`.
    pub fn annotated(mut self, field: &str, rule: Rule) -> Self {
        self.annotated.push((field.into(), rule));
        self
    }

    /// `field` shows exactly this message.
    pub fn message(mut self, field: &str, message: &str) -> Self {
        self.messages.push((field.into(), message.to_string()));
        self
    }

    /// `field` shows no annotation.
    pub fn clean(mut self, field: &str) -> Self {
        self.clean.push(field.into());
        self
    }

    /// The controller recorded this validity for `field`.
    pub fn validity(mut self, field: &str, validity: Validity) -> Self {
        self.validity.push((field.into(), validity));
        self
    }

    /// The browser's submission went ahead.
    pub fn submitted(mut self) -> Self {
        self.prevent_default = Some(false);
        self
    }

    /// The browser's submission was cancelled.
    pub fn blocked(mut self) -> Self {
        self.prevent_default = Some(true);
        self
    }

    /// A notification with this message was shown.
    pub fn notified(mut self, message: &str) -> Self {
        self.notification = Some(Some(message.to_string()));
        self
    }

    /// No notification was shown.
    pub fn silent(mut self) -> Self {
        self.notification = Some(None);
        self
    }

    /// The form was reset.
    pub fn reset(mut self) -> Self {
        self.reset = Some(true);
        self
    }

    /// The step failed with an error containing this text.
    pub fn error(mut self, text: &str) -> Self {
        self.error = Some(text.to_string());
        self
    }

    /// Verify a step's result.
    pub fn verify(
        &self,
        step: &str,
        result: &Result<FormReaction, String>,
        board: &AnnotationBoard,
        validity: impl Fn(&FieldId) -> Validity,
    ) -> ScenarioResult<()> {
        if let Some(ref expected) = self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected),
                )),
            };
        }

        let reaction = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        match reaction {
            FormReaction::Updated => {}
            FormReaction::Validated { valid, .. } => self.verify_valid(step, *valid)?,
            FormReaction::Submit(outcome) => self.verify_submit(step, outcome)?,
        }

        self.verify_board(step, board)?;

        for (field, expected) in &self.validity {
            let actual = validity(field);
            check(step, actual == *expected, || {
                format!("expected {} to be {:?}, got {:?}", field, expected, actual)
            })?;
        }
        Ok(())
    }

    fn verify_valid(&self, step: &str, actual: bool) -> ScenarioResult<()> {
        match self.valid {
            Some(expected) => check(step, expected == actual, || {
                format!("expected valid={}, got valid={}", expected, actual)
            }),
            None => Ok(()),
        }
    }

    fn verify_submit(&self, step: &str, outcome: &SubmitOutcome) -> ScenarioResult<()> {
        self.verify_valid(step, outcome.valid)?;

        if let Some(expected) = self.prevent_default {
            check(step, outcome.prevent_default == expected, || {
                format!(
                    "expected prevent_default={}, got {}",
                    expected, outcome.prevent_default
                )
            })?;
        }

        if let Some(ref expected) = self.notification {
            let actual = outcome.notification.as_ref().map(|n| n.message.clone());
            check(step, &actual == expected, || {
                format!("expected notification {:?}, got {:?}", expected, actual)
            })?;
        }

        if let Some(expected) = self.reset {
            check(step, outcome.reset == expected, || {
                format!("expected reset={}, got {}", expected, outcome.reset)
            })?;
        }
        Ok(())
    }

    fn verify_board(&self, step: &str, board: &AnnotationBoard) -> ScenarioResult<()> {
        if let Some(expected) = self.annotations {
            check(step, board.len() == expected, || {
                let shown: Vec<_> = board.annotations().map(|a| a.field.to_string()).collect();
                format!(
                    "expected {} annotation(s), got {}: {:?}",
                    expected,
                    board.len(),
                    shown
                )
            })?;
        }

        for (field, rule) in &self.annotated {
            let actual = board.annotation(field).map(|a| a.rule);
            check(step, actual == Some(*rule), || {
                format!("expected {} annotated by {} rule, got {:?}", field, rule, actual)
            })?;
        }

        for (field, message) in &self.messages {
            let actual = board.annotation(field).map(|a| a.message.as_str());
            check(step, actual == Some(message.as_str()), || {
                format!("expected {} to show '{}', got {:?}", field, message, actual)
            })?;
        }

        for field in &self.clean {
            check(step, board.annotation(field).is_none(), || {
                format!("expected no annotation on {}", field)
            })?;
        }
        Ok(())
    }
}

fn check(step: &str, ok: bool, message: impl FnOnce() -> String) -> ScenarioResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ScenarioError::assertion_failed(step, message()))
    }
}
