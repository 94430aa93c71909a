//! Scenario definition.

use std::path::PathBuf;

use vet_model::{FieldId, Form};
use vet_site::SubmitMode;
use vet_validation::ValidationConfig;

use crate::assertion::Assertion;
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// A visitor action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a value into a field, replacing its content.
    Input { field: FieldId, value: String },
    /// Leave a field.
    Blur { field: FieldId },
    /// Press the submit button.
    Submit,
}

impl Action {
    /// Short label used in failure messages.
    pub fn label(&self) -> String {
        match self {
            Action::Input { field, .. } => format!("input {}", field),
            Action::Blur { field } => format!("blur {}", field),
            Action::Submit => "submit".to_string(),
        }
    }
}

/// One action with the assertion checked after it.
pub struct Step {
    pub action: Action,
    pub assertion: Option<Assertion>,
}

/// Source of a scenario's form.
pub(crate) enum FormSource {
    Inline(Form),
    Fixture(String),
}

/// Source of a scenario's validation config.
pub(crate) enum ConfigSource {
    Default,
    Inline(ValidationConfig),
    Fixture(String),
}

/// A form fixture plus the visitor actions to replay against it.
pub struct Scenario {
    name: String,
    form: Option<FormSource>,
    config: ConfigSource,
    mode: SubmitMode,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            form: None,
            config: ConfigSource::Default,
            mode: SubmitMode::Native,
            steps: Vec::new(),
        }
    }

    /// Use a form built in code.
    pub fn form(mut self, form: Form) -> Self {
        self.form = Some(FormSource::Inline(form));
        self
    }

    /// Load the form from a JSON file under `fixtures/`.
    pub fn form_fixture(mut self, path: impl Into<String>) -> Self {
        self.form = Some(FormSource::Fixture(path.into()));
        self
    }

    /// Use a custom validation config.
    pub fn config(mut self, config: ValidationConfig) -> Self {
        self.config = ConfigSource::Inline(config);
        self
    }

    /// Load the validation config from a JSON file under `fixtures/`.
    pub fn config_fixture(mut self, path: impl Into<String>) -> Self {
        self.config = ConfigSource::Fixture(path.into());
        self
    }

    /// Set how the form submits.
    pub fn mode(mut self, mode: SubmitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Type a value, without assertions.
    pub fn input(mut self, field: &str, value: &str) -> Self {
        self.steps.push(Step {
            action: Action::Input {
                field: field.into(),
                value: value.to_string(),
            },
            assertion: None,
        });
        self
    }

    /// Leave a field and check the outcome.
    pub fn blur<F>(self, field: &str, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.step(Action::Blur { field: field.into() }, f)
    }

    /// Submit the form and check the outcome.
    pub fn submit<F>(self, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.step(Action::Submit, f)
    }

    /// Add any action with an assertion.
    pub fn step<F>(mut self, action: Action, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.steps.push(Step {
            action,
            assertion: Some(f(Assertion::new())),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn submit_mode(&self) -> SubmitMode {
        self.mode
    }

    pub(crate) fn form_source(&self) -> Option<&FormSource> {
        self.form.as_ref()
    }

    pub(crate) fn config_source(&self) -> &ConfigSource {
        &self.config
    }

    /// Resolve a fixture path relative to this crate's `fixtures/` directory.
    pub(crate) fn fixture_path(path: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(path)
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self)?.run()
    }
}
