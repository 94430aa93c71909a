//! Scenario runner.

use std::fs;
use std::rc::Rc;

use vet_model::Form;
use vet_site::{FormController, FormEvent};
use vet_validation::{AnnotationBoard, ValidationConfig, ValidationEngine};

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Action, ConfigSource, FormSource, Scenario};

/// Runs a scenario against a form controller and a headless surface.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    form: Form,
    engine: ValidationEngine,
}

impl<'s> Runner<'s> {
    /// Load the scenario's fixtures and build its engine.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        let form = match scenario.form_source() {
            Some(FormSource::Inline(form)) => form.clone(),
            Some(FormSource::Fixture(path)) => load_form(path)?,
            None => {
                return Err(ScenarioError::MissingForm {
                    name: scenario.name().to_string(),
                })
            }
        };

        let config = match scenario.config_source() {
            ConfigSource::Default => ValidationConfig::default(),
            ConfigSource::Inline(config) => config.clone(),
            ConfigSource::Fixture(path) => load_config(path)?,
        };
        let engine = ValidationEngine::new(&config)
            .map_err(|e| ScenarioError::step_execution("setup", e.to_string()))?;

        Ok(Self {
            scenario,
            form,
            engine,
        })
    }

    /// Replay every step, stopping at the first failed assertion.
    pub fn run(self) -> ScenarioResult<()> {
        let mut controller =
            FormController::new(self.form, Rc::new(self.engine), self.scenario.submit_mode());
        let mut board = AnnotationBoard::new();

        for (i, step) in self.scenario.steps().iter().enumerate() {
            let label = format!("{}#{} ({})", self.scenario.name(), i + 1, step.action.label());
            let event = match &step.action {
                Action::Input { field, value } => FormEvent::FieldInput {
                    field: field.clone(),
                    value: value.clone(),
                },
                Action::Blur { field } => FormEvent::FieldBlurred {
                    field: field.clone(),
                },
                Action::Submit => FormEvent::Submitted,
            };

            let result = controller
                .handle(event, &mut board)
                .map_err(|e| e.to_string());

            match &step.assertion {
                Some(assertion) => {
                    assertion.verify(&label, &result, &board, |field| controller.validity(field))?
                }
                None => {
                    result.map_err(|msg| ScenarioError::step_execution(&label, msg))?;
                }
            }
        }
        Ok(())
    }
}

fn load_form(path: &str) -> ScenarioResult<Form> {
    let path = Scenario::fixture_path(path);
    let source = fs::read_to_string(&path).map_err(|e| ScenarioError::file_read(&path, e))?;
    let form: Form =
        serde_json::from_str(&source).map_err(|e| ScenarioError::fixture(&path, e.to_string()))?;
    form.checked()
        .map_err(|e| ScenarioError::fixture(&path, e.to_string()))
}

fn load_config(path: &str) -> ScenarioResult<ValidationConfig> {
    let path = Scenario::fixture_path(path);
    let source = fs::read_to_string(&path).map_err(|e| ScenarioError::file_read(&path, e))?;
    ValidationConfig::from_json(&source).map_err(|e| ScenarioError::fixture(&path, e.to_string()))
}
