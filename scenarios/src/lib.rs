//! Vet Site Scenarios
//!
//! Scenario-driven integration tests: a form fixture, a sequence of visitor
//! actions (typing, leaving a field, submitting) and assertions on what the
//! visitor would see after each action.

mod assertion;
mod error;
mod runner;
mod scenario;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use runner::Runner;
pub use scenario::{Action, Scenario, Step};

/// Convenient imports for scenario tests.
pub mod prelude {
    pub use crate::{Action, Assertion, Scenario, ScenarioError, ScenarioResult};
    pub use vet_model::messages::*;
    pub use vet_model::Validity;
    pub use vet_site::SubmitMode;
    pub use vet_validation::Rule;
}
