//! Vet Site Validation
//!
//! Decide per-field and whole-form validity and report error annotations.
//!
//! Responsibilities:
//! - Apply the required-check to mandatory fields
//! - Apply format rules (email, telephone) to non-empty values
//! - Keep at most one annotation per field on the rendering surface
//! - Report whole-form validity without stopping at the first error
//!
//! # Module Structure
//!
//! - `engine` - The ValidationEngine with the field and form passes
//! - `rule` - Rules and the pure per-field decision
//! - `annotation` - Error annotations and visual affordances
//! - `surface` - The RenderSurface seam and the headless AnnotationBoard
//! - `config` - Messages and patterns, loadable from JSON
//! - `error` - Error types for engine construction

mod annotation;
mod config;
mod engine;
mod error;
mod rule;
mod surface;

pub use annotation::{Affordance, ErrorAnnotation};
pub use config::{Messages, Patterns, ValidationConfig, EMAIL_PATTERN, TELEPHONE_PATTERN};
pub use engine::{FieldOutcome, FormReport, ValidationEngine};
pub use error::{ValidationError, ValidationResult};
pub use rule::{FieldCheck, Rule};
pub use surface::{AnnotationBoard, RenderSurface};
