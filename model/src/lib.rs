//! Vet Site Model Types
//!
//! This crate provides the foundational types shared by the site crates:
//! - Identity types (FieldId, FormId)
//! - Field structures (Field, FieldType)
//! - Forms as ordered field collections
//! - Per-field validity state
//! - User-facing message constants
//! - Common error types

mod error;
mod field;
mod form;
mod id;
pub mod messages;
mod validity;

pub use error::*;
pub use field::*;
pub use form::*;
pub use id::*;
pub use validity::*;
