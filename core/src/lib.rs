//! # Table Schema Template Core
//!
//! Core types for turning a Frictionless Table Schema into a spreadsheet
//! template with data-entry validation.
//!
//! This crate holds the data model the rest of the workspace agrees on:
//! field descriptors and their constraints, the error taxonomy, template
//! configuration and the messages produced by structural schema validation.
//! It has no knowledge of any spreadsheet library.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types shared by every stage of a conversion
pub mod error;

/// Field descriptors, constraints and table schemas
pub mod types;

/// Template configuration
pub mod configuration;

/// Structural schema violations
pub mod validation;

pub use configuration::{MissingDescription, TemplateConfig};
pub use error::{Result, TemplateError};
pub use types::{Constraints, FieldDescriptor, FieldType, ScalarValue, TableSchema};
pub use validation::{SchemaViolation, ViolationReport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::configuration::*;
    pub use crate::error::{Result, TemplateError};
    pub use crate::types::*;
    pub use crate::validation::*;
}
