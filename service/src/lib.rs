//! # Table Schema Template
//!
//! Converts a Frictionless Table Schema into an Excel template whose columns
//! carry data-entry validation matching the schema.
//!
//! ## Overview
//!
//! - **Schema loading**: JSON or YAML input, checked against the structural
//!   rules of the Table Schema meta-schema before use
//! - **Rule derivation**: each field maps to one column rule; enumerations,
//!   numbers, integers and booleans get real validation, everything else
//!   accepts any value
//! - **Reference sheets**: enumeration values live on their own sheet and
//!   the column rule points at that range
//! - **Reproducible output**: an idempotent mode pins document metadata so
//!   repeated runs produce identical files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use template_service::generator::TemplateGenerator;
//! use template_service::schema::load_schema_file;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let schema = load_schema_file(Path::new("samples.json"))?;
//!     let summary = TemplateGenerator::new()
//!         .with_idempotent(true)
//!         .generate_file(&schema, Path::new("samples.xlsx"))?;
//!
//!     println!("{} columns, {} reference sheets",
//!         summary.field_count, summary.reference_sheets.len());
//!     Ok(())
//! }
//! ```
//!
//! The `ts2xl` binary wraps the same steps; see [`cli`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Template generation
pub mod generator;

/// Schema loading and structural validation
pub mod schema;

/// Configuration loading
pub mod config;

/// Logging setup
pub mod logging;

/// Command-line interface
pub mod cli;

/// Commonly used types
pub mod prelude;

pub use generator::{TemplateFeatures, TemplateGenerator, TemplateSummary};
pub use template_core::{Result, TemplateError};
