//! Prelude module for template generation
//!
//! This module re-exports commonly used types and functions for convenient import.

// Re-export core types
pub use template_core::prelude::*;

// Re-export generation entry points
pub use crate::generator::excel::rules::{RuleDescriptor, RuleKind, Strategy};
pub use crate::generator::{TemplateFeatures, TemplateGenerator, TemplateSummary};

// Re-export loading helpers
pub use crate::config::load_config;
pub use crate::schema::{load_schema_file, parse_schema_str};
