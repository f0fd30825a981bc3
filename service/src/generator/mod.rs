//! Template generators

pub mod excel;

pub use excel::{TemplateFeatures, TemplateGenerator, TemplateSummary};
