//! Excel template generator for Table Schema documents.
//!
//! Writes one data-entry sheet with a header per field and attaches the
//! validation derived by [`rules`] to the column beneath each header.
//! Enumerations get their own reference sheets after the data-entry sheet.

mod cast;
mod features;
mod generator;
pub mod rules;
mod workbook;

pub use cast::LAST_ROW;
pub use features::TemplateFeatures;
pub use generator::TemplateGenerator;
pub use workbook::TemplateSummary;
