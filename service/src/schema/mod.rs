//! Table Schema loading
//!
//! Documents are read as YAML, which also accepts JSON, checked against the
//! structural rules in [`structure`] and only then deserialized into a
//! [`TableSchema`].

pub mod structure;

use std::path::Path;

use serde_json::Value;
use template_core::error::{Result, TemplateError};
use template_core::types::{FieldType, TableSchema};
use tracing::debug;

pub use structure::check_structure;

/// Load and validate a schema file.
///
/// # Errors
///
/// Returns `TemplateError::Io` if the file cannot be read,
/// `TemplateError::Parse` if it is not YAML or JSON, and
/// `TemplateError::SchemaValidation` if it breaks a structural rule.
pub fn load_schema_file(path: &Path) -> Result<TableSchema> {
    let contents = std::fs::read_to_string(path)?;
    let schema = parse_schema_str(&contents)?;
    debug!(path = %path.display(), fields = schema.fields.len(), "loaded schema");
    Ok(schema)
}

/// Parse and validate schema text.
///
/// # Errors
///
/// Returns `TemplateError::Parse` if the text is not YAML or JSON and
/// `TemplateError::SchemaValidation` if it breaks a structural rule.
pub fn parse_schema_str(contents: &str) -> Result<TableSchema> {
    let document: Value = serde_yaml::from_str(contents).map_err(|e| match e.location() {
        Some(location) => TemplateError::parse_at(
            e.to_string(),
            format!("line {}, column {}", location.line(), location.column()),
        ),
        None => TemplateError::parse(e.to_string()),
    })?;
    from_value(document)
}

/// Validate an already parsed document and convert it.
///
/// Bounds on non-numeric fields (dates, times) are dropped; no validation
/// rule uses them.
///
/// # Errors
///
/// Returns `TemplateError::SchemaValidation` with every violation found.
pub fn from_value(mut document: Value) -> Result<TableSchema> {
    let report = check_structure(&document);
    if !report.is_empty() {
        return Err(TemplateError::schema_validation(report));
    }

    drop_non_numeric_bounds(&mut document);
    Ok(serde_json::from_value(document)?)
}

fn drop_non_numeric_bounds(document: &mut Value) {
    let Some(fields) = document.get_mut("fields").and_then(Value::as_array_mut) else {
        return;
    };

    for field in fields {
        let numeric = field
            .get("type")
            .and_then(Value::as_str)
            .and_then(FieldType::from_name)
            .is_some_and(FieldType::is_numeric);
        if numeric {
            continue;
        }

        let Some(constraints) = field.get_mut("constraints").and_then(Value::as_object_mut) else {
            continue;
        };
        for key in ["minimum", "maximum"] {
            if constraints.get(key).is_some_and(|v| !v.is_number()) {
                constraints.remove(key);
            }
        }
    }
}
