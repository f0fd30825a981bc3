//! Structural validation of raw Table Schema documents
//!
//! Checks the parts of the Table Schema meta-schema that template generation
//! relies on. Every violation is collected with a JSON-pointer style path
//! so one run reports everything wrong with a document.

use std::collections::HashSet;

use serde_json::{Map, Value};
use template_core::types::FieldType;
use template_core::validation::ViolationReport;

/// Validate a parsed document and return every violation found.
///
/// An empty report means the document can be deserialized into a
/// [`TableSchema`](template_core::types::TableSchema).
#[must_use]
pub fn check_structure(document: &Value) -> ViolationReport {
    let mut report = ViolationReport::new();

    let Some(root) = document.as_object() else {
        report.push("", format!("{} is not of type 'object'", describe(document)));
        return report;
    };

    let Some(fields) = root.get("fields") else {
        report.push("", "'fields' is a required property");
        return report;
    };

    let Some(fields) = fields.as_array() else {
        report.push("/fields", format!("{} is not of type 'array'", describe(fields)));
        return report;
    };

    if fields.is_empty() {
        report.push("/fields", "[] should be non-empty");
        return report;
    }

    let mut names = HashSet::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let path = format!("/fields/{index}");
        let Some(field) = field.as_object() else {
            report.push(path, format!("{} is not of type 'object'", describe(field)));
            continue;
        };

        check_field(&path, field, &mut report);

        if let Some(name) = field.get("name").and_then(Value::as_str)
            && !names.insert(name)
        {
            report.push(
                format!("{path}/name"),
                format!("field name '{name}' is not unique"),
            );
        }
    }

    report
}

fn check_field(path: &str, field: &Map<String, Value>, report: &mut ViolationReport) {
    match field.get("name") {
        None => report.push(path, "'name' is a required property"),
        Some(Value::String(name)) if name.is_empty() => {
            report.push(format!("{path}/name"), "'' should be non-empty");
        }
        Some(Value::String(_)) => {}
        Some(other) => report.push(
            format!("{path}/name"),
            format!("{} is not of type 'string'", describe(other)),
        ),
    }

    for key in ["title", "description", "format"] {
        expect_string(path, field, key, report);
    }

    let field_type = match field.get("type") {
        None => None,
        Some(Value::String(name)) => {
            let parsed = FieldType::from_name(name);
            if parsed.is_none() {
                let allowed: Vec<_> = FieldType::ALL.iter().map(|t| t.as_str()).collect();
                report.push(
                    format!("{path}/type"),
                    format!("'{name}' is not one of {allowed:?}"),
                );
            }
            parsed
        }
        Some(other) => {
            report.push(
                format!("{path}/type"),
                format!("{} is not of type 'string'", describe(other)),
            );
            None
        }
    };

    match field.get("constraints") {
        None => {}
        Some(Value::Object(constraints)) => {
            check_constraints(&format!("{path}/constraints"), constraints, field_type, report);
        }
        Some(other) => report.push(
            format!("{path}/constraints"),
            format!("{} is not of type 'object'", describe(other)),
        ),
    }
}

fn check_constraints(
    path: &str,
    constraints: &Map<String, Value>,
    field_type: Option<FieldType>,
    report: &mut ViolationReport,
) {
    for key in ["required", "unique"] {
        if let Some(value) = constraints.get(key)
            && !value.is_boolean()
        {
            report.push(
                format!("{path}/{key}"),
                format!("{} is not of type 'boolean'", describe(value)),
            );
        }
    }

    expect_string(path, constraints, "pattern", report);

    for key in ["minLength", "maxLength"] {
        if let Some(value) = constraints.get(key)
            && value.as_u64().is_none()
        {
            report.push(
                format!("{path}/{key}"),
                format!("{} is not a non-negative integer", describe(value)),
            );
        }
    }

    for key in ["minimum", "maximum"] {
        let Some(value) = constraints.get(key) else {
            continue;
        };
        let numeric = field_type.is_some_and(FieldType::is_numeric);
        if field_type == Some(FieldType::Integer) && !is_whole_number(value) {
            report.push(
                format!("{path}/{key}"),
                format!("{} is not of type 'integer'", describe(value)),
            );
        } else if numeric && !value.is_number() {
            report.push(
                format!("{path}/{key}"),
                format!("{} is not of type 'number'", describe(value)),
            );
        } else if !numeric && !(value.is_number() || value.is_string()) {
            report.push(
                format!("{path}/{key}"),
                format!("{} is not of type 'number' or 'string'", describe(value)),
            );
        }
    }

    if let Some(values) = constraints.get("enum") {
        check_enum(&format!("{path}/enum"), values, report);
    }
}

fn check_enum(path: &str, values: &Value, report: &mut ViolationReport) {
    let Some(values) = values.as_array() else {
        report.push(path, format!("{} is not of type 'array'", describe(values)));
        return;
    };

    if values.is_empty() {
        report.push(path, "[] should be non-empty");
        return;
    }

    for (index, value) in values.iter().enumerate() {
        if !(value.is_string() || value.is_number() || value.is_boolean()) {
            report.push(
                format!("{path}/{index}"),
                format!("{} is not a string, number or boolean", describe(value)),
            );
        } else if values[..index].contains(value) {
            report.push(
                format!("{path}/{index}"),
                format!("{value} is a repeated enum value"),
            );
        }
    }
}

fn expect_string(path: &str, map: &Map<String, Value>, key: &str, report: &mut ViolationReport) {
    if let Some(value) = map.get(key)
        && !value.is_string()
    {
        report.push(
            format!("{path}/{key}"),
            format!("{} is not of type 'string'", describe(value)),
        );
    }
}

/// Whole-valued floats such as `10.0` count as integers.
fn is_whole_number(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|v| v.fract() == 0.0)
}

/// Short rendering of a value for messages; containers are summarized.
fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) if !items.is_empty() => format!("array of {}", items.len()),
        Value::Object(map) if !map.is_empty() => "object".to_string(),
        other => other.to_string(),
    }
}
