//! User-facing alert text

use serde_json::Number;
use template_core::types::ScalarValue;

use super::ENUM_INLINE_MESSAGE_LIMIT;

/// Title for decimal columns
pub const NUMBER_ERROR_TITLE: &str = "Not a number";

/// Title for whole-number columns
pub const INTEGER_ERROR_TITLE: &str = "Not an integer";

/// Title for enumerated columns
pub const ENUM_ERROR_TITLE: &str = "Value must come from list";

/// Title for boolean columns
pub const BOOLEAN_ERROR_TITLE: &str = "Not a boolean";

/// Message for boolean columns
pub const BOOLEAN_ERROR_MESSAGE: &str = r#"The values in this column must be "TRUE" or "FALSE"."#;

/// Bound clause for range messages, with a leading space, or empty when the
/// schema supplied neither bound.
pub(super) fn bound_clause(minimum: Option<&Number>, maximum: Option<&Number>) -> String {
    match (minimum, maximum) {
        (Some(min), Some(max)) => format!(" between {min} and {max}"),
        (Some(min), None) => format!(" >= {min}"),
        (None, Some(max)) => format!(" <= {max}"),
        (None, None) => String::new(),
    }
}

/// Message for a range column; `noun` is `numbers` or `integers`
pub(super) fn range_message(
    noun: &str,
    minimum: Option<&Number>,
    maximum: Option<&Number>,
) -> String {
    format!(
        "The values in this column must be {noun}{}.",
        bound_clause(minimum, maximum)
    )
}

/// Message for an enumerated column.
///
/// Short lists are spelled out; longer ones point at the reference sheet.
pub(super) fn enum_message(values: &[ScalarValue], sheet_name: &str) -> String {
    if values.len() < ENUM_INLINE_MESSAGE_LIMIT {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" / ");
        format!("Value must be one of: {joined}.")
    } else {
        format!("Value must come from {sheet_name}.")
    }
}
