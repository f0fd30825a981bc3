//! Conversion of descriptors into workbook data validation

use rust_xlsxwriter::{DataValidation, DataValidationRule, Formula};
use template_core::error::{Result, TemplateError};
use tracing::warn;

use super::MAX_ERROR_MESSAGE_CHARS;
use super::descriptor::{ListSource, RuleDescriptor, ValidationRule};

/// Build the `rust_xlsxwriter` validation for a descriptor.
///
/// Range rules use the `between` criterion. Alert messages longer than the
/// workbook limit are cut to fit.
///
/// # Errors
///
/// Returns `TemplateError::Workbook` if the writer rejects the list or alert.
pub fn to_data_validation(descriptor: &RuleDescriptor) -> Result<DataValidation> {
    let validation = match &descriptor.rule {
        ValidationRule::AnyValue => DataValidation::new().allow_any_value(),
        ValidationRule::DecimalRange { minimum, maximum } => DataValidation::new()
            .allow_decimal_number(DataValidationRule::Between(*minimum, *maximum)),
        ValidationRule::IntegerRange { minimum, maximum } => DataValidation::new()
            .allow_whole_number(DataValidationRule::Between(*minimum, *maximum)),
        ValidationRule::ChoiceList(ListSource::Inline(values)) => DataValidation::new()
            .allow_list_strings(values)
            .map_err(TemplateError::workbook)?,
        ValidationRule::ChoiceList(ListSource::Range(range)) => {
            DataValidation::new().allow_list_formula(Formula::new(range.to_formula()))
        }
        ValidationRule::Custom(expression) => {
            DataValidation::new().allow_custom(Formula::new(expression))
        }
    };

    let Some(alert) = &descriptor.error else {
        return Ok(validation);
    };

    validation
        .set_error_title(&alert.title)
        .map_err(TemplateError::workbook)?
        .set_error_message(&fit_message(&alert.message))
        .map_err(TemplateError::workbook)
}

fn fit_message(message: &str) -> String {
    if message.chars().count() <= MAX_ERROR_MESSAGE_CHARS {
        return message.to_string();
    }

    warn!(
        limit = MAX_ERROR_MESSAGE_CHARS,
        "error message too long for the workbook, truncating"
    );
    let mut shortened: String = message.chars().take(MAX_ERROR_MESSAGE_CHARS - 3).collect();
    shortened.push_str("...");
    shortened
}
