//! Strategy selection and planning

use template_core::configuration::sheet_name_problem;
use template_core::error::{Result, TemplateError};
use template_core::types::{FieldDescriptor, FieldType};
use tracing::debug;

use super::descriptor::{ErrorAlert, ListSource, RuleDescriptor, ValidationRule};
use super::messages::{
    BOOLEAN_ERROR_MESSAGE, BOOLEAN_ERROR_TITLE, ENUM_ERROR_TITLE, INTEGER_ERROR_TITLE,
    NUMBER_ERROR_TITLE, enum_message, range_message,
};
use super::naming::reference_sheet_name;
use super::plan::{ReferenceSheet, RulePlan};
use super::{BOOLEAN_CHOICES, DECIMAL_DEFAULT_BOUND, INTEGER_DEFAULT_BOUND};
use crate::generator::excel::cast;

/// How a field's column is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// No restriction
    AnyValue,
    /// Decimal numbers within bounds
    DecimalRange,
    /// Whole numbers within bounds
    IntegerRange,
    /// Values from the field's enumeration, stored on a reference sheet
    ChoiceList,
    /// `TRUE` or `FALSE`
    BooleanChoice,
}

impl Strategy {
    /// Pick the strategy for a field. First match wins:
    ///
    /// 1. an `enum` constraint, whatever the type
    /// 2. `number`
    /// 3. `integer`
    /// 4. `boolean`
    /// 5. anything else accepts any value
    #[must_use]
    pub fn select(field: &FieldDescriptor) -> Self {
        if field.enum_values().is_some_and(|values| !values.is_empty()) {
            return Self::ChoiceList;
        }

        match field.field_type {
            Some(FieldType::Number) => Self::DecimalRange,
            Some(FieldType::Integer) => Self::IntegerRange,
            Some(FieldType::Boolean) => Self::BooleanChoice,
            _ => Self::AnyValue,
        }
    }

    /// Plan the rule for `field` without touching any workbook.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Bound` if a schema-supplied bound cannot be
    /// used for this strategy, e.g. a fractional bound on an integer column.
    /// Returns `TemplateError::SheetName` if the field's reference sheet
    /// name is not a legal sheet name.
    pub fn plan(self, field: &FieldDescriptor) -> Result<RulePlan> {
        let plan = match self {
            Self::AnyValue => RulePlan::Ready(RuleDescriptor::any_value()),
            Self::DecimalRange => RulePlan::Ready(decimal_rule(field)?),
            Self::IntegerRange => RulePlan::Ready(integer_rule(field)?),
            Self::ChoiceList => choice_plan(field)?,
            Self::BooleanChoice => RulePlan::Ready(RuleDescriptor::with_alert(
                ValidationRule::ChoiceList(ListSource::Inline(
                    BOOLEAN_CHOICES.iter().map(ToString::to_string).collect(),
                )),
                ErrorAlert::new(BOOLEAN_ERROR_TITLE, BOOLEAN_ERROR_MESSAGE),
            )),
        };

        debug!(field = %field.name, strategy = ?self, "planned column rule");
        Ok(plan)
    }
}

fn decimal_rule(field: &FieldDescriptor) -> Result<RuleDescriptor> {
    let bound = |number: &serde_json::Number| {
        number.as_f64().ok_or_else(|| {
            TemplateError::bound(&field.name, format!("{number} is not a finite number"))
        })
    };

    let minimum = field.minimum().map(bound).transpose()?;
    let maximum = field.maximum().map(bound).transpose()?;

    Ok(RuleDescriptor::with_alert(
        ValidationRule::DecimalRange {
            minimum: minimum.unwrap_or(-DECIMAL_DEFAULT_BOUND),
            maximum: maximum.unwrap_or(DECIMAL_DEFAULT_BOUND),
        },
        ErrorAlert::new(
            NUMBER_ERROR_TITLE,
            range_message("numbers", field.minimum(), field.maximum()),
        ),
    ))
}

fn integer_rule(field: &FieldDescriptor) -> Result<RuleDescriptor> {
    let minimum = field
        .minimum()
        .map(|n| cast::number_to_i32_bound(&field.name, n))
        .transpose()?;
    let maximum = field
        .maximum()
        .map(|n| cast::number_to_i32_bound(&field.name, n))
        .transpose()?;

    Ok(RuleDescriptor::with_alert(
        ValidationRule::IntegerRange {
            minimum: minimum.unwrap_or(-INTEGER_DEFAULT_BOUND),
            maximum: maximum.unwrap_or(INTEGER_DEFAULT_BOUND),
        },
        ErrorAlert::new(
            INTEGER_ERROR_TITLE,
            range_message("integers", field.minimum(), field.maximum()),
        ),
    ))
}

fn choice_plan(field: &FieldDescriptor) -> Result<RulePlan> {
    let sheet_name = reference_sheet_name(&field.name);
    if let Some(problem) = sheet_name_problem(&sheet_name) {
        return Err(TemplateError::sheet_name(&field.name, problem));
    }

    let reference = ReferenceSheet::new(sheet_name, field.enum_values().unwrap_or_default());
    let message = enum_message(reference.values(), reference.name());

    Ok(RulePlan::Deferred {
        reference,
        error: ErrorAlert::new(ENUM_ERROR_TITLE, message),
    })
}
