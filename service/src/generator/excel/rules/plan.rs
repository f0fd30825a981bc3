//! Planned rules and the reference data they depend on

use std::collections::HashSet;

use rust_xlsxwriter::Workbook;
use template_core::error::{Result, TemplateError};
use template_core::types::ScalarValue;
use tracing::debug;

use super::descriptor::{ErrorAlert, ListSource, RuleDescriptor, SheetRange, ValidationRule};
use crate::generator::excel::cast;

/// Enumeration values destined for their own sheet, one per row of column `A`
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSheet {
    name: String,
    values: Vec<ScalarValue>,
}

impl ReferenceSheet {
    /// Create a reference sheet; repeated values keep their first position
    #[must_use]
    pub fn new(name: String, values: &[ScalarValue]) -> Self {
        let mut seen = HashSet::with_capacity(values.len());
        let values = values
            .iter()
            .filter(|value| seen.insert(dedup_key(value)))
            .cloned()
            .collect();
        Self { name, values }
    }

    /// Sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in row order
    #[must_use]
    pub fn values(&self) -> &[ScalarValue] {
        &self.values
    }

    /// Add the sheet to `workbook` and return the range covering its values.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Workbook` if the writer rejects the sheet name
    /// or a cell.
    pub fn write_into(self, workbook: &mut Workbook) -> Result<SheetRange> {
        let worksheet = workbook
            .add_worksheet()
            .set_name(&self.name)
            .map_err(TemplateError::workbook)?;

        for (index, value) in self.values.iter().enumerate() {
            let row = cast::usize_to_u32_row(index)?;
            match value {
                ScalarValue::Text(text) => worksheet.write_string(row, 0, text),
                ScalarValue::Boolean(flag) => worksheet.write_boolean(row, 0, *flag),
                ScalarValue::Number(number) => {
                    let number = number.as_f64().ok_or_else(|| {
                        TemplateError::workbook(format!(
                            "enumeration value {number} in '{}' is not a finite number",
                            self.name
                        ))
                    })?;
                    worksheet.write_number(row, 0, number)
                }
            }
            .map_err(TemplateError::workbook)?;
        }

        let rows = cast::usize_to_u32_row(self.values.len())?;
        debug!(sheet = %self.name, rows, "wrote reference sheet");
        Ok(SheetRange::new(self.name, rows))
    }
}

fn dedup_key(value: &ScalarValue) -> (u8, String) {
    match value {
        ScalarValue::Boolean(flag) => (0, flag.to_string()),
        ScalarValue::Number(number) => (1, number.to_string()),
        ScalarValue::Text(text) => (2, text.clone()),
    }
}

/// A rule that may still need reference data written before it is usable
#[derive(Debug, Clone, PartialEq)]
pub enum RulePlan {
    /// Nothing to write; the descriptor is final
    Ready(RuleDescriptor),
    /// A choice list backed by a sheet that does not exist yet
    Deferred {
        /// Values to write
        reference: ReferenceSheet,
        /// Alert for the finished rule
        error: ErrorAlert,
    },
}

impl RulePlan {
    /// Reference sheet this plan will create, if any
    #[must_use]
    pub fn reference(&self) -> Option<&ReferenceSheet> {
        match self {
            Self::Ready(_) => None,
            Self::Deferred { reference, .. } => Some(reference),
        }
    }

    /// Write any reference data into `workbook` and return the final descriptor.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Workbook` if writing the reference sheet fails.
    pub fn materialize(self, workbook: &mut Workbook) -> Result<RuleDescriptor> {
        match self {
            Self::Ready(descriptor) => Ok(descriptor),
            Self::Deferred { reference, error } => {
                let range = reference.write_into(workbook)?;
                Ok(RuleDescriptor::with_alert(
                    ValidationRule::ChoiceList(ListSource::Range(range)),
                    error,
                ))
            }
        }
    }
}
