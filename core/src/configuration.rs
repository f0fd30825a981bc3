//! Template configuration
//!
//! Every value has a default so an empty configuration file is valid.
//! Command-line flags override whatever a file supplies.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};

/// Default name of the data-entry sheet
pub const DEFAULT_SHEET_NAME: &str = "Export this as TSV";

/// Longest sheet name a workbook accepts
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// Characters a workbook forbids in sheet names
pub const FORBIDDEN_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// What to attach to a header cell whose field has no description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "text")]
pub enum MissingDescription {
    /// No note at all
    #[default]
    Omit,
    /// A note with fixed text
    Placeholder(String),
}

/// Settings for one template conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Name of the data-entry sheet
    pub sheet_name: String,

    /// Pin the creation timestamp so repeated runs produce identical bytes
    pub idempotent: bool,

    /// Header note policy for fields without a description
    pub missing_description: MissingDescription,

    /// Author recorded on header notes
    pub note_author: Option<String>,

    /// Keep the header row visible while scrolling
    pub freeze_header: bool,

    /// Width applied to every data column
    pub column_width: Option<f64>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            idempotent: false,
            missing_description: MissingDescription::Omit,
            note_author: None,
            freeze_header: true,
            column_width: None,
        }
    }
}

impl TemplateConfig {
    /// Check the values a workbook would reject later
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Config` if the sheet name is not a legal sheet
    /// name or the column width is not positive.
    pub fn validate(&self) -> Result<()> {
        check_sheet_name(&self.sheet_name)?;

        if let Some(width) = self.column_width
            && !(width.is_finite() && width > 0.0)
        {
            return Err(TemplateError::config(format!(
                "column_width must be a positive number, got {width}"
            )));
        }

        Ok(())
    }
}

/// Check a sheet name against workbook naming rules
///
/// # Errors
///
/// Returns `TemplateError::Config` describing the first rule broken.
pub fn check_sheet_name(name: &str) -> Result<()> {
    match sheet_name_problem(name) {
        Some(problem) => Err(TemplateError::config(problem)),
        None => Ok(()),
    }
}

/// The first workbook naming rule `name` breaks, if any
#[must_use]
pub fn sheet_name_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("sheet name must not be empty".to_string());
    }

    let length = name.chars().count();
    if length > MAX_SHEET_NAME_CHARS {
        return Some(format!(
            "sheet name '{name}' is {length} characters (max: {MAX_SHEET_NAME_CHARS})"
        ));
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_NAME_CHARS.contains(c)) {
        return Some(format!("sheet name '{name}' contains forbidden character '{c}'"));
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Some(format!("sheet name '{name}' must not start or end with an apostrophe"));
    }

    None
}
