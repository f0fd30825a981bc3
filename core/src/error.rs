//! Error types for template generation

use thiserror::Error;

use crate::validation::ViolationReport;

/// Main error type for template generation
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Malformed invocation: bad paths, existing output, wrong extension
    #[error("{0}")]
    Usage(String),

    /// The input failed structural schema validation
    #[error("Schema validation failed: {report}")]
    SchemaValidation {
        /// Every violation found, in document order
        report: ViolationReport,
    },

    /// The input could not be parsed as YAML or JSON
    #[error("Failed to parse schema: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Location in the input if available
        location: Option<String>,
    },

    /// A schema-supplied bound cannot be expressed as a validation bound
    #[error("Invalid bound for field '{field}': {message}")]
    Bound {
        /// Field whose bound was rejected
        field: String,
        /// Error message
        message: String,
    },

    /// A field's reference sheet name breaks workbook naming rules
    #[error("Cannot name the reference sheet for field '{field}': {message}")]
    SheetName {
        /// Field whose derived sheet name was rejected
        field: String,
        /// Rule the name breaks
        message: String,
    },

    /// Two sheets in the output would share a name
    #[error(
        "Sheet name '{sheet_name}' for field '{second_field}' collides with the sheet for '{first_field}'"
    )]
    SheetNameCollision {
        /// The colliding sheet name
        sheet_name: String,
        /// Field (or primary sheet) that claimed the name first
        first_field: String,
        /// Field whose derived name collided
        second_field: String,
    },

    /// The spreadsheet writer rejected an operation
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

impl TemplateError {
    /// Create a new usage error
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a schema validation error from a report
    #[must_use]
    pub fn schema_validation(report: ViolationReport) -> Self {
        Self::SchemaValidation { report }
    }

    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new bound error
    #[must_use]
    pub fn bound(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Bound {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new sheet name error
    #[must_use]
    pub fn sheet_name(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SheetName {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a workbook error from anything the writer reports
    #[must_use]
    pub fn workbook(err: impl std::fmt::Display) -> Self {
        Self::Workbook(err.to_string())
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error should be reported with the usage synopsis
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Usage(_) | Self::SchemaValidation { .. } | Self::Parse { .. }
        )
    }

    /// Process exit status for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_user_facing() { 2 } else { 1 }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_at(
            err.to_string(),
            format!("line {}, column {}", err.line(), err.column()),
        )
    }
}
