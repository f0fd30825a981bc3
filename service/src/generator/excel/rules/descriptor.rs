//! Validation rule descriptors
//!
//! A descriptor is the engine's description of what to attach to one column.
//! It says nothing about how a workbook stores it; see `convert` for that.

use std::fmt;

use super::naming::quote_sheet_name;

/// Which kind of validation a descriptor carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// No restriction
    AnyValue,
    /// Decimal numbers between two bounds
    DecimalRange,
    /// Whole numbers between two bounds
    IntegerRange,
    /// Value from a fixed list
    ChoiceList,
    /// Opaque formula
    Custom,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AnyValue => "any",
            Self::DecimalRange => "decimal",
            Self::IntegerRange => "integer",
            Self::ChoiceList => "list",
            Self::Custom => "custom",
        })
    }
}

/// A column of values on a reference sheet, rows `1..=rows` of column `A`
///
/// Only obtainable by writing a [`ReferenceSheet`](super::ReferenceSheet)
/// into a workbook, so a descriptor that points at a range always points at
/// data that exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    sheet_name: String,
    rows: u32,
}

impl SheetRange {
    pub(super) fn new(sheet_name: String, rows: u32) -> Self {
        Self { sheet_name, rows }
    }

    /// Sheet holding the values
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Number of rows written
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Formula text referencing the whole range, e.g. `='status list'!$A$1:$A$3`
    #[must_use]
    pub fn to_formula(&self) -> String {
        format!("={self}")
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}!$A$1:$A${}",
            quote_sheet_name(&self.sheet_name),
            self.rows
        )
    }
}

/// Where a choice list draws its values from
#[derive(Debug, Clone, PartialEq)]
pub enum ListSource {
    /// Values stored in the rule itself
    Inline(Vec<String>),
    /// Values stored on a reference sheet
    Range(SheetRange),
}

/// The restriction part of a descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    /// Accept anything
    AnyValue,
    /// Decimal between inclusive bounds
    DecimalRange {
        /// Lower bound
        minimum: f64,
        /// Upper bound
        maximum: f64,
    },
    /// Whole number between inclusive bounds
    IntegerRange {
        /// Lower bound
        minimum: i32,
        /// Upper bound
        maximum: i32,
    },
    /// One of a fixed set of values
    ChoiceList(ListSource),
    /// Formula evaluated by the spreadsheet application
    Custom(String),
}

impl ValidationRule {
    /// Kind tag for this rule
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::AnyValue => RuleKind::AnyValue,
            Self::DecimalRange { .. } => RuleKind::DecimalRange,
            Self::IntegerRange { .. } => RuleKind::IntegerRange,
            Self::ChoiceList(_) => RuleKind::ChoiceList,
            Self::Custom(_) => RuleKind::Custom,
        }
    }
}

/// Title and message shown when a value is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlert {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub message: String,
}

impl ErrorAlert {
    /// Create an alert
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Everything needed to attach validation to one column
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDescriptor {
    /// The restriction
    pub rule: ValidationRule,
    /// Alert shown on rejection; `None` for unrestricted columns
    pub error: Option<ErrorAlert>,
}

impl RuleDescriptor {
    /// Descriptor that accepts anything and never alerts
    #[must_use]
    pub fn any_value() -> Self {
        Self {
            rule: ValidationRule::AnyValue,
            error: None,
        }
    }

    /// Descriptor with a restriction and an alert
    #[must_use]
    pub fn with_alert(rule: ValidationRule, error: ErrorAlert) -> Self {
        Self {
            rule,
            error: Some(error),
        }
    }

    /// Kind tag for the restriction
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.rule.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_range_formula_quotes_sheet() {
        let range = SheetRange::new("status list".to_string(), 3);
        assert_eq!(range.to_formula(), "='status list'!$A$1:$A$3");
    }

    #[test]
    fn test_range_formula_escapes_apostrophes() {
        let range = SheetRange::new("owner's list".to_string(), 12);
        assert_eq!(range.to_string(), "'owner''s list'!$A$1:$A$12");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(RuleDescriptor::any_value().kind(), RuleKind::AnyValue);
        assert_eq!(
            ValidationRule::Custom("=LEN(A2)>0".to_string()).kind(),
            RuleKind::Custom
        );
        assert_eq!(RuleKind::ChoiceList.to_string(), "list");
    }
}
