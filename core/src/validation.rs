//! Structural schema violations
//!
//! A violation pairs a human-readable message with a JSON-pointer style path
//! to the offending element, e.g. `/fields/2/constraints/enum`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single structural violation found in an input schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaViolation {
    /// Pointer to the element that violated the rule; empty for the root
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl SchemaViolation {
    /// Create a new violation
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.path)
        }
    }
}

/// All violations found in one schema, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    violations: Vec<SchemaViolation>,
}

impl ViolationReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(SchemaViolation::new(path, message));
    }

    /// Whether no violations were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Violations in document order
    #[must_use]
    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }

    /// First violation, the one reported when only one line fits
    #[must_use]
    pub fn first(&self) -> Option<&SchemaViolation> {
        self.violations.first()
    }
}

impl From<Vec<SchemaViolation>> for ViolationReport {
    fn from(violations: Vec<SchemaViolation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
