//! Validation rule derivation
//!
//! Turning a field into column validation happens in two phases:
//!
//! 1. [`Strategy::select`] picks a strategy from the field's shape and
//!    [`Strategy::plan`] produces a [`RulePlan`]. Both are pure.
//! 2. [`RulePlan::materialize`] writes any reference data the rule needs into
//!    the workbook and returns the final [`RuleDescriptor`].
//!
//! A descriptor can only reference a sheet range that `materialize` has
//! already written, so the reference data always exists before a rule points
//! at it.

mod convert;
mod descriptor;
mod messages;
mod naming;
mod plan;
mod selector;

pub use convert::to_data_validation;
pub use descriptor::{
    ErrorAlert, ListSource, RuleDescriptor, RuleKind, SheetRange, ValidationRule,
};
pub use messages::{
    BOOLEAN_ERROR_MESSAGE, BOOLEAN_ERROR_TITLE, ENUM_ERROR_TITLE, INTEGER_ERROR_TITLE,
    NUMBER_ERROR_TITLE,
};
pub use naming::{
    NAME_ELLIPSIS, NAME_PREFIX_CHARS, NAME_SUFFIX_CHARS, REFERENCE_SHEET_SUFFIX, column_letter,
    column_range_below_header, quote_sheet_name, reference_sheet_name,
};
pub use plan::{ReferenceSheet, RulePlan};
pub use selector::Strategy;

/// Enumerations shorter than this are spelled out in the alert message
pub const ENUM_INLINE_MESSAGE_LIMIT: usize = 6;

/// Default magnitude for decimal bounds the schema leaves open
pub const DECIMAL_DEFAULT_BOUND: f64 = 1e307;

/// Default magnitude for whole-number bounds the schema leaves open
pub const INTEGER_DEFAULT_BOUND: i32 = 2_147_483_647;

/// Longest alert message a workbook accepts
pub const MAX_ERROR_MESSAGE_CHARS: usize = 255;

/// Values offered for boolean columns
pub const BOOLEAN_CHOICES: [&str; 2] = ["TRUE", "FALSE"];
