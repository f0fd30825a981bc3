use serde_json::Number;
use template_core::error::{Result, TemplateError};

/// Largest zero-based row index a worksheet has (row 1,048,576).
pub const LAST_ROW: u32 = 1_048_575;

/// Safely cast usize to u16 for Excel column indices.
/// Excel has a maximum of 16,384 columns (2^14).
pub(crate) fn usize_to_u16_column(value: usize) -> Result<u16> {
    const MAX_EXCEL_COLUMNS: usize = 16_384;

    if value >= MAX_EXCEL_COLUMNS {
        return Err(TemplateError::workbook(format!(
            "Too many columns for Excel: {value} (max: {MAX_EXCEL_COLUMNS})"
        )));
    }

    u16::try_from(value)
        .map_err(|_| TemplateError::workbook(format!("Column index {value} cannot fit in u16")))
}

/// Safely cast usize to u32 for row indices and row counts.
pub(crate) fn usize_to_u32_row(value: usize) -> Result<u32> {
    match u32::try_from(value) {
        Ok(row) if row <= LAST_ROW + 1 => Ok(row),
        _ => Err(TemplateError::workbook(format!(
            "Too many rows for Excel: {value} (max: {})",
            LAST_ROW + 1
        ))),
    }
}

/// Convert a schema bound to a whole-number validation bound.
///
/// Whole-valued floats such as `10.0` are accepted.
pub(crate) fn number_to_i32_bound(field: &str, number: &Number) -> Result<i32> {
    let whole = if let Some(value) = number.as_i64() {
        value
    } else {
        let value = number
            .as_f64()
            .filter(|v| v.fract() == 0.0)
            .ok_or_else(|| TemplateError::bound(field, format!("{number} is not a whole number")))?;
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(out_of_range(field, number));
        }
        #[allow(clippy::cast_possible_truncation)]
        let value = value as i64;
        value
    };

    i32::try_from(whole).map_err(|_| out_of_range(field, number))
}

fn out_of_range(field: &str, number: &Number) -> TemplateError {
    TemplateError::bound(
        field,
        format!("{number} is outside the 32-bit range Excel validation supports"),
    )
}
