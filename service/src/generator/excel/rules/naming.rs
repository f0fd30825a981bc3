//! Sheet and column naming

use template_core::configuration::MAX_SHEET_NAME_CHARS;

/// Appended to a field name to name its reference sheet
pub const REFERENCE_SHEET_SUFFIX: &str = " list";

/// Characters kept from the front of an over-long sheet name
pub const NAME_PREFIX_CHARS: usize = 14;

/// Characters kept from the back of an over-long sheet name
pub const NAME_SUFFIX_CHARS: usize = 14;

/// Marker joining the kept front and back of an over-long sheet name
pub const NAME_ELLIPSIS: &str = "...";

const COLUMN_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Name of the reference sheet holding a field's enumeration values.
///
/// Names that fit the sheet-name cap are `"{field_name} list"`. Longer ones
/// keep the first and last 14 characters around `...`, 31 in total. Distinct
/// field names can map to the same sheet name, and characters a sheet name
/// forbids are kept as they are; callers must check both.
///
/// ```
/// use template_service::generator::excel::rules::reference_sheet_name;
///
/// assert_eq!(reference_sheet_name("shorter than 31"), "shorter than 31 list");
/// assert_eq!(
///     reference_sheet_name("longer than thirty-one characters"),
///     "longer than th...haracters list"
/// );
/// ```
#[must_use]
pub fn reference_sheet_name(field_name: &str) -> String {
    let candidate = format!("{field_name}{REFERENCE_SHEET_SUFFIX}");
    let length = candidate.chars().count();
    if length <= MAX_SHEET_NAME_CHARS {
        return candidate;
    }

    let prefix: String = candidate.chars().take(NAME_PREFIX_CHARS).collect();
    let suffix: String = candidate
        .chars()
        .skip(length - NAME_SUFFIX_CHARS)
        .collect();
    format!("{prefix}{NAME_ELLIPSIS}{suffix}")
}

/// Quote a sheet name for use in a cross-sheet reference
#[must_use]
pub fn quote_sheet_name(sheet_name: &str) -> String {
    format!("'{}'", sheet_name.replace('\'', "''"))
}

/// Column letters for a zero-based column index: 0 is `A`, 26 is `AA`
#[must_use]
pub fn column_letter(column: u16) -> String {
    let mut remaining = usize::from(column) + 1;
    let mut letters = Vec::new();

    while remaining > 0 {
        let index = (remaining - 1) % 26;
        letters.push(char::from(COLUMN_LETTERS[index]));
        remaining = (remaining - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// A1-style range covering a column from the first data row to the last row
#[must_use]
pub fn column_range_below_header(column: u16, last_row: u32) -> String {
    let letters = column_letter(column);
    format!("{letters}2:{letters}{}", last_row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_names_get_suffix() {
        assert_eq!(reference_sheet_name("shorter than 31"), "shorter than 31 list");
        assert_eq!(reference_sheet_name(""), " list");
    }

    #[test]
    fn test_exactly_at_cap_is_kept() {
        let field = "x".repeat(MAX_SHEET_NAME_CHARS - REFERENCE_SHEET_SUFFIX.len());
        let name = reference_sheet_name(&field);
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_CHARS);
        assert!(!name.contains(NAME_ELLIPSIS));
    }

    #[test]
    fn test_long_names_are_shortened() {
        let name = reference_sheet_name("longer than thirty-one characters");
        assert_eq!(name, "longer than th...haracters list");
        assert_eq!(name.chars().count(), 31);
    }

    #[test]
    fn test_shortening_counts_characters_not_bytes() {
        let name = reference_sheet_name(&"é".repeat(40));
        assert_eq!(name.chars().count(), 31);
        assert!(name.starts_with(&"é".repeat(14)));
        assert!(name.ends_with("éééééééé list"));
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
        assert_eq!(column_letter(16_383), "XFD");
    }

    #[test]
    fn test_column_range() {
        assert_eq!(column_range_below_header(1, 1_048_575), "B2:B1048576");
    }
}
