use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, FormatAlign, Note, Workbook};
use template_core::configuration::MissingDescription;
use template_core::error::{Result, TemplateError};
use template_core::types::{FieldDescriptor, TableSchema};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::cast::{self, LAST_ROW};
use super::generator::TemplateGenerator;
use super::rules::{RuleKind, RulePlan, Strategy, column_range_below_header, to_data_validation};

/// Label used in collision errors for the data-entry sheet
const PRIMARY_SHEET_OWNER: &str = "(primary sheet)";

/// What a finished conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    /// Where the workbook was written, when it was written to disk
    pub output: Option<PathBuf>,
    /// Name of the data-entry sheet
    pub sheet_name: String,
    /// Number of header columns
    pub field_count: usize,
    /// Reference sheets in the order they were added
    pub reference_sheets: Vec<String>,
    /// Rule kind per column, empty when validation is disabled
    pub rule_kinds: Vec<RuleKind>,
}

impl TemplateGenerator {
    /// Generate the template and save it to disk.
    ///
    /// The workbook is assembled in memory, written to a temporary file next
    /// to `path` and then renamed over it, so a failed conversion or write
    /// never leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a field bound cannot
    /// be used, two sheets would share a name, the writer rejects the
    /// workbook, or the file cannot be written.
    pub fn generate_file(&self, schema: &TableSchema, path: &Path) -> Result<TemplateSummary> {
        let (mut workbook, mut summary) = self.build_workbook(schema)?;
        let content = workbook.save_to_buffer().map_err(TemplateError::workbook)?;
        write_replacing(path, &content)?;

        info!(
            path = %path.display(),
            fields = summary.field_count,
            reference_sheets = summary.reference_sheets.len(),
            "wrote template"
        );
        summary.output = Some(path.to_path_buf());
        Ok(summary)
    }

    /// Generate the template as a byte buffer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TemplateGenerator::generate_file`], minus file I/O.
    pub fn generate_buffer(&self, schema: &TableSchema) -> Result<Vec<u8>> {
        let (mut workbook, _) = self.build_workbook(schema)?;
        workbook.save_to_buffer().map_err(TemplateError::workbook)
    }

    fn build_workbook(&self, schema: &TableSchema) -> Result<(Workbook, TemplateSummary)> {
        self.config.validate()?;

        // Everything that can fail on schema content fails here, before any
        // sheet exists.
        let plans = if self.add_validation() {
            let plans = schema
                .fields
                .iter()
                .map(|field| Strategy::select(field).plan(field))
                .collect::<Result<Vec<_>>>()?;
            check_sheet_names(&self.config.sheet_name, &schema.fields, &plans)?;
            Some(plans)
        } else {
            None
        };

        let mut workbook = Workbook::new();
        if self.config.idempotent {
            let created = ExcelDateTime::from_ymd(2000, 1, 1).map_err(TemplateError::workbook)?;
            let properties = DocProperties::new().set_creation_datetime(&created);
            workbook.set_properties(&properties);
        }

        workbook
            .add_worksheet()
            .set_name(&self.config.sheet_name)
            .map_err(TemplateError::workbook)?;
        self.write_headers(&mut workbook, &schema.fields)?;

        let mut summary = TemplateSummary {
            output: None,
            sheet_name: self.config.sheet_name.clone(),
            field_count: schema.fields.len(),
            reference_sheets: Vec::new(),
            rule_kinds: Vec::new(),
        };

        for (index, plan) in plans.into_iter().flatten().enumerate() {
            let col = cast::usize_to_u16_column(index)?;
            if let Some(reference) = plan.reference() {
                summary.reference_sheets.push(reference.name().to_string());
            }

            // The reference sheet is written before the rule naming it.
            let descriptor = plan.materialize(&mut workbook)?;
            let validation = to_data_validation(&descriptor)?;
            workbook
                .worksheet_from_index(0)
                .map_err(TemplateError::workbook)?
                .add_data_validation(1, col, LAST_ROW, col, &validation)
                .map_err(TemplateError::workbook)?;

            debug!(
                range = %column_range_below_header(col, LAST_ROW),
                kind = %descriptor.kind(),
                "applied column rule"
            );
            summary.rule_kinds.push(descriptor.kind());
        }

        if self.freeze_header() {
            workbook
                .worksheet_from_index(0)
                .map_err(TemplateError::workbook)?
                .set_freeze_panes(1, 0)
                .map_err(TemplateError::workbook)?;
        }

        Ok((workbook, summary))
    }

    fn write_headers(&self, workbook: &mut Workbook, fields: &[FieldDescriptor]) -> Result<()> {
        let header_format = Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Center);

        let worksheet = workbook
            .worksheet_from_index(0)
            .map_err(TemplateError::workbook)?;

        for (index, field) in fields.iter().enumerate() {
            let col = cast::usize_to_u16_column(index)?;
            worksheet
                .write_string_with_format(0, col, &field.name, &header_format)
                .map_err(TemplateError::workbook)?;

            if self.header_notes()
                && let Some(text) = self.note_text(field)
            {
                let mut note = Note::new(text);
                if let Some(author) = &self.config.note_author {
                    note = note.set_author(author);
                }
                worksheet
                    .insert_note(0, col, &note)
                    .map_err(TemplateError::workbook)?;
            }

            if let Some(width) = self.config.column_width {
                worksheet
                    .set_column_width(col, width)
                    .map_err(TemplateError::workbook)?;
            }
        }

        Ok(())
    }

    fn note_text<'a>(&'a self, field: &'a FieldDescriptor) -> Option<&'a str> {
        match (&field.description, &self.config.missing_description) {
            (Some(description), _) => Some(description.as_str()),
            (None, MissingDescription::Placeholder(text)) => Some(text.as_str()),
            (None, MissingDescription::Omit) => None,
        }
    }
}

/// Write `content` to `path` through a sibling temporary file.
///
/// The temporary file is removed if anything fails before the rename.
fn write_replacing(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| TemplateError::Io(err.error))?;
    Ok(())
}

/// Reject reference sheets whose names clash with each other or with the
/// primary sheet. Sheet names compare without regard to case.
fn check_sheet_names(
    primary: &str,
    fields: &[FieldDescriptor],
    plans: &[RulePlan],
) -> Result<()> {
    let mut claimed: HashMap<String, &str> = HashMap::new();
    claimed.insert(primary.to_lowercase(), PRIMARY_SHEET_OWNER);

    for (field, plan) in fields.iter().zip(plans) {
        let Some(reference) = plan.reference() else {
            continue;
        };
        if let Some(owner) = claimed.insert(reference.name().to_lowercase(), &field.name) {
            return Err(TemplateError::SheetNameCollision {
                sheet_name: reference.name().to_string(),
                first_field: owner.to_string(),
                second_field: field.name.clone(),
            });
        }
    }

    Ok(())
}
