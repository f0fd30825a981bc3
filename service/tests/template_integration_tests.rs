//! End-to-end tests for template generation
//!
//! Workbooks are written to a temporary directory and read back with
//! `calamine` for cell content and with `zip` for the validation XML, which
//! `calamine` does not expose.

use std::io::Read;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use pretty_assertions::assert_eq;
use template_service::TemplateError;
use template_service::generator::TemplateGenerator;
use template_service::generator::excel::rules::RuleKind;
use template_service::schema::parse_schema_str;
use tempfile::TempDir;

const SAMPLE_SCHEMA: &str = r#"{
    "fields": [
        {"name": "sample_id", "type": "string", "description": "Lab identifier"},
        {"name": "status", "description": "Processing state",
         "constraints": {"enum": ["received", "processed", "archived"]}},
        {"name": "age", "type": "integer", "description": "Donor age in years",
         "constraints": {"minimum": 0, "maximum": 100}}
    ]
}"#;

fn zip_entry(path: &Path, name: &str) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut entry = archive.by_name(name)?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[test]
fn test_sample_schema_end_to_end() -> anyhow::Result<()> {
    let schema = parse_schema_str(SAMPLE_SCHEMA)?;
    let dir = TempDir::new()?;
    let path = dir.path().join("samples.xlsx");

    let summary = TemplateGenerator::new().generate_file(&schema, &path)?;
    assert_eq!(summary.output.as_deref(), Some(path.as_path()));
    assert_eq!(
        summary.rule_kinds,
        vec![RuleKind::AnyValue, RuleKind::ChoiceList, RuleKind::IntegerRange]
    );

    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    assert_eq!(
        workbook.sheet_names(),
        vec!["Export this as TSV".to_string(), "status list".to_string()]
    );

    let main = workbook.worksheet_range("Export this as TSV")?;
    let headers: Vec<String> = (0..3).map(|col| cell_text(main.get_value((0, col)))).collect();
    assert_eq!(headers, vec!["sample_id", "status", "age"]);

    let reference = workbook.worksheet_range("status list")?;
    let values: Vec<String> = reference.rows().map(|row| cell_text(row.first())).collect();
    assert_eq!(values, vec!["received", "processed", "archived"]);

    let sheet_xml = zip_entry(&path, "xl/worksheets/sheet1.xml")?;
    assert!(sheet_xml.contains(r#"<pane ySplit="1""#), "header row is frozen");
    assert!(sheet_xml.contains(r#"type="list""#));
    assert!(sheet_xml.contains(r#"type="whole""#));
    assert!(sheet_xml.contains(r#"sqref="B2:B1048576""#));
    assert!(sheet_xml.contains(r#"sqref="C2:C1048576""#));
    assert!(sheet_xml.contains("$A$1:$A$3"));
    assert!(sheet_xml.contains("Value must be one of: received / processed / archived."));
    assert!(sheet_xml.contains("The values in this column must be integers between 0 and 100."));

    let comments = zip_entry(&path, "xl/comments1.xml")?;
    assert_eq!(comments.matches("<comment ").count(), 3);
    assert!(comments.contains("Donor age in years"));
    Ok(())
}

#[test]
fn test_numeric_enum_values_keep_cell_types() -> anyhow::Result<()> {
    let schema = parse_schema_str(
        r#"{"fields": [{"name": "grade", "type": "number",
            "constraints": {"enum": [1, 2.5, 4]}}]}"#,
    )?;
    let dir = TempDir::new()?;
    let path = dir.path().join("grades.xlsx");
    TemplateGenerator::new().generate_file(&schema, &path)?;

    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let reference = workbook.worksheet_range("grade list")?;
    let values: Vec<Option<f64>> = reference
        .rows()
        .map(|row| match row.first() {
            Some(Data::Float(f)) => Some(*f),
            Some(Data::Int(i)) => Some(*i as f64),
            _ => None,
        })
        .collect();
    assert_eq!(values, vec![Some(1.0), Some(2.5), Some(4.0)]);

    // Enumeration wins over the declared number type.
    let sheet_xml = zip_entry(&path, "xl/worksheets/sheet1.xml")?;
    assert!(sheet_xml.contains(r#"type="list""#));
    assert!(!sheet_xml.contains(r#"type="decimal""#));
    Ok(())
}

#[test]
fn test_boolean_and_decimal_columns() -> anyhow::Result<()> {
    let schema = parse_schema_str(
        "fields:
  - name: consented
    type: boolean
  - name: weight
    type: number
    constraints:
      minimum: 10
",
    )?;
    let dir = TempDir::new()?;
    let path = dir.path().join("donors.xlsx");
    let summary = TemplateGenerator::new().generate_file(&schema, &path)?;

    assert!(summary.reference_sheets.is_empty());
    let workbook: Xlsx<_> = open_workbook(&path)?;
    assert_eq!(workbook.sheet_names().len(), 1);

    let sheet_xml = zip_entry(&path, "xl/worksheets/sheet1.xml")?;
    assert!(sheet_xml.contains("TRUE,FALSE"));
    assert!(sheet_xml.contains(r#"type="decimal""#));
    assert!(sheet_xml.contains("The values in this column must be numbers"));
    assert!(sheet_xml.contains("= 10."));
    Ok(())
}

#[test]
fn test_long_enum_message_names_sheet() -> anyhow::Result<()> {
    let schema = parse_schema_str(
        r#"{"fields": [{"name": "tissue",
            "constraints": {"enum": [
                "blood", "bone", "brain", "heart", "kidney", "liver", "lung"
            ]}}]}"#,
    )?;
    let dir = TempDir::new()?;
    let path = dir.path().join("tissue.xlsx");
    TemplateGenerator::new().generate_file(&schema, &path)?;

    let sheet_xml = zip_entry(&path, "xl/worksheets/sheet1.xml")?;
    assert!(sheet_xml.contains("Value must come from tissue list."));
    assert!(sheet_xml.contains("$A$1:$A$7"));
    Ok(())
}

#[test]
fn test_idempotent_output_is_byte_identical() -> anyhow::Result<()> {
    let schema = parse_schema_str(SAMPLE_SCHEMA)?;
    let dir = TempDir::new()?;
    let first = dir.path().join("first.xlsx");
    let second = dir.path().join("second.xlsx");

    let generator = TemplateGenerator::new().with_idempotent(true);
    generator.generate_file(&schema, &first)?;
    generator.generate_file(&schema, &second)?;

    assert_eq!(std::fs::read(&first)?, std::fs::read(&second)?);
    Ok(())
}

#[test]
fn test_collision_leaves_no_file() -> anyhow::Result<()> {
    let schema = parse_schema_str(
        r#"{"fields": [
            {"name": "specimen type (first) of this sample", "constraints": {"enum": ["a"]}},
            {"name": "specimen type (second) of this sample", "constraints": {"enum": ["b"]}}
        ]}"#,
    )?;
    let dir = TempDir::new()?;
    let path = dir.path().join("collide.xlsx");

    let err = TemplateGenerator::new()
        .generate_file(&schema, &path)
        .unwrap_err();
    assert!(matches!(err, TemplateError::SheetNameCollision { .. }));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_placeholder_notes_and_custom_sheet_name() -> anyhow::Result<()> {
    let schema =
        parse_schema_str(r#"{"fields": [{"name": "a"}, {"name": "b", "description": "B"}]}"#)?;
    let mut config = template_core::configuration::TemplateConfig {
        sheet_name: "Samples".to_string(),
        note_author: Some("curator".to_string()),
        ..Default::default()
    };
    config.missing_description =
        template_core::configuration::MissingDescription::Placeholder("No description".into());

    let dir = TempDir::new()?;
    let path = dir.path().join("notes.xlsx");
    TemplateGenerator::with_config(config).generate_file(&schema, &path)?;

    let workbook: Xlsx<_> = open_workbook(&path)?;
    assert_eq!(workbook.sheet_names(), vec!["Samples".to_string()]);

    let comments = zip_entry(&path, "xl/comments1.xml")?;
    assert_eq!(comments.matches("<comment ").count(), 2);
    assert!(comments.contains("No description"));
    assert!(comments.contains("curator"));
    Ok(())
}

#[test]
fn test_features_can_be_disabled() -> anyhow::Result<()> {
    let schema = parse_schema_str(SAMPLE_SCHEMA)?;
    let dir = TempDir::new()?;
    let path = dir.path().join("plain.xlsx");

    let summary = TemplateGenerator::new()
        .with_validation(false)
        .with_header_notes(false)
        .with_frozen_header(false)
        .generate_file(&schema, &path)?;
    assert!(summary.rule_kinds.is_empty());

    let sheet_xml = zip_entry(&path, "xl/worksheets/sheet1.xml")?;
    assert!(!sheet_xml.contains("dataValidation"));
    assert!(!sheet_xml.contains("<pane"));
    assert!(zip_entry(&path, "xl/comments1.xml").is_err());
    Ok(())
}

#[test]
fn test_crate_root_exports_generator() -> anyhow::Result<()> {
    let schema = parse_schema_str(SAMPLE_SCHEMA)?;
    let generator = template_service::TemplateGenerator::new().with_header_notes(false);
    assert!(!generator.features().contains(template_service::TemplateFeatures::HEADER_NOTES));

    let dir = TempDir::new()?;
    let path = dir.path().join("root.xlsx");
    let summary: template_service::TemplateSummary = generator.generate_file(&schema, &path)?;
    assert_eq!(summary.field_count, 3);
    Ok(())
}

#[test]
fn test_illegal_sheet_character_names_field() -> anyhow::Result<()> {
    let schema = parse_schema_str(
        r#"{"fields": [{"name": "weight (kg/lb)", "constraints": {"enum": ["light", "heavy"]}}]}"#,
    )?;
    let dir = TempDir::new()?;
    let path = dir.path().join("weights.xlsx");

    let err = TemplateGenerator::new()
        .generate_file(&schema, &path)
        .unwrap_err();
    assert!(err.to_string().contains("'weight (kg/lb)'"), "{err}");
    assert!(matches!(err, TemplateError::SheetName { .. }));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_output_replaces_target_without_leftovers() -> anyhow::Result<()> {
    let schema = parse_schema_str(SAMPLE_SCHEMA)?;
    let dir = TempDir::new()?;
    let path = dir.path().join("samples.xlsx");
    std::fs::write(&path, b"not a workbook")?;

    TemplateGenerator::new().generate_file(&schema, &path)?;

    let workbook: Xlsx<_> = open_workbook(&path)?;
    assert_eq!(workbook.sheet_names().len(), 2);
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}
