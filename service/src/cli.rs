//! Command-line interface for template generation.
//!
//! `ts2xl SCHEMA EXCEL` reads a Table Schema and writes an Excel template
//! whose columns validate against it.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use template_core::configuration::TemplateConfig;
use template_core::error::{Result, TemplateError};
use tracing::info;

use crate::config::load_config;
use crate::generator::{TemplateGenerator, TemplateSummary};
use crate::schema::load_schema_file;

/// Extension every output workbook must carry
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Given a Frictionless Table Schema, generates an Excel template with input
/// validation
#[derive(Parser, Debug, Clone)]
#[command(name = "ts2xl", author, version, about, long_about = None)]
pub struct Cli {
    /// Table Schema file, JSON or YAML
    pub schema: PathBuf,

    /// Output workbook path ending in .xlsx, or an existing directory
    pub excel: PathBuf,

    /// Name of the data-entry sheet
    #[arg(long, value_name = "NAME")]
    pub sheet_name: Option<String>,

    /// Pin the creation timestamp so repeated runs produce identical files
    #[arg(long)]
    pub idempotent: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Configuration from `--config`, with command-line flags applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded or the
    /// combined settings are invalid.
    pub fn template_config(&self) -> Result<TemplateConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => TemplateConfig::default(),
        };

        if let Some(name) = &self.sheet_name {
            config.sheet_name.clone_from(name);
        }
        if self.idempotent {
            config.idempotent = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Work out where the workbook goes.
///
/// A directory target receives `<schema stem>.xlsx`. The final path must not
/// exist yet and must end in `.xlsx`.
///
/// # Errors
///
/// Returns `TemplateError::Usage` if the output already exists or has the
/// wrong extension.
pub fn resolve_output(schema: &Path, excel: &Path) -> Result<PathBuf> {
    let output = if excel.is_dir() {
        let stem = schema.file_stem().ok_or_else(|| {
            TemplateError::usage(format!(
                "Cannot derive an output name from {}",
                schema.display()
            ))
        })?;
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        excel.join(name)
    } else {
        excel.to_path_buf()
    };

    if output.exists() {
        return Err(TemplateError::usage(format!(
            "Output file already exists: {}",
            output.display()
        )));
    }

    if output.extension() != Some(OsStr::new(OUTPUT_EXTENSION)) {
        return Err(TemplateError::usage(format!(
            "Output file must end with .{OUTPUT_EXTENSION}: {}",
            output.display()
        )));
    }

    Ok(output)
}

/// Run one conversion.
///
/// # Errors
///
/// Usage errors for bad paths or an unreadable schema, schema errors for
/// invalid input, and any generation or I/O failure.
pub fn run(cli: &Cli) -> Result<TemplateSummary> {
    let output = resolve_output(&cli.schema, &cli.excel)?;
    let config = cli.template_config()?;

    let schema = load_schema_file(&cli.schema).map_err(|e| match e {
        TemplateError::Io(io) => TemplateError::usage(format!(
            "Cannot read schema {}: {io}",
            cli.schema.display()
        )),
        other => other,
    })?;

    let summary = TemplateGenerator::with_config(config).generate_file(&schema, &output)?;
    info!(
        sheet = %summary.sheet_name,
        rules = ?summary.rule_kinds,
        "template complete"
    );
    Ok(summary)
}

/// Usage synopsis printed ahead of user-facing errors
#[must_use]
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Print a failure the way the tool reports it and return the exit code.
#[must_use]
pub fn report_failure(err: &TemplateError) -> i32 {
    if err.is_user_facing() {
        eprintln!("{}", usage());
    }
    eprintln!("{err}");
    err.exit_code()
}

/// Parse `args`, run, and report. Returns the process exit code.
pub fn main_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    crate::logging::init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(summary) => {
            if let Some(path) = &summary.output {
                eprintln!("Created {}", path.display());
            }
            0
        }
        Err(err) => report_failure(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "ts2xl",
            "schema.json",
            "out.xlsx",
            "--sheet-name",
            "Samples",
            "--idempotent",
            "-v",
        ])
        .expect("should parse");
        assert_eq!(cli.schema, PathBuf::from("schema.json"));
        assert_eq!(cli.sheet_name.as_deref(), Some("Samples"));
        assert!(cli.idempotent && cli.verbose && !cli.quiet);

        assert!(Cli::try_parse_from(["ts2xl", "schema.json"]).is_err());
        assert!(Cli::try_parse_from(["ts2xl", "a", "b.xlsx", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["ts2xl", "s.json", "o.xlsx", "--sheet-name", "Data"])
            .expect("should parse");
        let config = cli.template_config().expect("config");
        assert_eq!(config.sheet_name, "Data");
        assert!(!config.idempotent);
    }

    #[test]
    fn test_output_rules() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = Path::new("inputs/samples.schema.json");

        assert_eq!(
            resolve_output(schema, dir.path()).expect("directory target"),
            dir.path().join("samples.schema.xlsx")
        );

        let wrong = dir.path().join("out.xls");
        assert!(matches!(
            resolve_output(schema, &wrong),
            Err(TemplateError::Usage(_))
        ));

        let existing = dir.path().join("taken.xlsx");
        std::fs::write(&existing, b"").expect("write");
        let err = resolve_output(schema, &existing).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_usage_names_the_tool() {
        assert!(usage().contains("ts2xl"));
    }
}
