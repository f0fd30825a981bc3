//! Configuration loading for template generation
//!
//! Configuration files are YAML with environment variable substitution in
//! the form `${VAR}` or `${VAR:-default}`.

use std::env;
use std::path::Path;

use regex::{Captures, Regex};
use template_core::configuration::TemplateConfig;
use template_core::error::{Result, TemplateError};
use tracing::debug;

/// Load a template configuration from a `YAML` file.
///
/// Missing keys keep their defaults and the result is validated before it is
/// returned.
///
/// # Errors
///
/// Returns `TemplateError::Io` if the file cannot be read and
/// `TemplateError::Config` if the YAML cannot be parsed or holds invalid
/// values.
pub fn load_config(path: &Path) -> Result<TemplateConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse a template configuration from `YAML` text.
///
/// # Errors
///
/// Returns `TemplateError::Config` if the YAML cannot be parsed or holds
/// invalid values.
pub fn parse_config(contents: &str) -> Result<TemplateConfig> {
    let substituted = substitute_env_vars(contents);

    // An empty document deserializes to unit, not to a mapping.
    let config = if substituted.trim().is_empty() {
        TemplateConfig::default()
    } else {
        serde_yaml::from_str(&substituted)
            .map_err(|e| TemplateError::config(format!("Failed to parse YAML config: {e}")))?
    };

    config.validate()?;
    Ok(config)
}

/// Substitute environment variables in the format ${VAR:-default}
fn substitute_env_vars(content: &str) -> String {
    substitute_with(content, |name| env::var(name).ok())
}

fn substitute_with(content: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    // The pattern is a literal; failing to compile it would be a programming error
    // that leaves the content untouched.
    let Ok(re) = Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}") else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        lookup(var_name).unwrap_or_else(|| default_value.to_string())
    })
    .to_string()
}
