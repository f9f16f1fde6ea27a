//! Configuration file support for license-please.
//!
//! Provides YAML-based configuration through `license-please.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::compliance::domain::Taxonomy;
use crate::shared::error::LicenseError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-please.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub exclude_modules: Option<Vec<String>>,
    /// Replaces the default allow-list when present
    pub allowed_licenses: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub parallel: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured allow-list as a set, if one was given
    pub fn allowed_license_set(&self) -> Option<BTreeSet<String>> {
        self.allowed_licenses
            .as_ref()
            .map(|licenses| licenses.iter().cloned().collect())
    }

    /// One warning line per field the schema does not know
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // an empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref allowed) = config.allowed_licenses {
        if allowed.is_empty() {
            return Err(invalid(
                "allowed_licenses must not be empty.\n\n\
                 💡 Hint: Remove the field to allow every known license.",
            ));
        }

        let taxonomy = Taxonomy::global();
        for (i, identifier) in allowed.iter().enumerate() {
            if !taxonomy.is_known(identifier) {
                return Err(invalid(&format!(
                    "allowed_licenses[{}] '{}' is not a known license identifier.\n\n\
                     💡 Hint: Run `license-please licenses` to list the supported identifiers.",
                    i, identifier
                )));
            }
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid("timeout_secs must be a positive number of seconds."));
    }

    if let Some(ref patterns) = config.exclude_modules {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(invalid(&format!(
                    "exclude_modules[{}] must not be empty.",
                    i
                )));
            }
        }
    }

    Ok(())
}

fn invalid(details: &str) -> anyhow::Error {
    LicenseError::InvalidConfig {
        details: details.to_string(),
    }
    .into()
}
