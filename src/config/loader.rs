// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule file discovery and loading.

use crate::error::{ConfigError, GuardError, Result};
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::schema::{RuleConfiguration, RuleDocument};

/// Rule file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commit-rules.toml",
    ".commit-rules.toml",
    ".github/commit-rules.toml",
    ".github/commit-rules.json",
];

/// Serialization format of a rule document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Find the rule file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the rule file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = first_existing(&home) {
            return Some(found);
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("commit-guard").join("rules.toml"))
        .filter(|path| path.exists())
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load rules from the default locations, falling back to built-in defaults.
pub fn load_config() -> Result<RuleConfiguration> {
    resolve(find_config_file())
}

/// Like [`load_config`], but discovery starts at `start_dir`.
pub fn discover_config(start_dir: &Path) -> Result<RuleConfiguration> {
    resolve(find_config_file_from(start_dir))
}

fn resolve(found: Option<PathBuf>) -> Result<RuleConfiguration> {
    match found {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No rule file found, using built-in rules");
            Ok(default_config())
        }
    }
}

/// Load rules from a specific path.
pub fn load_config_from(path: &Path) -> Result<RuleConfiguration> {
    tracing::debug!("Loading rules from: {:?}", path);

    if !path.exists() {
        return Err(GuardError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GuardError::Config(ConfigError::ParseError {
            message: format!("Failed to read rule file: {}", e),
        })
    })?;

    let config = parse_config(&content, ConfigFormat::from_path(path))?;
    tracing::debug!(
        "Loaded {} commit types from {:?}",
        config.allowed_types.len(),
        path
    );
    Ok(config)
}

/// Parse and validate a rule document.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<RuleConfiguration> {
    let document: RuleDocument = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            GuardError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        })?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            GuardError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        })?,
    };

    RuleConfiguration::from_document(document)
}
