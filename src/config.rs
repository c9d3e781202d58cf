//! Project information handling.
//! This module loads the project information file that drives the rename
//! and gives typed, lazily-checked access to its keys.

use crate::constants::CONFIG_FILE;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A single value of the project information file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Other(serde_json::Value),
}

impl ConfigValue {
    /// Renders scalar values as text, `None` for null and nested values.
    pub fn as_text(&self) -> Option<String> {
        match self {
            ConfigValue::Text(s) => Some(s.clone()),
            ConfigValue::Number(n) => Some(n.to_string()),
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::Other(_) => None,
        }
    }
}

/// Parsed project information.
///
/// Keys are only checked when they are first asked for, so a missing
/// `version` surfaces in the manifest step, not at load time.
#[derive(Debug, Clone, Default)]
pub struct ProjectInfo {
    values: IndexMap<String, ConfigValue>,
}

impl ProjectInfo {
    pub fn new(values: IndexMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    /// Looks up a required key.
    ///
    /// # Errors
    /// * `Error::MissingKeyError` if the key is absent
    /// * `Error::ConfigError` if the value is null or not a scalar
    pub fn get(&self, key: &str) -> Result<String> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| Error::MissingKeyError { key: key.to_string() })?;
        value.as_text().ok_or_else(|| {
            Error::ConfigError(format!("value of '{}' must be a string", key))
        })
    }

    pub fn project_name(&self) -> Result<String> {
        self.get("project_name")
    }

    pub fn version(&self) -> Result<String> {
        self.get("version")
    }

    pub fn description(&self) -> Result<String> {
        self.get("description")
    }

    pub fn author(&self) -> Result<String> {
        self.get("author")
    }

    pub fn email(&self) -> Result<String> {
        self.get("email")
    }
}

/// Default location of the project information file: next to the executable.
pub fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::IoError)?;
    let dir = exe.parent().ok_or_else(|| {
        Error::ConfigError(format!("cannot locate directory of {}", exe.display()))
    })?;
    Ok(dir.join(CONFIG_FILE))
}

/// Reads the project information file.
///
/// # Errors
/// * `Error::ConfigError` if the path is not an existing file or cannot be read
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<String> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "project information file not found: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("cannot read {}: {}", config_path.display(), e))
    })
}

/// Parses project information content.
/// JSON is tried first, then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither, or is not a mapping
pub fn parse_config(content: &str) -> Result<ProjectInfo> {
    let values: IndexMap<String, ConfigValue> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content).map_err(|e| {
            Error::ConfigError(format!("Invalid configuration format: {}", e))
        })?,
    };

    debug!("Loaded configuration keys: {:?}", values.keys().collect::<Vec<_>>());
    Ok(ProjectInfo::new(values))
}

/// Loads and parses the project information file in one step.
pub fn get_config<P: AsRef<Path>>(config_path: P) -> Result<ProjectInfo> {
    let content = load_config(config_path)?;
    parse_config(&content)
}
