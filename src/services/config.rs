use std::env;
use std::io;

use serde::Deserialize;
use thiserror::Error;

pub const DATA_FILE_ENV: &str = "PPV_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "ppv_data.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PpvConfig {
    pub data_file: String,
}

impl Default for PpvConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl PpvConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input)
    }

    /// Resolves the configuration: YAML file (if any), then environment,
    /// then the `--data-file` flag.
    pub fn load(config_path: Option<&str>, data_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        Ok(config
            .with_overrides(|key| env::var(key).ok())
            .with_data_file(data_file))
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_file) = lookup(DATA_FILE_ENV).filter(|value| !value.is_empty()) {
            self.data_file = data_file;
        }
        self
    }

    pub fn with_data_file(mut self, data_file: Option<&str>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file.to_string();
        }
        self
    }
}
