//! File locations shared by the CLI and embedding applications

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where datasets, queries and matcher outputs live
///
/// Every key is optional in the YAML file. Unset derived paths follow the
/// directories: `state_file` and `result_file` sit in `output_dir`,
/// `query_file` in `data_dir`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub result_file: Option<PathBuf>,
    pub query_file: Option<PathBuf>,
}

impl Config {
    /// Parse YAML configuration text
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a YAML config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// `--config` if given, else the default file if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `~/.config/graphex/config.yaml` (platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("graphex").join("config.yaml"))
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("Outputs"))
    }

    /// Reuse flag file
    pub fn state_file(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| self.output_dir().join("rerun_state.txt"))
    }

    /// Matcher result file
    pub fn result_file(&self) -> PathBuf {
        self.result_file
            .clone()
            .unwrap_or_else(|| self.output_dir().join("result.txt"))
    }

    /// Canonical query written for the matcher
    pub fn query_file(&self) -> PathBuf {
        self.query_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join("query.txt"))
    }
}
