//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Environment variables
//! - Command-line arguments

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use apidoc_schemas::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Project config file written by `config init`
pub const PROJECT_CONFIG_FILE: &str = ".apidoc.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering settings
    pub render: GeneratorConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
            progress: true,
        }
    }
}

/// On-disk formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml" | "yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = match FileFormat::from_path(path) {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to load config");
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// User-level config file, `<config dir>/apidoc/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("apidoc").join("config.toml"))
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(PROJECT_CONFIG_FILE),
            PathBuf::from(".apidoc.yaml"),
            PathBuf::from(".apidoc.json"),
            PathBuf::from("apidoc.toml"),
        ];

        // User config directory
        if let Some(user_config) = Self::user_config_path() {
            paths.push(user_config);
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".apidoc.toml"));
            paths.push(home_dir.join(".apidoc.yaml"));
        }

        paths
    }

    /// Serialize in the format implied by `path`'s extension
    pub fn to_string_for(&self, path: &Path) -> Result<String> {
        Ok(match FileFormat::from_path(path) {
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        })
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_for(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
