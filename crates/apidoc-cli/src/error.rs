//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use apidoc_schemas::documentation::{GeneratorError, SchemaError};
use apidoc_schemas::loader::LoaderError;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The API description or schema file could not be loaded
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// A schema could not be flattened
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Rendering failed
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// No operation with the requested id
    #[error("Operation '{}' not found in {}", id, path.display())]
    OperationNotFound { id: String, path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Loader(_) => 2,
            Self::Schema(_) => 3,
            Self::Generator(_) => 4,
            Self::FileNotFound { .. } => 5,
            Self::OperationNotFound { .. } => 6,
            Self::Config(_) => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) => 14,
            Self::Other { .. } => 99,
        }
    }
}

/// Extension trait for displaying errors with context
pub trait ErrorContext<T> {
    /// Add context with a closure (only evaluated on error)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other {
                message: format!("{}: {}", f(), inner),
            }
        })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
