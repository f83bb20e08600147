//! Error types for loading API descriptions
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type LoaderResult<T> = Result<T, LoaderError>;

/// Why an API description or schema file could not be used.
///
/// Every variant carries the file it concerns.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not valid YAML: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("'{path}' is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' has no .json, .yaml or .yml extension")]
    UnsupportedFormat { path: PathBuf },

    /// Parsed, but not shaped like an API description
    #[error("Invalid API description '{path}' at '{location}': {reason}")]
    InvalidDocument {
        path: PathBuf,
        location: String,
        reason: String,
    },
}

impl LoaderError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn yaml(path: &Path, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }

    /// `location` names the offending key, e.g. `paths./rooms.get`
    pub fn invalid_document(
        path: &Path,
        location: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDocument {
            path: path.to_path_buf(),
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// The file this error is about
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Yaml { path, .. }
            | Self::Json { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::InvalidDocument { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_file() {
        let err = LoaderError::read(
            Path::new("api.yaml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        );
        assert!(matches!(err, LoaderError::Read { .. }));
        assert_eq!(err.path(), Path::new("api.yaml"));
        assert_eq!(err.to_string(), "Cannot read 'api.yaml': File not found");
    }

    #[test]
    fn test_invalid_document_location() {
        let err = LoaderError::invalid_document(Path::new("api.yaml"), "paths", "expected a mapping");
        assert!(err.to_string().ends_with("at 'paths': expected a mapping"));
    }

    #[test]
    fn test_yaml_error_keeps_path() {
        let err = LoaderError::yaml(
            Path::new("broken.yaml"),
            serde_yaml::from_str::<serde_yaml::Value>("{").unwrap_err(),
        );
        assert_eq!(err.path(), Path::new("broken.yaml"));
        assert!(err.to_string().starts_with("'broken.yaml' is not valid YAML"));
    }
}
