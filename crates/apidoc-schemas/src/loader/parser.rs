//! Document parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoaderResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(LoaderError::unsupported_format(path)),
        }
    }
}

/// Read and parse a document, detecting the format from the extension
pub fn parse_file(path: &Path) -> LoaderResult<Value> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoaderError::read(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), ?format, "Read document");

    parse_content(&content, format, path)
}

/// Parse document content with an explicit format
pub fn parse_content(content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
    match format {
        Format::Yaml => {
            // YAML goes through its own value type first so that YAML errors
            // are reported as such.
            let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| LoaderError::yaml(path, e))?;
            serde_json::to_value(yaml_value)
                .map_err(|e| LoaderError::json(path, e))
        }
        Format::Json => serde_json::from_str(content)
            .map_err(|e| LoaderError::json(path, e)),
    }
}
