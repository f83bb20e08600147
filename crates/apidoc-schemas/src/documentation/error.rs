//! Error types for schema flattening and document generation
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Fatal schema authoring errors. `name` is the dotted path of the
/// offending schema, e.g. `EventFilter.items[2]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An array schema without usable `items`
    #[error("Malformed schema '{name}': array type without 'items'")]
    MalformedSchema { name: String },

    /// A value that should have been a schema mapping was not
    #[error("Invalid input at '{name}': {reason}")]
    InvalidInput { name: String, reason: String },
}

impl SchemaError {
    /// Create a malformed schema error
    pub fn malformed(name: impl Into<String>) -> Self {
        Self::MalformedSchema { name: name.into() }
    }

    /// Create an invalid input error
    pub fn invalid_input(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Path of the schema that caused the error
    pub fn name(&self) -> &str {
        match self {
            Self::MalformedSchema { name } | Self::InvalidInput { name, .. } => name,
        }
    }
}

/// Generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Failed to serialize example for '{name}': {source}")]
    Example {
        name: String,
        source: serde_json::Error,
    },
}
