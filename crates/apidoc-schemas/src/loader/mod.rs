//! Loading API descriptions from disk
//!
//! This module provides:
//! - YAML and JSON parsing with path-aware errors
//! - Extraction of operations, request bodies and responses from OpenAPI 3
//!   and Swagger 2 documents
//!
//! `$ref` resolution and `allOf` merging are expected to have been applied
//! to the document beforehand.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use apidoc_schemas::loader::ApiDescription;
//! use std::path::Path;
//!
//! let api = ApiDescription::load(Path::new("client-server.yaml"))?;
//! for operation in &api.operations {
//!     println!("{} {}", operation.method, operation.path);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod api;
pub mod error;
pub mod parser;

pub use api::{ApiDescription, Operation, Response, HTTP_METHODS};
pub use error::{LoaderError, LoaderResult};
pub use parser::{parse_content, parse_file, Format};
