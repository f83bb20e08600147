//! Schema documentation generation
//!
//! This module turns the JSON Schemas of API request and response bodies
//! into HTML reference documentation:
//! - [`flatten`] lists every object that needs its own table, assigning
//!   stable anchors so tables can link to each other
//! - [`formatter`] produces the short type label shown in a table's type column
//! - [`description`] renders a property's description cell
//! - [`generator`] assembles per-operation sections from a loaded API
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod anchor;
pub mod description;
pub mod error;
pub mod examples;
pub mod flatten;
pub mod formatter;
pub mod generator;
pub mod schema;
pub mod tables;

pub use anchor::{anchor_for, operation_prefix, slugify, SlugStyle};
pub use description::{render_description, MarkupRenderer, PlainMarkup, VersionNote};
pub use error::{GeneratorError, GeneratorResult, SchemaError, SchemaResult};
pub use flatten::{clean, flatten, flatten_value, Flattened, ObjectDescriptor, SchemaFlattener};
pub use formatter::{format_type, format_type_html};
pub use generator::{DocGenerator, GeneratorConfig};
pub use schema::{is_required, Required, SchemaKind, SchemaNode, SchemaType};
pub use tables::{ResponseRow, Table};

/// Create a documentation generator with default configuration
pub fn create_doc_generator() -> DocGenerator {
    DocGenerator::new()
}

/// Generate the object tables for a single schema, anchored under `anchor_prefix`
pub fn generate_docs(schema: &serde_json::Value, anchor_prefix: &str) -> GeneratorResult<String> {
    let name = schema
        .get("title")
        .and_then(serde_json::Value::as_str)
        .unwrap_or(flatten::UNNAMED_SCHEMA);
    create_doc_generator().render_body(schema, anchor_prefix, name, None)
}
