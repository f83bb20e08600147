//! Apidoc Schemas - HTML reference documentation from API schemas
//!
//! This crate renders the request and response bodies of OpenAPI / Swagger
//! operations as linked HTML tables:
//! - **Loader**: reads YAML or JSON API descriptions and extracts operations
//! - **Flattener**: walks a body schema and lists every object that gets
//!   its own table, with deterministic anchors
//! - **Formatter**: short type labels such as `[Event]` or `{string: integer}`
//! - **Generator**: per-operation HTML sections with examples
//!
//! ## Quick Start
//!
//! ```rust
//! use apidoc_schemas::documentation::{flatten_value, format_type};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "title": "Event",
//!     "properties": {
//!         "content": {
//!             "type": "object",
//!             "title": "EventContent",
//!             "properties": {"body": {"type": "string"}}
//!         }
//!     }
//! });
//!
//! let flattened = flatten_value(&schema, Some("ev"), None).unwrap();
//! assert_eq!(flattened.objects.len(), 2);
//! assert_eq!(flattened.objects[1].anchor.as_deref(), Some("ev_eventcontent"));
//! assert_eq!(format_type(&flattened.schema), "Event");
//! ```
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod loader;

// Re-export commonly used types for convenience
pub use documentation::{
    flatten, flatten_value, format_type, format_type_html, render_description, DocGenerator,
    Flattened, GeneratorConfig, GeneratorError, GeneratorResult, SchemaError, SchemaFlattener,
    SchemaNode, SchemaResult, SlugStyle,
};
pub use loader::{ApiDescription, LoaderError, LoaderResult, Operation};
