//! Operations extracted from an OpenAPI or Swagger document
//!
//! Only the parts the renderer needs are pulled out: per operation the
//! request body schema and, per status code, the response schema and
//! example. Schemas stay as raw JSON here and are typed by the generator,
//! so shape errors are reported with the schema's path.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::parser::parse_file;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Path item keys that are operations
pub const HTTP_METHODS: [&str; 8] =
    ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// A loaded API description
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescription {
    pub title: Option<String>,
    pub operations: Vec<Operation>,
}

/// One HTTP operation
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Lowercase HTTP method
    pub method: String,
    pub path: String,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub request_body: Option<Value>,
    pub request_example: Option<Value>,
    pub responses: Vec<Response>,
}

/// One documented status code
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: String,
    pub description: Option<String>,
    pub schema: Option<Value>,
    pub example: Option<Value>,
}

impl ApiDescription {
    /// Load and interpret an API description file
    pub fn load(path: &Path) -> LoaderResult<Self> {
        let document = parse_file(path)?;
        Self::from_value(&document, path)
    }

    /// Interpret a parsed document; `source` is used in error messages
    pub fn from_value(document: &Value, source: &Path) -> LoaderResult<Self> {
        let paths = document
            .get("paths")
            .ok_or_else(|| LoaderError::invalid_document(source, "paths", "missing"))?;
        let paths = as_mapping(paths, source, "paths")?;

        let mut operations = Vec::new();
        for (route, item) in paths {
            let item = as_mapping(item, source, &format!("paths.{}", route))?;
            for (method, operation) in item {
                if !HTTP_METHODS.contains(&method.as_str()) {
                    continue;
                }
                operations.push(Operation::from_value(route, method, operation, item, source)?);
            }
        }

        debug!(
            source = %source.display(),
            operations = operations.len(),
            "Loaded API description"
        );

        Ok(Self {
            title: document
                .pointer("/info/title")
                .and_then(Value::as_str)
                .map(String::from),
            operations,
        })
    }

    /// Find an operation by its `operationId`
    pub fn operation(&self, operation_id: &str) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.operation_id.as_deref() == Some(operation_id))
    }
}

impl Operation {
    /// `path_item` supplies parameters shared by every operation on the route
    fn from_value(
        route: &str,
        method: &str,
        value: &Value,
        path_item: &Map<String, Value>,
        source: &Path,
    ) -> LoaderResult<Self> {
        let location = format!("paths.{}.{}", route, method);
        let operation = as_mapping(value, source, &location)?;

        let (request_body, request_example) = match operation.get("requestBody") {
            Some(body) => {
                let media = first_media(body);
                (
                    media.and_then(|m| m.get("schema")).cloned(),
                    media.and_then(media_example),
                )
            }
            // An operation's own body parameter overrides the path item's
            None => (
                body_parameter(operation).or_else(|| body_parameter(path_item)),
                None,
            ),
        };

        let mut responses = Vec::new();
        if let Some(declared) = operation.get("responses") {
            let declared = as_mapping(declared, source, &format!("{}.responses", location))?;
            for (status, response) in declared {
                responses.push(Response::from_value(status, response));
            }
        } else {
            warn!(%location, "Operation declares no responses");
        }

        Ok(Self {
            method: method.to_string(),
            path: route.to_string(),
            operation_id: string_field(operation, "operationId"),
            summary: string_field(operation, "summary"),
            description: string_field(operation, "description"),
            request_body,
            request_example,
            responses,
        })
    }

    /// Name used for this operation in diagnostics
    pub fn label(&self) -> String {
        self.operation_id
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.method.to_uppercase(), self.path))
    }
}

impl Response {
    fn from_value(status: &str, value: &Value) -> Self {
        let media = first_media(value);

        // Swagger 2 puts the schema and examples directly on the response.
        let schema = value
            .get("schema")
            .or_else(|| media.and_then(|m| m.get("schema")))
            .cloned();
        let example = value
            .get("examples")
            .and_then(Value::as_object)
            .and_then(|examples| examples.values().next())
            .filter(|_| media.is_none())
            .cloned()
            .or_else(|| media.and_then(media_example));

        Self {
            status: status.to_string(),
            description: value.get("description").and_then(Value::as_str).map(String::from),
            schema,
            example,
        }
    }
}

fn as_mapping<'a>(
    value: &'a Value,
    source: &Path,
    location: &str,
) -> LoaderResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        LoaderError::invalid_document(source, location, "expected a mapping")
    })
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

/// The first `content.<media type>` entry (OpenAPI 3)
fn first_media(holder: &Value) -> Option<&Value> {
    holder
        .get("content")
        .and_then(Value::as_object)
        .and_then(|content| content.values().next())
}

fn media_example(media: &Value) -> Option<Value> {
    media.get("example").cloned().or_else(|| {
        media
            .get("examples")
            .and_then(Value::as_object)
            .and_then(|examples| examples.values().next())
            .and_then(|example| example.get("value"))
            .cloned()
    })
}

/// The schema of an `in: body` parameter (Swagger 2)
fn body_parameter(holder: &Map<String, Value>) -> Option<Value> {
    holder
        .get("parameters")
        .and_then(Value::as_array)?
        .iter()
        .find(|p| p.get("in").and_then(Value::as_str) == Some("body"))
        .and_then(|p| p.get("schema"))
        .cloned()
}
