//! JSON example bodies
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::error::{GeneratorError, GeneratorResult};
use crate::documentation::schema::{is_required, SchemaKind, SchemaNode};
use html_escape::encode_text;
use serde_json::{Map, Value};

/// Optional properties included in a synthesized object, after all required ones
const MAX_OPTIONAL_PROPERTIES: usize = 3;

/// Render a JSON example as a highlighted code block
pub fn render_example(example: &Value, name: &str) -> GeneratorResult<String> {
    let pretty = serde_json::to_string_pretty(example).map_err(|source| GeneratorError::Example {
        name: name.to_string(),
        source,
    })?;
    Ok(format!(
        "<pre><code class=\"language-json\">{}</code></pre>\n",
        encode_text(&pretty)
    ))
}

/// The example given by the schema author, if any
pub fn declared_example(schema: &SchemaNode) -> Option<Value> {
    if let Some(example) = &schema.example {
        return Some(example.clone());
    }
    match &schema.examples {
        Some(Value::Array(examples)) => examples.first().cloned(),
        Some(other) => Some(other.clone()),
        None => None,
    }
}

/// Build a plausible example body from the schema itself
pub fn synthesize_example(schema: &SchemaNode) -> Value {
    if let Some(example) = declared_example(schema) {
        return example;
    }
    if let Some(first) = schema.enum_values.as_ref().and_then(|values| values.first()) {
        return first.clone();
    }

    match schema.kind() {
        SchemaKind::Object(shape) => {
            let mut object = Map::new();

            if let Some(properties) = shape.properties {
                // Required properties first, then a few optional ones.
                for (key, property) in properties {
                    if is_required(schema.required.as_ref(), key, property) {
                        object.insert(key.clone(), synthesize_example(property));
                    }
                }
                let optional = properties
                    .iter()
                    .filter(|(key, property)| !is_required(schema.required.as_ref(), key, property))
                    .take(MAX_OPTIONAL_PROPERTIES);
                for (key, property) in optional {
                    object.insert(key.clone(), synthesize_example(property));
                }
            } else if let Some(values) = shape.additional {
                object.insert("key".to_string(), synthesize_example(values));
            } else if let Some((pattern, values)) = shape.patterns.and_then(|p| p.first()) {
                object.insert(pattern.clone(), synthesize_example(values));
            }

            Value::Object(object)
        }
        SchemaKind::Array(Some(items)) => Value::Array(vec![synthesize_example(items)]),
        SchemaKind::Array(None) => Value::Array(Vec::new()),
        SchemaKind::MultiType(types) => types
            .iter()
            .find(|t| t.as_str() != "null")
            .map(|t| scalar_placeholder(t))
            .unwrap_or(Value::Null),
        SchemaKind::Union(alternatives) => alternatives
            .first()
            .map(synthesize_example)
            .unwrap_or(Value::Null),
        SchemaKind::Scalar(type_name) => scalar_placeholder(type_name),
        SchemaKind::Untyped => Value::Null,
    }
}

fn scalar_placeholder(type_name: &str) -> Value {
    match type_name {
        "string" => Value::String("string".to_string()),
        "integer" | "number" => Value::Number(0.into()),
        "boolean" => Value::Bool(false),
        "object" => Value::Object(Map::new()),
        "array" => Value::Array(Vec::new()),
        _ => Value::Null,
    }
}
