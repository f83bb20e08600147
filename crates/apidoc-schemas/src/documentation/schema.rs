//! Typed schema model for documentation rendering
//!
//! A [`SchemaNode`] holds the subset of JSON Schema keywords that the
//! flattener and the type formatter understand. Unknown keys survive in
//! [`SchemaNode::extra`] so a rewritten schema serializes back with
//! everything it was given.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::error::{SchemaError, SchemaResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` keyword: a single type name or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multi(Vec<String>),
}

/// The `required` keyword in either of its two accepted forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Required {
    /// Object level: names of the required properties
    Names(Vec<String>),
    /// Property level: `required: true` on the property itself
    Flag(bool),
}

impl Required {
    /// Whether `name` appears in an object-level list
    pub fn names(&self, name: &str) -> bool {
        match self {
            Required::Names(names) => names.iter().any(|n| n == name),
            Required::Flag(_) => false,
        }
    }

    /// Whether this is a property-level `true`
    pub fn flag(&self) -> bool {
        matches!(self, Required::Flag(true))
    }
}

/// The `additionalProperties` keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<SchemaNode>),
}

impl AdditionalProperties {
    /// The value schema, when this is not a plain boolean
    pub fn schema(&self) -> Option<&SchemaNode> {
        match self {
            AdditionalProperties::Schema(schema) => Some(schema),
            AdditionalProperties::Allowed(_) => None,
        }
    }
}

/// A JSON Schema node, already `$ref`-resolved and `allOf`-merged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Required>,

    #[serde(
        rename = "additionalProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(
        rename = "patternProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pattern_properties: Option<IndexMap<String, SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(rename = "oneOf", default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaNode>>,

    #[serde(rename = "anyOf", default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaNode>>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,

    #[serde(
        rename = "x-addedInMatrixVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub added_in: Option<String>,

    #[serde(
        rename = "x-changedInMatrixVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub changed_in: Option<IndexMap<String, String>>,

    /// Link target, only ever set by the flattener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// Keys the renderer does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Object facet of a node, as seen by the type formatter
#[derive(Debug, Clone, Copy)]
pub struct ObjectShape<'a> {
    pub title: Option<&'a str>,
    pub anchor: Option<&'a str>,
    pub properties: Option<&'a IndexMap<String, SchemaNode>>,
    pub additional: Option<&'a SchemaNode>,
    pub patterns: Option<&'a IndexMap<String, SchemaNode>>,
}

/// The facet of a node that decides how its type is rendered
#[derive(Debug, Clone, Copy)]
pub enum SchemaKind<'a> {
    Object(ObjectShape<'a>),
    Array(Option<&'a SchemaNode>),
    MultiType(&'a [String]),
    Union(&'a [SchemaNode]),
    Scalar(&'a str),
    Untyped,
}

impl SchemaNode {
    /// Convert raw JSON into a node, naming `name` in the error on failure
    pub fn from_value(value: &Value, name: &str) -> SchemaResult<Self> {
        if !value.is_object() {
            return Err(SchemaError::invalid_input(
                name,
                format!("expected a mapping, found {}", value_kind(value)),
            ));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| SchemaError::invalid_input(name, e.to_string()))
    }

    /// Shorthand for a node with a single scalar or container type
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self {
            schema_type: Some(SchemaType::Single(type_name.into())),
            ..Self::default()
        }
    }

    /// Whether `type` is exactly `type_name` (a type list never matches)
    pub fn is_type(&self, type_name: &str) -> bool {
        matches!(&self.schema_type, Some(SchemaType::Single(t)) if t == type_name)
    }

    /// An object with both a title and properties can be linked to
    pub fn is_nameable(&self) -> bool {
        self.title.is_some() && self.properties.is_some()
    }

    /// Schema describing the values of unlisted keys, if any
    pub fn additional_schema(&self) -> Option<&SchemaNode> {
        self.additional_properties.as_ref().and_then(AdditionalProperties::schema)
    }

    /// Classify the node for type rendering. The first matching facet wins,
    /// in the order object, array, type list, `oneOf`, scalar.
    pub fn kind(&self) -> SchemaKind<'_> {
        match (&self.schema_type, self.one_of.as_deref()) {
            (Some(SchemaType::Single(t)), _) if t == "object" => SchemaKind::Object(ObjectShape {
                title: self.title.as_deref(),
                anchor: self.anchor.as_deref(),
                properties: self.properties.as_ref(),
                additional: self.additional_schema(),
                patterns: self.pattern_properties.as_ref(),
            }),
            (Some(SchemaType::Single(t)), _) if t == "array" => {
                SchemaKind::Array(self.items.as_deref())
            }
            (Some(SchemaType::Multi(types)), _) => SchemaKind::MultiType(types),
            (_, Some(alternatives)) => SchemaKind::Union(alternatives),
            (Some(SchemaType::Single(t)), None) => SchemaKind::Scalar(t),
            (None, None) => SchemaKind::Untyped,
        }
    }
}

/// Whether `name` is required, given the parent's `required` keyword and the
/// property schema. Either form marks it.
pub fn is_required(parent_required: Option<&Required>, name: &str, property: &SchemaNode) -> bool {
    parent_required.is_some_and(|r| r.names(name))
        || property.required.as_ref().is_some_and(Required::flag)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
