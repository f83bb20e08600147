//! Schema flattening
//!
//! Walks a schema and collects every object-typed subschema reachable from
//! it, so each one can get its own table. Nameable objects (title plus
//! properties) get an anchor, which is written back into the returned copy
//! of the schema so that type labels elsewhere can link to the table.
//!
//! Collected objects are reduced to their [`ObjectDescriptor`] projection and
//! deduplicated on it: the same logical object used by several fields only
//! produces one table.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::anchor::{anchor_for, SlugStyle};
use crate::documentation::error::{SchemaError, SchemaResult};
use crate::documentation::schema::{AdditionalProperties, Required, SchemaNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// Diagnostic name used when neither the caller nor the schema provides one
pub const UNNAMED_SCHEMA: &str = "<unnamed schema>";

/// The fields of an object that matter for rendering its table.
///
/// Everything else (examples, `additionalProperties`, vendor keys) is
/// dropped, and two objects with equal projections count as the same object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Required>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl From<&SchemaNode> for ObjectDescriptor {
    fn from(node: &SchemaNode) -> Self {
        Self {
            title: node.title.clone(),
            properties: node.properties.clone(),
            required: node.required.clone(),
            enum_values: node.enum_values.clone(),
            anchor: node.anchor.clone(),
        }
    }
}

impl From<ObjectDescriptor> for SchemaNode {
    fn from(descriptor: ObjectDescriptor) -> Self {
        Self {
            title: descriptor.title,
            properties: descriptor.properties,
            required: descriptor.required,
            enum_values: descriptor.enum_values,
            anchor: descriptor.anchor,
            ..Self::default()
        }
    }
}

/// Project a node onto its [`ObjectDescriptor`]
pub fn clean(node: &SchemaNode) -> ObjectDescriptor {
    ObjectDescriptor::from(node)
}

/// Output of a flattening pass
#[derive(Debug, Clone, PartialEq)]
pub struct Flattened {
    /// Every object found, root first. The root keeps its full shape; all
    /// nested entries are cleaned.
    pub objects: Vec<SchemaNode>,
    /// The input schema with anchors written in
    pub schema: SchemaNode,
}

/// Flattens schemas into the list of objects to document
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaFlattener {
    slug_style: SlugStyle,
}

impl SchemaFlattener {
    /// Create a flattener with the default slug style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flattener with a specific slug style for anchors
    pub fn with_slug_style(slug_style: SlugStyle) -> Self {
        Self { slug_style }
    }

    /// Flatten `schema`.
    ///
    /// Without an `anchor_prefix` no anchors are assigned anywhere, but
    /// duplicates are still removed. `name` labels the schema in errors and
    /// defaults to its title.
    pub fn flatten(
        &self,
        schema: &SchemaNode,
        anchor_prefix: Option<&str>,
        name: Option<&str>,
    ) -> SchemaResult<Flattened> {
        let name = name
            .or(schema.title.as_deref())
            .unwrap_or(UNNAMED_SCHEMA);
        let flattened = self.walk(schema, anchor_prefix, name)?;
        debug!(
            %name,
            objects = flattened.objects.len(),
            "Flattened schema"
        );
        Ok(flattened)
    }

    /// Flatten raw JSON, which must be a schema mapping
    pub fn flatten_value(
        &self,
        value: &Value,
        anchor_prefix: Option<&str>,
        name: Option<&str>,
    ) -> SchemaResult<Flattened> {
        let label = name
            .or_else(|| value.get("title").and_then(Value::as_str))
            .unwrap_or(UNNAMED_SCHEMA);
        let schema = SchemaNode::from_value(value, label)?;
        self.flatten(&schema, anchor_prefix, Some(label))
    }

    fn walk(
        &self,
        schema: &SchemaNode,
        anchor_prefix: Option<&str>,
        name: &str,
    ) -> SchemaResult<Flattened> {
        trace!(%name, "Visiting schema");
        let mut node = schema.clone();
        let mut objects = Vec::new();

        if node.is_type("object") {
            if let (Some(prefix), Some(title)) = (anchor_prefix, node.title.as_deref()) {
                if node.properties.is_some() {
                    let anchor = anchor_for(prefix, title, self.slug_style);
                    debug!(%name, %anchor, "Assigned anchor");
                    node.anchor = Some(anchor);
                }
            }

            if let Some(values) = node.additional_schema() {
                let nested =
                    self.walk(values, anchor_prefix, &format!("{}.additionalProperties", name))?;
                append_cleaned(&mut objects, nested.objects);
                node.additional_properties =
                    Some(AdditionalProperties::Schema(Box::new(nested.schema)));
            }

            if let Some(patterns) = &node.pattern_properties {
                let mut updated = IndexMap::with_capacity(patterns.len());
                for (pattern, value_schema) in patterns {
                    let nested = self.walk(
                        value_schema,
                        anchor_prefix,
                        &format!("{}.patternProperties[{}]", name, pattern),
                    )?;
                    append_cleaned(&mut objects, nested.objects);
                    updated.insert(pattern.clone(), nested.schema);
                }
                node.pattern_properties = Some(updated);
            }

            if let Some(properties) = &node.properties {
                let mut updated = IndexMap::with_capacity(properties.len());
                for (key, property) in properties {
                    let nested =
                        self.walk(property, anchor_prefix, &format!("{}.{}", name, key))?;
                    append_cleaned(&mut objects, nested.objects);
                    updated.insert(key.clone(), nested.schema);
                }
                node.properties = Some(updated);
            }

            objects.insert(0, node.clone());
        } else if node.is_type("array") {
            let rewritten = match node.items.as_deref() {
                // Alternatives are harvested but the array is left as it was.
                Some(SchemaNode {
                    any_of: Some(alternatives),
                    ..
                }) => {
                    for (index, alternative) in alternatives.iter().enumerate() {
                        let nested = self.walk(
                            alternative,
                            anchor_prefix,
                            &format!("{}.items[{}]", name, index),
                        )?;
                        append_cleaned(&mut objects, nested.objects);
                    }
                    None
                }
                Some(items) => {
                    let nested = self.walk(items, anchor_prefix, &format!("{}.items", name))?;
                    append_cleaned(&mut objects, nested.objects);
                    Some(nested.schema)
                }
                None => return Err(SchemaError::malformed(name)),
            };
            if let Some(items) = rewritten {
                node.items = Some(Box::new(items));
            }
        }

        if let Some(alternatives) = &node.one_of {
            for (index, alternative) in alternatives.iter().enumerate() {
                let nested =
                    self.walk(alternative, anchor_prefix, &format!("{}.oneOf[{}]", name, index))?;
                append_cleaned(&mut objects, nested.objects);
            }
        }

        Ok(Flattened {
            objects: dedup(objects),
            schema: node,
        })
    }
}

/// Flatten `schema` with the default slug style
pub fn flatten(
    schema: &SchemaNode,
    anchor_prefix: Option<&str>,
    name: Option<&str>,
) -> SchemaResult<Flattened> {
    SchemaFlattener::new().flatten(schema, anchor_prefix, name)
}

/// Flatten raw JSON with the default slug style
pub fn flatten_value(
    value: &Value,
    anchor_prefix: Option<&str>,
    name: Option<&str>,
) -> SchemaResult<Flattened> {
    SchemaFlattener::new().flatten_value(value, anchor_prefix, name)
}

fn append_cleaned(objects: &mut Vec<SchemaNode>, nested: Vec<SchemaNode>) {
    objects.extend(nested.iter().map(|object| SchemaNode::from(clean(object))));
}

fn dedup(objects: Vec<SchemaNode>) -> Vec<SchemaNode> {
    let total = objects.len();
    let mut unique: Vec<SchemaNode> = Vec::with_capacity(total);
    for object in objects {
        if !unique.contains(&object) {
            unique.push(object);
        }
    }
    if unique.len() < total {
        trace!(removed = total - unique.len(), "Removed duplicate objects");
    }
    unique
}
