//! Property-based tests for schema flattening and anchors
//!
//! These tests verify that flattening and slugging behave correctly
//! across a wide range of generated schemas.

use apidoc_schemas::documentation::{
    clean, flatten_value, format_type, slugify, ObjectDescriptor, SchemaNode, SlugStyle,
};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for generating object titles
fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9 ]{0,20}"
}

/// Strategy for generating well-formed schemas with controlled depth
fn schema_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(json!({"type": "string"})),
        Just(json!({"type": "integer"})),
        Just(json!({"type": ["string", "null"]})),
        Just(json!({"type": "boolean", "description": "A flag."})),
    ];

    leaf.prop_recursive(
        3,  // max depth
        24, // max size
        4,  // items per collection
        |inner| {
            prop_oneof![
                inner.clone().prop_map(|items| json!({"type": "array", "items": items})),
                inner.clone().prop_map(|values| json!({"type": "object", "additionalProperties": values})),
                (
                    proptest::option::of(title_strategy()),
                    proptest::collection::vec(("[a-z_]{1,10}", inner), 1..4),
                )
                    .prop_map(|(title, properties)| {
                        let mut schema = json!({
                            "type": "object",
                            "properties": properties.into_iter().collect::<serde_json::Map<_, _>>(),
                        });
                        if let Some(t) = title {
                            schema["title"] = json!(t);
                        }
                        schema
                    }),
            ]
        },
    )
}

fn has_anchor(node: &SchemaNode) -> bool {
    node.anchor.is_some()
        || node.properties.iter().flat_map(|p| p.values()).any(has_anchor)
        || node.items.as_deref().is_some_and(has_anchor)
        || node.additional_schema().is_some_and(has_anchor)
}

proptest! {
    /// Property: Flattening a well-formed schema never fails
    #[test]
    fn prop_well_formed_schemas_flatten(
        schema in schema_strategy()
    ) {
        prop_assert!(flatten_value(&schema, Some("p"), None).is_ok());
    }

    /// Property: Flattening is deterministic, anchors included
    #[test]
    fn prop_flatten_deterministic(
        schema in schema_strategy()
    ) {
        let first = flatten_value(&schema, Some("p"), None).unwrap();
        let second = flatten_value(&schema, Some("p"), None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: Without a prefix no anchor appears anywhere
    #[test]
    fn prop_no_prefix_no_anchors(
        schema in schema_strategy()
    ) {
        let flattened = flatten_value(&schema, None, None).unwrap();
        prop_assert!(flattened.objects.iter().all(|o| !has_anchor(o)));
        prop_assert!(!has_anchor(&flattened.schema));
    }

    /// Property: Listed objects are unique, the root first
    #[test]
    fn prop_objects_unique(
        schema in schema_strategy()
    ) {
        let flattened = flatten_value(&schema, Some("p"), None).unwrap();
        if flattened.schema.is_type("object") {
            prop_assert_eq!(&flattened.objects[0], &flattened.schema);
        }
        for (i, object) in flattened.objects.iter().enumerate() {
            prop_assert!(!flattened.objects[..i].contains(object));
        }
    }

    /// Property: Flattening does not change the type label
    #[test]
    fn prop_flatten_preserves_label(
        schema in schema_strategy()
    ) {
        let original = SchemaNode::from_value(&schema, "root").unwrap();
        let flattened = flatten_value(&schema, Some("p"), None).unwrap();
        prop_assert_eq!(format_type(&original), format_type(&flattened.schema));
    }

    /// Property: Cleaning is idempotent
    #[test]
    fn prop_clean_idempotent(
        schema in schema_strategy()
    ) {
        let node = SchemaNode::from_value(&schema, "root").unwrap();
        let once = clean(&node);
        let twice = clean(&SchemaNode::from(once.clone()));
        prop_assert_eq!(once, twice);
    }

    /// Property: Slugs contain no separator runs and no leading or trailing separator
    #[test]
    fn prop_slug_shape(
        title in "[a-zA-Z0-9 _./:-]{0,40}"
    ) {
        let slug = slugify(&title, SlugStyle::Lowercase);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(slug.chars().all(|c| c == '-' || c.is_alphanumeric()));
        prop_assert_eq!(slug.to_lowercase(), slug.clone());
    }

    /// Property: Case-preserving slugs differ from lowercase ones only in case
    #[test]
    fn prop_slug_styles_agree(
        title in title_strategy()
    ) {
        let lower = slugify(&title, SlugStyle::Lowercase);
        let preserved = slugify(&title, SlugStyle::PreserveCase);
        prop_assert_eq!(preserved.to_lowercase(), lower);
    }

    /// Property: A titled object always gets `{prefix}_{slug}`
    #[test]
    fn prop_titled_object_anchor(
        title in title_strategy(),
        prefix in "[a-z]{1,8}"
    ) {
        let schema = json!({
            "type": "object",
            "title": title.clone(),
            "properties": {"a": {"type": "string"}}
        });
        let flattened = flatten_value(&schema, Some(&prefix), None).unwrap();
        let expected = format!("{}_{}", prefix, slugify(&title, SlugStyle::Lowercase));
        prop_assert_eq!(flattened.schema.anchor, Some(expected));
    }
}

#[test]
fn test_descriptor_keeps_identity_fields_only() {
    let node = SchemaNode::from_value(
        &json!({
            "type": "object",
            "title": "T",
            "description": "dropped",
            "properties": {"a": {"type": "string"}}
        }),
        "root",
    )
    .unwrap();
    let descriptor: ObjectDescriptor = clean(&node);
    assert_eq!(descriptor.title.as_deref(), Some("T"));
    assert!(SchemaNode::from(descriptor).description.is_none());
}
