//! Unit tests for schema flattening
//!
//! These tests cover object discovery order, anchor assignment, duplicate
//! removal and the malformed-schema failure, using schemas shaped like the
//! ones found in real API descriptions.

use apidoc_schemas::documentation::{
    flatten_value, is_required, SchemaError, SchemaFlattener, SchemaNode, SlugStyle,
};
use serde_json::json;

fn node(value: serde_json::Value) -> SchemaNode {
    SchemaNode::from_value(&value, "test").unwrap()
}

#[cfg(test)]
mod object_discovery {
    use super::*;

    #[test]
    fn test_event_with_nested_content() {
        let schema = json!({
            "type": "object",
            "title": "Event",
            "properties": {
                "content": {
                    "type": "object",
                    "title": "EventContent",
                    "properties": {"body": {"type": "string"}}
                }
            }
        });

        let flattened = flatten_value(&schema, Some("ev"), None).unwrap();
        let titles: Vec<_> = flattened
            .objects
            .iter()
            .map(|o| o.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["Event", "EventContent"]);
        assert_eq!(flattened.objects[0].anchor.as_deref(), Some("ev_event"));
        assert_eq!(flattened.objects[1].anchor.as_deref(), Some("ev_eventcontent"));

        // The returned schema carries the nested anchor too.
        let content = &flattened.schema.properties.as_ref().unwrap()["content"];
        assert_eq!(content.anchor.as_deref(), Some("ev_eventcontent"));
    }

    #[test]
    fn test_preserve_case_anchors() {
        let schema = node(json!({
            "type": "object",
            "title": "Event",
            "properties": {"a": {"type": "string"}}
        }));
        let flattened = SchemaFlattener::with_slug_style(SlugStyle::PreserveCase)
            .flatten(&schema, Some("ev"), None)
            .unwrap();
        assert_eq!(flattened.objects[0].anchor.as_deref(), Some("ev_Event"));
    }

    #[test]
    fn test_objects_found_through_maps_arrays_and_unions() {
        let schema = json!({
            "type": "object",
            "title": "Sync",
            "properties": {
                "rooms": {
                    "type": "object",
                    "additionalProperties": {
                        "type": "object",
                        "title": "JoinedRoom",
                        "properties": {"summary": {"type": "string"}}
                    }
                },
                "presence": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "title": "PresenceEvent",
                        "properties": {"sender": {"type": "string"}}
                    }
                },
                "device": {
                    "oneOf": [
                        {"type": "string"},
                        {"type": "object", "title": "DeviceInfo", "properties": {"id": {"type": "string"}}}
                    ]
                }
            }
        });

        let flattened = flatten_value(&schema, Some("sync"), None).unwrap();
        let titles: Vec<_> = flattened
            .objects
            .iter()
            .filter_map(|o| o.title.as_deref())
            .collect();
        assert_eq!(titles, ["Sync", "JoinedRoom", "PresenceEvent", "DeviceInfo"]);
    }

    #[test]
    fn test_pattern_properties_are_walked_in_order() {
        let schema = json!({
            "type": "object",
            "title": "Keys",
            "properties": {"user_id": {"type": "string"}},
            "patternProperties": {
                "^ed25519:": {"type": "object", "title": "Ed", "properties": {"k": {"type": "string"}}},
                "^curve25519:": {"type": "object", "title": "Curve", "properties": {"k": {"type": "string"}}}
            }
        });

        let flattened = flatten_value(&schema, None, None).unwrap();
        let titles: Vec<_> = flattened
            .objects
            .iter()
            .filter_map(|o| o.title.as_deref())
            .collect();
        assert_eq!(titles, ["Keys", "Ed", "Curve"]);
    }

    #[test]
    fn test_scalar_root_yields_no_objects() {
        let flattened = flatten_value(&json!({"type": "string"}), Some("p"), None).unwrap();
        assert!(flattened.objects.is_empty());
        assert_eq!(flattened.schema, node(json!({"type": "string"})));
    }
}

#[cfg(test)]
mod anchors {
    use super::*;

    fn titled() -> serde_json::Value {
        json!({
            "type": "object",
            "title": "Room Member",
            "properties": {"name": {"type": "string"}}
        })
    }

    #[test]
    fn test_no_anchor_without_prefix() {
        let flattened = flatten_value(&titled(), None, None).unwrap();
        assert!(flattened.objects.iter().all(|o| o.anchor.is_none()));
        assert!(flattened.schema.anchor.is_none());
    }

    #[test]
    fn test_anchor_is_deterministic() {
        let first = flatten_value(&titled(), Some("p"), None).unwrap();
        let second = flatten_value(&titled(), Some("p"), None).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.schema.anchor.as_deref(), Some("p_room-member"));
    }

    #[test]
    fn test_prefix_separates_anchors() {
        let request = flatten_value(&titled(), Some("put_send_request"), None).unwrap();
        let response = flatten_value(&titled(), Some("put_send_response-200"), None).unwrap();
        assert_ne!(request.schema.anchor, response.schema.anchor);
    }

    #[test]
    fn test_untitled_objects_get_no_anchor() {
        let flattened = flatten_value(
            &json!({"type": "object", "properties": {"a": {"type": "string"}}}),
            Some("p"),
            None,
        )
        .unwrap();
        assert_eq!(flattened.objects.len(), 1);
        assert!(flattened.objects[0].anchor.is_none());
    }

    #[test]
    fn test_same_title_shares_anchor() {
        let schema = json!({
            "type": "object",
            "title": "Root",
            "properties": {
                "a": {
                    "type": "object",
                    "title": "Content",
                    "properties": {"body": {"type": "string"}}
                },
                "b": {
                    "type": "object",
                    "title": "Content",
                    "properties": {"url": {"type": "string"}}
                }
            }
        });
        let flattened = flatten_value(&schema, Some("p"), None).unwrap();

        // Both objects are listed, but the anchor only depends on prefix and title
        assert_eq!(flattened.objects.len(), 3);
        let anchors: Vec<_> = flattened.objects.iter().map(|o| o.anchor.as_deref()).collect();
        assert_eq!(anchors, vec![Some("p_root"), Some("p_content"), Some("p_content")]);
    }

    #[test]
    fn test_symbol_only_title_gets_placeholder_anchor() {
        let schema = json!({
            "type": "object",
            "title": "???",
            "properties": {"a": {"type": "string"}}
        });
        let flattened = flatten_value(&schema, Some("p"), None).unwrap();
        assert_eq!(flattened.schema.anchor.as_deref(), Some("p_untitled"));
        assert_eq!(flattened.objects[0].anchor.as_deref(), Some("p_untitled"));
    }
}

#[cfg(test)]
mod deduplication {
    use super::*;

    #[test]
    fn test_shared_object_listed_once() {
        let shared = json!({
            "type": "object",
            "title": "UnsignedData",
            "properties": {"age": {"type": "integer"}}
        });
        let schema = json!({
            "type": "object",
            "title": "Chunk",
            "properties": {
                "state": {"type": "object", "title": "State", "properties": {"unsigned": shared.clone()}},
                "timeline": {"type": "object", "title": "Timeline", "properties": {"unsigned": shared}}
            }
        });

        let flattened = flatten_value(&schema, Some("p"), None).unwrap();
        let titles: Vec<_> = flattened
            .objects
            .iter()
            .filter_map(|o| o.title.as_deref())
            .collect();
        assert_eq!(titles, ["Chunk", "State", "UnsignedData", "Timeline"]);
    }

    #[test]
    fn test_objects_differing_in_description_only_collapse() {
        let schema = json!({
            "type": "object",
            "title": "Pair",
            "properties": {
                "left": {"type": "object", "title": "Side", "description": "Left.", "properties": {"v": {"type": "string"}}},
                "right": {"type": "object", "title": "Side", "description": "Right.", "properties": {"v": {"type": "string"}}}
            }
        });

        let flattened = flatten_value(&schema, Some("p"), None).unwrap();
        assert_eq!(flattened.objects.len(), 2);
    }
}

#[cfg(test)]
mod failures {
    use super::*;

    #[test]
    fn test_array_without_items_names_the_path() {
        let schema = json!({
            "type": "object",
            "title": "Batch",
            "properties": {
                "inner": {
                    "type": "object",
                    "properties": {"list": {"type": "array"}}
                }
            }
        });

        let err = flatten_value(&schema, Some("p"), None).unwrap_err();
        assert_eq!(err, SchemaError::malformed("Batch.inner.list"));
        assert!(err.to_string().contains("Batch.inner.list"));
    }

    #[test]
    fn test_explicit_name_is_used() {
        let err = flatten_value(&json!({"type": "array"}), None, Some("sendMessage.request"))
            .unwrap_err();
        assert_eq!(err.name(), "sendMessage.request");
    }

    #[test]
    fn test_non_mapping_input_is_rejected() {
        let err = flatten_value(&json!("string"), None, Some("Body")).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidInput { .. }));
    }
}

#[cfg(test)]
mod required_flags {
    use super::*;

    #[test]
    fn test_either_form_marks_required() {
        let parent = node(json!({
            "type": "object",
            "required": ["a"],
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "string", "required": true},
                "c": {"type": "string"}
            }
        }));
        let properties = parent.properties.as_ref().unwrap();

        assert!(is_required(parent.required.as_ref(), "a", &properties["a"]));
        assert!(is_required(parent.required.as_ref(), "b", &properties["b"]));
        assert!(!is_required(parent.required.as_ref(), "c", &properties["c"]));
    }
}
