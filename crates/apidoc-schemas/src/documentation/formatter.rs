//! Type labels for property schemas
//!
//! Produces the short type signature shown in the "Type" column:
//! `string`, `[integer]`, `{string: Member}`, `string|null`, or the title of
//! a named object. The HTML variant links named objects to their table.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::schema::{ObjectShape, SchemaKind, SchemaNode};
use html_escape::{encode_double_quoted_attribute, encode_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Plain,
    Html,
}

/// Plain-text type label for a property schema
pub fn format_type(schema: &SchemaNode) -> String {
    render(schema, Markup::Plain)
}

/// HTML type label; anchored objects become `<a href="#anchor">Title</a>`
pub fn format_type_html(schema: &SchemaNode) -> String {
    render(schema, Markup::Html)
}

fn render(schema: &SchemaNode, markup: Markup) -> String {
    match schema.kind() {
        SchemaKind::Object(shape) => object_label(&shape, markup),
        SchemaKind::Array(Some(items)) => format!("[{}]", render(items, markup)),
        SchemaKind::Array(None) => "array".to_string(),
        SchemaKind::MultiType(types) => types
            .iter()
            .map(|t| text(t, markup))
            .collect::<Vec<_>>()
            .join("|"),
        SchemaKind::Union(alternatives) => union(alternatives.iter(), markup),
        SchemaKind::Scalar(type_name) => text(type_name, markup),
        SchemaKind::Untyped => String::new(),
    }
}

fn object_label(shape: &ObjectShape<'_>, markup: Markup) -> String {
    if let Some(title) = shape.title {
        return match (markup, shape.anchor) {
            (Markup::Html, Some(anchor)) => format!(
                "<a href=\"#{}\">{}</a>",
                encode_double_quoted_attribute(anchor),
                encode_text(title)
            ),
            _ => text(title, markup),
        };
    }

    if let Some(values) = shape.additional {
        return format!("{{string: {}}}", render(values, markup));
    }

    match shape.patterns {
        Some(patterns) if !patterns.is_empty() => {
            format!("{{string: {}}}", union(patterns.values(), markup))
        }
        _ => "object".to_string(),
    }
}

fn union<'a>(alternatives: impl Iterator<Item = &'a SchemaNode>, markup: Markup) -> String {
    alternatives
        .map(|alternative| render(alternative, markup))
        .collect::<Vec<_>>()
        .join("|")
}

fn text(value: &str, markup: Markup) -> String {
    match markup {
        Markup::Plain => value.to_string(),
        Markup::Html => encode_text(value).into_owned(),
    }
}
