//! Description cell rendering
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::schema::SchemaNode;
use html_escape::encode_text;
use serde_json::Value;

/// A version annotation attached to a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionNote<'a> {
    /// From `x-addedInMatrixVersion`
    Added { version: &'a str },
    /// One entry of `x-changedInMatrixVersion`
    Changed { version: &'a str, detail: &'a str },
}

/// Markdown and version-note rendering supplied by the site generator
pub trait MarkupRenderer {
    /// Render a markdown description to HTML
    fn markdown(&self, source: &str) -> String;

    /// Render an added-in or changed-in annotation
    fn version_note(&self, note: &VersionNote<'_>) -> String;
}

/// Minimal markup: escaped paragraphs with inline code spans
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

impl MarkupRenderer for PlainMarkup {
    fn markdown(&self, source: &str) -> String {
        source
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(|paragraph| format!("<p>{}</p>", inline_code(&encode_text(paragraph))))
            .collect()
    }

    fn version_note(&self, note: &VersionNote<'_>) -> String {
        match note {
            VersionNote::Added { version } => format!(
                "<p><strong>[Added in <code>v{}</code>]</strong></p>",
                encode_text(version)
            ),
            VersionNote::Changed { version, detail } => format!(
                "<p><strong>[Changed in <code>v{}</code>]</strong></p>{}",
                encode_text(version),
                self.markdown(detail)
            ),
        }
    }
}

/// `` `code` `` spans become `<code>` elements; an unpaired backtick is kept
fn inline_code(text: &str) -> String {
    let mut segments = text.split('`').collect::<Vec<_>>();
    if segments.len() % 2 == 0 {
        // Odd number of backticks: leave the last one literal.
        let last = segments.pop().unwrap_or_default();
        let mut rendered = inline_code(&segments.join("`"));
        rendered.push('`');
        rendered.push_str(last);
        return rendered;
    }

    let mut rendered = String::with_capacity(text.len());
    for (index, segment) in segments.iter().enumerate() {
        if index % 2 == 1 {
            rendered.push_str("<code>");
            rendered.push_str(segment);
            rendered.push_str("</code>");
        } else {
            rendered.push_str(segment);
        }
    }
    rendered
}

/// Render the description cell of a property.
///
/// `required` should come from [`is_required`](crate::documentation::is_required),
/// which honours both ways of marking a property required.
pub fn render_description(
    property: &SchemaNode,
    required: bool,
    markup: &dyn MarkupRenderer,
) -> String {
    let mut cell = String::new();

    if required {
        cell.push_str("<strong>Required: </strong>");
    }

    if let Some(description) = &property.description {
        cell.push_str(&markup.markdown(description));
    }

    if let Some(values) = &property.enum_values {
        let literals = values.iter().map(enum_literal).collect::<Vec<_>>();
        cell.push_str(&format!("<p>One of: <code>[{}]</code>.</p>", literals.join(", ")));
    }

    if let Some(version) = &property.added_in {
        cell.push_str(&markup.version_note(&VersionNote::Added { version }));
    }

    if let Some(changes) = &property.changed_in {
        for (version, detail) in changes {
            cell.push_str(&markup.version_note(&VersionNote::Changed { version, detail }));
        }
    }

    cell
}

fn enum_literal(value: &Value) -> String {
    match value {
        Value::String(s) => encode_text(s).into_owned(),
        other => encode_text(&other.to_string()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> SchemaNode {
        SchemaNode::from_value(&value, "test").unwrap()
    }

    #[test]
    fn test_required_marker_and_description() {
        let property = node(json!({"type": "string", "description": "The room ID."}));
        let cell = render_description(&property, true, &PlainMarkup);
        assert_eq!(cell, "<strong>Required: </strong><p>The room ID.</p>");

        let cell = render_description(&property, false, &PlainMarkup);
        assert_eq!(cell, "<p>The room ID.</p>");
    }

    #[test]
    fn test_enum_values() {
        let property = node(json!({"type": "string", "enum": ["join", "leave", 3]}));
        let cell = render_description(&property, false, &PlainMarkup);
        assert_eq!(cell, "<p>One of: <code>[join, leave, 3]</code>.</p>");
    }

    #[test]
    fn test_version_notes() {
        let property = node(json!({
            "type": "string",
            "x-addedInMatrixVersion": "1.1",
            "x-changedInMatrixVersion": {"1.4": "Now optional."}
        }));
        let cell = render_description(&property, false, &PlainMarkup);
        assert!(cell.contains("[Added in <code>v1.1</code>]"));
        assert!(cell.contains("[Changed in <code>v1.4</code>]</strong></p><p>Now optional.</p>"));
    }

    #[test]
    fn test_markdown_escapes_and_wraps() {
        let rendered = PlainMarkup.markdown("Use `m.text` <b>here</b>.\n\nSecond.");
        assert_eq!(
            rendered,
            "<p>Use <code>m.text</code> &lt;b&gt;here&lt;/b&gt;.</p><p>Second.</p>"
        );
        assert_eq!(PlainMarkup.markdown("a ` b"), "<p>a ` b</p>");
    }

    struct Uppercase;

    impl MarkupRenderer for Uppercase {
        fn markdown(&self, source: &str) -> String {
            source.to_uppercase()
        }

        fn version_note(&self, _note: &VersionNote<'_>) -> String {
            String::new()
        }
    }

    #[test]
    fn test_custom_renderer_is_used() {
        let property = node(json!({"description": "hello", "x-addedInMatrixVersion": "1.2"}));
        assert_eq!(render_description(&property, false, &Uppercase), "HELLO");
    }
}
