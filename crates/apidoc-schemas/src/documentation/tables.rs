//! HTML tables for objects and response codes
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::description::{render_description, MarkupRenderer};
use crate::documentation::formatter::{format_type, format_type_html};
use crate::documentation::schema::{is_required, SchemaNode};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// One row of a response code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow {
    pub status: String,
    pub description: Option<String>,
    /// Id of the section documenting this response's body, if it has one
    pub anchor: Option<String>,
}

/// Table builders
pub struct Table;

impl Table {
    /// Property table for one flattened object.
    ///
    /// Objects without properties (plain maps, empty objects) have nothing to
    /// tabulate and return `None`.
    pub fn object(
        object: &SchemaNode,
        markup: &dyn MarkupRenderer,
        link_types: bool,
    ) -> Option<String> {
        let properties = object.properties.as_ref().filter(|p| !p.is_empty())?;
        let mut html = String::from("<table class=\"object-table\">\n");

        if let Some(title) = &object.title {
            match &object.anchor {
                Some(anchor) => html.push_str(&format!(
                    "<caption id=\"{}\">{}</caption>\n",
                    encode_double_quoted_attribute(anchor),
                    encode_text(title)
                )),
                None => html.push_str(&format!("<caption>{}</caption>\n", encode_text(title))),
            }
        }

        html.push_str("<thead><tr><th>Name</th><th>Type</th><th>Description</th></tr></thead>\n");
        html.push_str("<tbody>\n");

        for (name, property) in properties {
            let type_label = if link_types {
                format_type_html(property)
            } else {
                encode_text(&format_type(property)).into_owned()
            };
            let required = is_required(object.required.as_ref(), name, property);
            html.push_str(&format!(
                "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>\n",
                encode_text(name),
                type_label,
                render_description(property, required, markup)
            ));
        }

        html.push_str("</tbody>\n</table>\n");
        Some(html)
    }

    /// Status code table for an operation's responses
    pub fn responses(rows: &[ResponseRow], markup: &dyn MarkupRenderer) -> String {
        let mut html = String::from("<table class=\"response-table\">\n");
        html.push_str("<thead><tr><th>Code</th><th>Description</th></tr></thead>\n");
        html.push_str("<tbody>\n");

        for row in rows {
            let code = match &row.anchor {
                Some(anchor) => format!(
                    "<a href=\"#{}\"><code>{}</code></a>",
                    encode_double_quoted_attribute(anchor),
                    encode_text(&row.status)
                ),
                None => format!("<code>{}</code>", encode_text(&row.status)),
            };
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                code,
                row.description
                    .as_deref()
                    .map(|d| markup.markdown(d))
                    .unwrap_or_default()
            ));
        }

        html.push_str("</tbody>\n</table>\n");
        html
    }
}
