//! Operation documentation generator
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::documentation::anchor::{operation_prefix, SlugStyle};
use crate::documentation::description::{MarkupRenderer, PlainMarkup};
use crate::documentation::error::GeneratorResult;
use crate::documentation::examples::{declared_example, render_example, synthesize_example};
use crate::documentation::flatten::SchemaFlattener;
use crate::documentation::formatter::{format_type, format_type_html};
use crate::documentation::schema::SchemaNode;
use crate::documentation::tables::{ResponseRow, Table};
use crate::loader::{ApiDescription, Operation};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Documentation generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Letter case of generated anchors
    pub slug_style: SlugStyle,
    /// Render JSON example bodies
    pub include_examples: bool,
    /// Build an example from the schema when none is declared
    pub synthesize_examples: bool,
    /// Link type labels of named objects to their tables
    pub link_types: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            slug_style: SlugStyle::default(),
            include_examples: true,
            synthesize_examples: false,
            link_types: true,
        }
    }
}

/// Renders HTML fragments for API operations
pub struct DocGenerator {
    config: GeneratorConfig,
    flattener: SchemaFlattener,
    markup: Box<dyn MarkupRenderer>,
}

impl DocGenerator {
    /// Create a new documentation generator
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            flattener: SchemaFlattener::with_slug_style(config.slug_style),
            config,
            markup: Box::new(PlainMarkup),
        }
    }

    /// Use a different markdown / version-note renderer
    pub fn with_markup(mut self, markup: Box<dyn MarkupRenderer>) -> Self {
        self.markup = markup;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render every operation of an API description
    pub fn generate(&self, api: &ApiDescription) -> GeneratorResult<String> {
        let mut html = String::new();
        if let Some(title) = &api.title {
            html.push_str(&format!("<h1>{}</h1>\n", encode_text(title)));
        }
        for operation in &api.operations {
            html.push_str(&self.render_operation(operation)?);
        }
        info!(operations = api.operations.len(), "Generated API documentation");
        Ok(html)
    }

    /// Render one operation: request tables, response codes, response tables
    pub fn render_operation(&self, operation: &Operation) -> GeneratorResult<String> {
        let label = operation.label();
        let base = operation_prefix(&operation.method, &operation.path, None);
        debug!(operation = %label, anchor = %base, "Rendering operation");

        let mut html = format!(
            "<section class=\"operation\" id=\"{}\">\n<h2><code>{} {}</code></h2>\n",
            encode_double_quoted_attribute(&base),
            operation.method.to_uppercase(),
            encode_text(&operation.path)
        );
        if let Some(summary) = &operation.summary {
            html.push_str(&format!("<p class=\"summary\">{}</p>\n", encode_text(summary)));
        }
        if let Some(description) = &operation.description {
            html.push_str(&self.markup.markdown(description));
            html.push('\n');
        }

        html.push_str("<h3>Request</h3>\n");
        match &operation.request_body {
            Some(body) => {
                let prefix = operation_prefix(&operation.method, &operation.path, Some("request"));
                html.push_str(&self.render_body(
                    body,
                    &prefix,
                    &format!("{}.request", label),
                    operation.request_example.as_ref(),
                )?);
            }
            None => html.push_str("<p>No request body.</p>\n"),
        }

        html.push_str("<h3>Responses</h3>\n");
        let rows: Vec<ResponseRow> = operation
            .responses
            .iter()
            .map(|response| ResponseRow {
                status: response.status.clone(),
                description: response.description.clone(),
                anchor: response.schema.as_ref().map(|_| {
                    operation_prefix(
                        &operation.method,
                        &operation.path,
                        Some(&format!("response {}", response.status)),
                    )
                }),
            })
            .collect();
        html.push_str(&Table::responses(&rows, self.markup.as_ref()));

        for (response, row) in operation.responses.iter().zip(&rows) {
            let (Some(schema), Some(prefix)) = (&response.schema, &row.anchor) else {
                continue;
            };
            html.push_str(&format!(
                "<h4 id=\"{}\">{} response</h4>\n",
                encode_double_quoted_attribute(prefix),
                encode_text(&response.status)
            ));
            html.push_str(&self.render_body(
                schema,
                prefix,
                &format!("{}.responses[{}]", label, response.status),
                response.example.as_ref(),
            )?);
        }

        html.push_str("</section>\n");
        Ok(html)
    }

    /// Render a request or response body: one table per object plus example
    pub fn render_body(
        &self,
        schema: &Value,
        anchor_prefix: &str,
        name: &str,
        example: Option<&Value>,
    ) -> GeneratorResult<String> {
        let flattened = self
            .flattener
            .flatten_value(schema, Some(anchor_prefix), Some(name))?;
        let body = &flattened.schema;
        let mut html = String::new();

        if body.is_type("array") {
            html.push_str(&format!("<p>Array of <code>{}</code>.</p>\n", self.type_label(body)));
        } else if !body.is_type("object") {
            html.push_str(&format!("<p><code>{}</code></p>\n", self.type_label(body)));
        }

        for object in &flattened.objects {
            if let Some(table) = Table::object(object, self.markup.as_ref(), self.config.link_types) {
                html.push_str(&table);
            }
        }

        if self.config.include_examples {
            let example = example
                .cloned()
                .or_else(|| declared_example(body))
                .or_else(|| self.config.synthesize_examples.then(|| synthesize_example(body)));
            if let Some(example) = example {
                html.push_str(&render_example(&example, name)?);
            }
        }

        Ok(html)
    }

    /// Type label for the top of a body, e.g. `[Event]` for an array of events
    fn type_label(&self, schema: &SchemaNode) -> String {
        let label = match schema.items.as_deref() {
            Some(items) if schema.is_type("array") => items,
            _ => schema,
        };
        if self.config.link_types {
            format_type_html(label)
        } else {
            encode_text(&format_type(label)).into_owned()
        }
    }
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new()
    }
}
