//! Output formatting and writing utilities
//!
//! Results are written either for people (messages, flattened object
//! listings as aligned tables) or as JSON/YAML for scripts. Progress
//! spinners go to stderr and only when it is a terminal.

use crate::cli::OutputFormat;
use crate::error::Result;
use apidoc_schemas::documentation::{is_required, SchemaNode};
use apidoc_schemas::{format_type, Flattened};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, trace};

/// The objects one schema flattens into, as `inspect` reports them
#[derive(Debug, Serialize)]
pub struct FlattenReport {
    /// Type label of the root schema
    pub root_type: String,
    pub objects: Vec<ObjectSummary>,
}

/// One flattened object
#[derive(Debug, Serialize)]
pub struct ObjectSummary {
    pub title: Option<String>,
    pub anchor: Option<String>,
    pub properties: Vec<PropertySummary>,
}

#[derive(Debug, Serialize)]
pub struct PropertySummary {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub required: bool,
}

impl From<&Flattened> for FlattenReport {
    fn from(flattened: &Flattened) -> Self {
        Self {
            root_type: format_type(&flattened.schema),
            objects: flattened.objects.iter().map(ObjectSummary::from).collect(),
        }
    }
}

impl From<&SchemaNode> for ObjectSummary {
    fn from(object: &SchemaNode) -> Self {
        let properties = object
            .properties
            .iter()
            .flatten()
            .map(|(name, property)| PropertySummary {
                name: name.clone(),
                type_label: format_type(property),
                required: is_required(object.required.as_ref(), name, property),
            })
            .collect();

        Self {
            title: object.title.clone(),
            anchor: object.anchor.clone(),
            properties,
        }
    }
}

/// Formats values for the configured output format
pub trait OutputFormatter {
    /// Format any serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the objects a schema flattens into
    fn format_flatten_report(&self, report: &FlattenReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // No dedicated human rendering for arbitrary values
            OutputFormat::JsonPretty | OutputFormat::Human => {
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_flatten_report(&self, report: &FlattenReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_flatten_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Writes messages and results, honouring format, colour and quiet mode
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Writer on stdout. Spinners need `progress` and an interactive stderr.
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stderr().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Writer on any sink; never shows spinners
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false,
            quiet,
            writer,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn is_chatty(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        self.writer.write_all(content.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Progress note, e.g. what was loaded
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!(message, "info");
        if !self.is_chatty() {
            return Ok(());
        }

        let line = if self.use_color {
            format!("{} {}", "ℹ".blue(), message)
        } else {
            format!("INFO: {}", message)
        };
        self.writeln(&line)
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        if !self.is_chatty() {
            return Ok(());
        }

        let line = if self.use_color {
            message.green().to_string()
        } else {
            message.to_string()
        };
        self.writeln(&line)
    }

    /// Warnings survive `--quiet` but not machine formats
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        let line = if self.use_color {
            message.yellow().to_string()
        } else {
            format!("WARNING: {}", message)
        };
        self.writeln(&line)
    }

    /// Serialize `value` in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.emit(formatted)
    }

    /// Write an `inspect` result; the human form is one table per object
    pub fn flatten_report(&mut self, report: &FlattenReport) -> Result<()> {
        let formatted = self.format.format_flatten_report(report)?;
        let formatted = if self.use_color && self.format == OutputFormat::Human {
            highlight_headings(&formatted)
        } else {
            formatted
        };
        self.emit(formatted)
    }

    fn emit(&mut self, formatted: String) -> Result<()> {
        trace!(bytes = formatted.len(), "Outputting data");
        if self.format == OutputFormat::Human {
            self.writeln(formatted.trim_end())
        } else {
            // Machine formats are written as produced
            self.write(&formatted)
        }
    }

    /// Spinner for work of unknown length, if progress is shown at all
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

/// Spinner style shared by all commands
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Align `rows` under `headers` in columns separated by `│`.
///
/// Widths count characters, not bytes; trailing padding is dropped.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = pad_row(headers.iter().copied(), &widths);
    table.push('\n');
    let separator: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    table.push_str(&separator.join("─┼─"));
    table.push('\n');
    for row in rows {
        table.push_str(&pad_row(row.iter().map(String::as_str), &widths));
        table.push('\n');
    }
    table
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let joined = cells
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(width) => format!("{:width$}", cell, width = *width),
            None => cell.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" │ ");
    joined.trim_end().to_string()
}

/// Human listing of a flattened schema
fn format_flatten_report_human(report: &FlattenReport) -> String {
    let mut output = format!("Type: {}\n", report.root_type);

    if report.objects.is_empty() {
        output.push_str("No objects to document.\n");
        return output;
    }

    for object in &report.objects {
        let title = object.title.as_deref().unwrap_or("<untitled object>");
        output.push_str(&format!("\n=== {} ===\n", title));
        if let Some(anchor) = &object.anchor {
            output.push_str(&format!("Anchor: #{}\n", anchor));
        }

        if object.properties.is_empty() {
            output.push_str("(no properties)\n");
            continue;
        }
        let rows: Vec<Vec<String>> = object
            .properties
            .iter()
            .map(|p| {
                let required = if p.required { "yes" } else { "no" };
                vec![p.name.clone(), p.type_label.clone(), required.to_string()]
            })
            .collect();
        output.push_str(&render_table(&["Name", "Type", "Required"], &rows));
    }

    output
}

fn highlight_headings(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.starts_with("=== ") {
                line.bright_blue().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
