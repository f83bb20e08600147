//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use apidoc_schemas::SlugStyle;
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Apidoc CLI - HTML reference tables for API request and response bodies
///
/// Loads an OpenAPI or Swagger description, flattens each body schema into
/// the objects it contains and renders them as linked HTML tables.
#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "APIDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: from config, else human]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an API description as HTML
    Render(RenderArgs),

    /// Show the objects a single schema flattens into
    Inspect(InspectArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the API description (JSON or YAML)
    #[arg(value_name = "API_FILE")]
    pub api_file: PathBuf,

    /// Write the HTML to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Render only the operation with this operationId
    #[arg(long, value_name = "ID")]
    pub operation: Option<String>,

    /// Letter case of generated anchors
    #[arg(long, value_enum)]
    pub anchor_style: Option<AnchorStyle>,

    /// Build examples from the schema when none are declared
    #[arg(long, conflicts_with = "no_examples")]
    pub synthesize_examples: bool,

    /// Leave example bodies out
    #[arg(long)]
    pub no_examples: bool,

    /// Render type labels as plain text instead of links
    #[arg(long)]
    pub no_links: bool,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to a schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA_FILE")]
    pub schema_file: PathBuf,

    /// Anchor prefix; without one no anchors are assigned
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Name used for the schema in error messages
    #[arg(long)]
    pub name: Option<String>,

    /// Letter case of generated anchors
    #[arg(long, value_enum)]
    pub anchor_style: Option<AnchorStyle>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Initialize user config (<config dir>/apidoc/config.toml) instead of .apidoc.toml
    #[arg(long)]
    pub user: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Anchor letter case
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AnchorStyle {
    /// `Event Content` becomes `event-content`
    Lowercase,
    /// `Event Content` becomes `Event-Content`
    PreserveCase,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<AnchorStyle> for SlugStyle {
    fn from(style: AnchorStyle) -> Self {
        match style {
            AnchorStyle::Lowercase => SlugStyle::Lowercase,
            AnchorStyle::PreserveCase => SlugStyle::PreserveCase,
        }
    }
}
