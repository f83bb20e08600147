//! apidoc CLI - Command-line interface for API reference documentation
//!
//! This is the main entry point for the apidoc CLI application, providing
//! commands for rendering an API description to HTML and for inspecting
//! how a single schema flattens into object tables.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Configuration feeds logging, so it is loaded first
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(e),
    }
}

fn exit_with(error: Error) -> ! {
    eprintln!(
        "{}",
        error::format_error(&error, control::SHOULD_COLORIZE.should_colorize())
    );
    process::exit(error.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli.output.unwrap_or(config.output.format);
    let mut output = OutputWriter::new(
        format,
        cli.use_color() && config.output.color,
        cli.quiet,
        config.output.progress,
    );

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Render(args) => handlers::handle_render(args, &config, &mut output),
        Commands::Inspect(args) => handlers::handle_inspect(args, &config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
