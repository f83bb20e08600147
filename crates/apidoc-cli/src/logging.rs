//! Logging utilities for the Apidoc CLI
//!
//! This module provides:
//! - Structured logging setup
//! - Multiple output formats (compact, full, JSON)
//! - Optional log file output
//! - Performance timing spans

use crate::config;
use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{field, Span};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Optional file output path
    pub file: Option<PathBuf>,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Include span events
    pub span_events: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "full" => Some(LogFormat::Full),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            file: None,
            thread_ids: false,
            source_location: false,
            span_events: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {
                config.level = "warn".to_string();
            }
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
                config.span_events = true;
            }
        }

        config
    }

    /// Apply the `[logging]` section of the config file.
    ///
    /// The file's level only applies when no `-v` flag was given.
    pub fn merge_with_file(&mut self, settings: &config::LoggingConfig, verbosity: u8) {
        if verbosity == 0 {
            if let Some(level) = &settings.level {
                self.level = level.clone();
            }
        }
        if let Some(format) = &settings.format {
            match LogFormat::parse(format) {
                Some(format) => self.format = format,
                None => eprintln!("Warning: Invalid log format in config: {}", format),
            }
        }
        if settings.file.is_some() {
            self.file = settings.file.clone();
        }
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        // APIDOC_LOG_FORMAT
        if let Ok(format) = std::env::var("APIDOC_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(format) => self.format = format,
                None => eprintln!("Warning: Invalid log format: {}, using default", format),
            }
        }

        // APIDOC_LOG_FILE
        if let Ok(file) = std::env::var("APIDOC_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config)?;
    let (writer, ansi) = create_writer(&config)?;
    let span_events = if config.span_events {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // Each format is a different subscriber type
    let installed = match config.format {
        LogFormat::Compact => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .compact()
                .finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .json()
                .finish(),
        ),
        LogFormat::Full => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .finish(),
        ),
    };
    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(config = ?config, "Logging system initialized");
    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", config.level, e)))
}

/// Log to the configured file, else to stderr (or nowhere when console is off)
fn create_writer(config: &LoggingConfig) -> Result<(BoxMakeWriter, bool)> {
    if let Some(path) = &config.file {
        let file_name = path
            .file_name()
            .ok_or_else(|| Error::config(format!("Invalid log file path: {}", path.display())))?;
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name.to_string_lossy())
            .build(directory)
            .map_err(|e| Error::config(format!("Cannot open log file {}: {}", path.display(), e)))?;
        return Ok((BoxMakeWriter::new(appender), false));
    }

    if config.console {
        let ansi = std::io::stderr().is_terminal();
        Ok((BoxMakeWriter::new(std::io::stderr), ansi))
    } else {
        Ok((BoxMakeWriter::new(std::io::sink), false))
    }
}

/// Create a span with timing
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that automatically logs duration when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, None),
                operation: operation.to_string(),
            }
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, Some(details)),
                operation: operation.to_string(),
            }
        }

        /// Get elapsed time without finishing the timer
        pub fn elapsed(&self) -> std::time::Duration {
            self.start.elapsed()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis(),
                "Operation completed"
            );
        }
    }
}
