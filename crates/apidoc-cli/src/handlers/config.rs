//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = if args.user {
        Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?
    } else {
        PathBuf::from(PROJECT_CONFIG_FILE)
    };

    write_default_config(&path, args.force, output)
}

fn write_default_config(path: &Path, force: bool, output: &mut OutputWriter) -> Result<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(path)?;
    debug!(path = %path.display(), "Wrote default configuration");
    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Edit it to customize rendering, output and logging.")?;
    Ok(())
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    output.writeln(content.trim_end())
}
