//! Render command handler

use crate::cli::{OutputFormat, RenderArgs};
use crate::config::Config;
use crate::error::{Error, ErrorContext, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use apidoc_schemas::{ApiDescription, DocGenerator, GeneratorConfig};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Machine-readable summary of a render
#[derive(Debug, Serialize)]
struct RenderSummary {
    operations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
}

/// Handle the render command
#[instrument(skip(config, output), fields(file = %args.api_file.display()))]
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("render_command", &args.api_file.display().to_string());

    if !args.api_file.exists() {
        return Err(Error::FileNotFound {
            path: args.api_file.clone(),
        });
    }

    let api = {
        let _load_timer = Timer::new("api_loading");
        ApiDescription::load(&args.api_file)?
    };
    output.info(&format!(
        "Loaded {} operation(s) from {}",
        api.operations.len(),
        args.api_file.display()
    ))?;

    let generator_config = generator_config(&args, &config.render);
    debug!(config = ?generator_config, "Effective render settings");
    let generator = DocGenerator::with_config(generator_config);

    let progress = output.spinner("Rendering operations...");
    let rendered = match &args.operation {
        Some(id) => api
            .operation(id)
            .ok_or_else(|| Error::OperationNotFound {
                id: id.clone(),
                path: args.api_file.clone(),
            })
            .and_then(|operation| Ok((1, generator.render_operation(operation)?))),
        None => generator
            .generate(&api)
            .map(|html| (api.operations.len(), html))
            .map_err(Error::from),
    };
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    let (operations, html) = rendered?;

    info!(
        operations,
        bytes = html.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Rendered documentation"
    );

    match &args.out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if output.format() == OutputFormat::Human {
                output.success(&format!(
                    "✓ Wrote {} operation(s) to {}",
                    operations,
                    path.display()
                ))?;
            } else {
                output.data(&RenderSummary {
                    operations,
                    file: Some(path.clone()),
                    html: None,
                })?;
            }
        }
        None if output.format() == OutputFormat::Human => output.write(&html)?,
        None => output.data(&RenderSummary {
            operations,
            file: None,
            html: Some(html),
        })?,
    }

    Ok(())
}

/// Command-line flags layered over the `[render]` config section
fn generator_config(args: &RenderArgs, base: &GeneratorConfig) -> GeneratorConfig {
    let mut config = base.clone();
    if let Some(style) = args.anchor_style {
        config.slug_style = style.into();
    }
    if args.synthesize_examples {
        config.include_examples = true;
        config.synthesize_examples = true;
    }
    if args.no_examples {
        config.include_examples = false;
    }
    if args.no_links {
        config.link_types = false;
    }
    config
}
