// ABOUTME: Command implementations for the genconf CLI
// ABOUTME: Handles execution of render, validate, and demo commands

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use super::args::Args;
use super::config::Config;
use crate::loader::{self, TemplateSource};
use crate::template::{TemplateEngine, VariableSet};

/// The sample interface template rendered by the demo command
const INTERFACE_TEMPLATE: &str =
    "set interface {{ ifd }} unit {{ unit }} family inet address {{ ip }}";

/// Render a template file with variables and write the result
pub fn render(
    template_path: PathBuf,
    vars_file: Option<PathBuf>,
    vars: Vec<String>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    info!("Rendering template: {}", template_path.display());

    let variables = assemble_variables(vars_file, &vars, config)?;
    debug!("Assembled {} template variables", variables.len());

    let source = TemplateSource::file(template_path);
    let template = source.load()?;

    let engine = TemplateEngine::new();
    let rendered = engine.render(&template, &variables)?;

    debug!("Rendered {} chars from {}", rendered.len(), source.describe());
    write_output(&rendered, output)?;

    Ok(())
}

/// Validate a template file without rendering it
pub fn validate(template_path: PathBuf, _config: &Config) -> Result<()> {
    info!("Validating template: {}", template_path.display());

    let template = TemplateSource::file(&template_path).load()?;

    let engine = TemplateEngine::new();
    engine.validate(&template)?;

    println!("✓ Template '{}' is valid", template_path.display());
    Ok(())
}

/// Render the built-in interface sample: one template, two variable sets
pub fn demo(_config: &Config) -> Result<()> {
    let engine = TemplateEngine::new();

    for variables in [
        interface_unit("101", "10.0.1.1/24"),
        interface_unit("102", "10.0.2.1/24"),
    ] {
        let rendered = engine.render(INTERFACE_TEMPLATE, &variables)?;
        println!("{}", rendered);
    }

    Ok(())
}

/// Build the render context: config defaults, then the variables file, then
/// CLI overrides
fn assemble_variables(
    vars_file: Option<PathBuf>,
    vars: &[String],
    config: &Config,
) -> Result<VariableSet> {
    let mut variables = VariableSet::new();
    variables.merge_pairs(config.template_vars.clone());

    if let Some(path) = vars_file {
        info!("Loading variables from: {}", path.display());
        variables.extend(loader::load_variables(path)?);
    }

    variables.merge_pairs(Args::parse_variables(vars)?);
    Ok(variables)
}

fn interface_unit(unit: &str, ip: &str) -> VariableSet {
    let mut variables = VariableSet::new();
    variables.set("ifd", "ge-0/0/0");
    variables.set("unit", unit);
    variables.set("ip", ip);
    variables
}

fn write_output(rendered: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|e| {
                anyhow::anyhow!("Failed to write output file '{}': {}", path.display(), e)
            })?;
            info!("Output written to: {}", path.display());
        }
        None => {
            println!("{}", rendered);
        }
    }
    Ok(())
}
