// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for genconf

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genconf")]
#[command(about = "Render network device configuration snippets from templates and YAML variables")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template file with variables from a YAML file
    Render {
        #[arg(help = "Path to template file")]
        template: PathBuf,

        #[arg(short = 'f', long = "vars-file", help = "Path to YAML variables file")]
        vars_file: Option<PathBuf>,

        #[arg(
            short = 'V',
            long = "var",
            help = "Override template variables (key=value)"
        )]
        vars: Vec<String>,

        #[arg(short, long, help = "Write rendered output to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Validate a template file without rendering
    Validate {
        #[arg(help = "Path to template file")]
        template: PathBuf,
    },

    /// Render the built-in interface sample template
    Demo,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
