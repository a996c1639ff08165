use std::path::PathBuf;

use apigen_registry::RegistryToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    outputs::resolve_outputs,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Expected output files. A single argument is read as a file holding a
    /// semicolon-separated list of output paths.
    #[arg(required = true, num_args = 1.., value_name = "OUTPUTS")]
    pub outputs: Vec<PathBuf>,

    /// Path to the export registry (defaults to ./exports.toml)
    #[arg(short, long, default_value = "exports.toml")]
    pub registry: PathBuf,

    /// Module path the generated package is importable as (overrides the registry)
    #[arg(long)]
    pub output_module: Option<String>,

    /// Directory name every output path must contain (overrides the registry)
    #[arg(long)]
    pub api_dir: Option<String>,

    /// Print generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let registry_toml = RegistryToml::open(&self.registry).unwrap_or_exit();
        let (mut config, registry) = registry_toml.into_parts();

        if let Some(output_module) = &self.output_module {
            config = config.with_output_module(output_module);
        }
        if let Some(api_dir) = &self.api_dir {
            config = config.with_api_dir(api_dir);
        }

        let outputs = resolve_outputs(&self.outputs)?;

        let report = generate(
            &registry,
            &config,
            &outputs,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
