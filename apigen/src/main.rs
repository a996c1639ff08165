mod commands;
mod ops;
mod outputs;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    cli.init_logging();
    cli.run()
}
