mod generate;

use clap::{ArgAction, Parser};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on registry errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apigen_registry::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "apigen")]
#[command(version)]
#[command(about = "Generate public API entry files from an export registry")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    /// Set up `env_logger`; `RUST_LOG` takes precedence over `-v`.
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_timestamp(None)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::parse_from(["apigen", "-vv", "a/api/__init__.py", "a/api/tf/__init__.py"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_outputs_required() {
        assert!(Cli::try_parse_from(["apigen"]).is_err());
    }
}
