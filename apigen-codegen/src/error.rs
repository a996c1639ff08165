use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Two different statements claim the same public name.
    #[error("Trying to export multiple symbols with same name: {name}.")]
    #[diagnostic(
        code(apigen::symbol_exposed_twice),
        help("rename one of the exports, or export the same object instead of two")
    )]
    SymbolExposedTwice { name: String },

    #[error("Output files must be in {api_dir}/ directory, found {path}.")]
    #[diagnostic(code(apigen::outside_api_dir))]
    OutsideApiDir { path: String, api_dir: String },

    /// Namespaces that received imports but have no declared output file.
    #[error(
        "Missing outputs for API generation:\n{}.\nMake sure all required outputs are in the output manifest.",
        .paths.join(",\n")
    )]
    #[diagnostic(code(apigen::missing_outputs))]
    MissingOutputs { paths: Vec<String> },

    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
