//! Export registry for the apigen API generator.
//!
//! The registry describes the loaded modules of the library being scanned:
//! which objects each module binds, which objects merely decorate others,
//! and the public paths declared for objects and constants. It is usually
//! loaded from a TOML file ([`RegistryToml`]) but can be built in code.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod exports;
mod file;
mod module;
mod parse;
mod registry;
mod symbol;
mod validate;

pub use config::{DEFAULT_API_DIR, DEFAULT_OUTPUT_MODULE, DEFAULT_PACKAGE, GeneratorConfig};
pub use error::{Error, Result, SourceContext};
pub use exports::ExportTable;
pub use file::RegistryToml;
pub use module::{ConstantDecl, ConstantValue, Module};
pub use parse::{DEFAULT_FILENAME, parse_registry};
pub use registry::Registry;
pub use symbol::{Symbol, SymbolArena, SymbolId, Unwrappable};
