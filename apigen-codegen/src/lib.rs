//! Import graph construction for generated API entry files.
//!
//! Given an export [`Registry`](apigen_registry::Registry), this crate works
//! out which statements each public namespace needs and writes them to the
//! declared entry files.
//!
//! # Module Organization
//!
//! - [`scan`] - Export Scanner (registry → exports)
//! - [`imports`] - Import Builder (dedup and conflict detection)
//! - [`closure`] - Namespace Closure Expander (parent bindings)
//! - [`materialize`] - Output layout and file writing
//! - [`pipeline`] - Phase orchestration
//! - [`format`] - Statement rendering

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod closure;
mod error;
pub mod format;
pub mod imports;
pub mod materialize;
pub mod pipeline;
pub mod scan;

pub use closure::expand_namespaces;
pub use error::{Error, Result};
pub use format::{format_constant, format_import, full_export_name, split_export_path};
pub use imports::ModuleImportsBuilder;
pub use materialize::{
    ENTRY_FILE, GENERATED_FILE_HEADER, MaterializeStats, OutputLayout, PreviewFile,
    create_api_files, preview,
};
pub use scan::{Export, ExportSource, scan_exports};
