//! Generation pipeline.
//!
//! The [`Pipeline`] runs the scan → build → expand phases over one
//! [`GenerationContext`]. The resulting statements are handed to the
//! [`materialize`](crate::materialize) functions.
//!
//! # Example
//!
//! ```ignore
//! let ctx = Pipeline::new().run(&registry, &config)?;
//! let layout = OutputLayout::from_paths(&outputs, &config.api_dir)?;
//! create_api_files(&layout, &ctx.imports)?;
//! ```

mod context;
mod phase;
pub mod phases;
mod runner;

pub use context::GenerationContext;
pub use phase::Phase;
pub use runner::Pipeline;
