//! Phase trait for pipeline stages.

use super::GenerationContext;
use crate::Result;

/// A stage of the generation pipeline.
///
/// Phases run in order over one [`GenerationContext`]; the first error
/// aborts the run.
pub trait Phase {
    /// Name of the phase, for logging.
    fn name(&self) -> &'static str;

    /// Run the phase.
    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}
