//! Pipeline orchestrator.

use apigen_registry::{GeneratorConfig, Registry};
use log::debug;

use super::{
    GenerationContext, Phase,
    phases::{BuildPhase, ExpandPhase, ScanPhase},
};
use crate::Result;

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (scan, build, expand) followed by any extra
/// phases added with [`phase`](Self::phase).
///
/// # Example
///
/// ```
/// use apigen_codegen::pipeline::Pipeline;
/// use apigen_registry::{GeneratorConfig, Module, Registry};
///
/// let mut registry = Registry::new();
/// let foo = registry.add_symbol("Foo");
/// registry.export(foo, ["tf.Foo"]);
/// registry.add_module(Module::new("tensorflow.python.foo").with_member("Foo", foo));
///
/// let config = GeneratorConfig::default();
/// let ctx = Pipeline::new().run(&registry, &config).unwrap();
///
/// assert_eq!(ctx.imports.imports("tf"), &["from tensorflow.python.foo import Foo".to_string()]);
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with only the built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline over a registry.
    ///
    /// # Errors
    ///
    /// Returns the first error of any phase, e.g. `SymbolExposedTwice`.
    pub fn run<'a>(
        &self,
        registry: &'a Registry,
        config: &'a GeneratorConfig,
    ) -> Result<GenerationContext<'a>> {
        let mut ctx = GenerationContext::new(registry, config);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ScanPhase),
            Box::new(BuildPhase),
            Box::new(ExpandPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            debug!("running phase '{}'", phase.name());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
