//! Generation context passed through pipeline phases.

use apigen_registry::{GeneratorConfig, Registry};

use crate::{Export, ModuleImportsBuilder};

/// Context passed through all pipeline phases.
///
/// Owned by a single run; phases read the registry and accumulate exports
/// and statements here.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    /// The registry being scanned.
    pub registry: &'a Registry,
    /// Settings for this run.
    pub config: &'a GeneratorConfig,
    /// Exports discovered by the scan phase.
    pub exports: Vec<Export>,
    /// Statements per namespace (filled by the build and expand phases).
    pub imports: ModuleImportsBuilder,
}

impl<'a> GenerationContext<'a> {
    pub fn new(registry: &'a Registry, config: &'a GeneratorConfig) -> Self {
        Self {
            registry,
            config,
            exports: Vec::new(),
            imports: ModuleImportsBuilder::new(),
        }
    }

    /// Number of namespaces that will get a file.
    pub fn namespace_count(&self) -> usize {
        self.imports.len()
    }
}
