//! Export scanning over registered modules.

use std::collections::HashSet;

use apigen_registry::{ConstantValue, GeneratorConfig, Module, Registry};
use log::{debug, trace};

use crate::format::split_export_path;

/// What an export binds at its destination.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportSource {
    /// A module member, imported by its member name.
    Symbol(String),
    /// A literal assigned by value.
    Constant(ConstantValue),
}

/// One public binding discovered by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    /// Destination namespace (`""` for the root).
    pub namespace: String,
    /// Module the binding comes from.
    pub source_module: String,
    pub source: ExportSource,
    /// Name at the destination.
    pub dest_name: String,
}

impl Export {
    fn new(path: &str, source_module: &str, source: ExportSource) -> Self {
        let (namespace, dest_name) = split_export_path(path);
        Self {
            namespace: namespace.to_string(),
            source_module: source_module.to_string(),
            source,
            dest_name: dest_name.to_string(),
        }
    }
}

/// Check if a module takes part in the scan.
pub fn is_scanned_module(module: &Module, config: &GeneratorConfig) -> bool {
    module.is_in_package(&config.package) && !module.is_in_excluded_area(&config.excluded)
}

/// Collect every export declared by the registry's modules.
///
/// Modules are visited in registration order, members of a module in name
/// order. A symbol (after unwrapping decorators) generates exports only the
/// first time it is reached; later members bound to the same object are
/// skipped, whichever module they live in. Constants are emitted every time.
pub fn scan_exports(registry: &Registry, config: &GeneratorConfig) -> Vec<Export> {
    let mut exports = Vec::new();
    let mut visited_symbols = HashSet::new();

    for module in registry.modules() {
        if !is_scanned_module(module, config) {
            debug!("skipping module '{}'", module.name);
            continue;
        }

        for constant in module.constants() {
            for path in &constant.exports {
                let export = Export::new(
                    path,
                    &module.name,
                    ExportSource::Constant(constant.value.clone()),
                );
                debug!("constant {} = {} from '{}'", path, constant.value, module.name);
                exports.push(export);
            }
        }

        for (member, symbol) in module.sorted_members() {
            let base = registry.symbols().unwrap(symbol);
            let Some(paths) = registry.exports().get(base) else {
                continue;
            };
            if !visited_symbols.insert(base) {
                trace!(
                    "'{}.{}' refers to an already exported symbol",
                    module.name, member
                );
                continue;
            }

            for path in paths {
                debug!("export {} from '{}.{}'", path, module.name, member);
                exports.push(Export::new(
                    path,
                    &module.name,
                    ExportSource::Symbol(member.to_string()),
                ));
            }
        }
    }

    exports
}
