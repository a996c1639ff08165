//! The export registry: everything the scanner reads.

use crate::{ExportTable, Module, SymbolArena, SymbolId};

/// Registered modules, their symbols, and the symbols' export metadata.
///
/// This stands in for the set of loaded modules of the scanned library. All
/// modules must be registered before a scan starts; the scanner never
/// mutates the registry.
///
/// # Example
///
/// ```
/// use apigen_registry::{Module, Registry};
///
/// let mut registry = Registry::new();
/// let foo = registry.add_symbol("Foo");
/// registry.export(foo, ["tf.Foo"]);
/// registry.add_module(Module::new("tensorflow.python.foo").with_member("Foo", foo));
///
/// assert_eq!(registry.modules().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    symbols: SymbolArena,
    exports: ExportTable,
    modules: Vec<Module>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        symbols: SymbolArena,
        exports: ExportTable,
        modules: Vec<Module>,
    ) -> Self {
        Self {
            symbols,
            exports,
            modules,
        }
    }

    /// Register a plain object.
    pub fn add_symbol(&mut self, key: impl Into<String>) -> SymbolId {
        self.symbols.alloc(key)
    }

    /// Register a transparent decorator around an existing object.
    pub fn add_decorator(&mut self, key: impl Into<String>, wraps: SymbolId) -> SymbolId {
        self.symbols.alloc_decorator(key, wraps)
    }

    /// Declare public paths for an object.
    pub fn export<I, S>(&mut self, symbol: SymbolId, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exports.register(symbol, paths);
    }

    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub fn symbols(&self) -> &SymbolArena {
        &self.symbols
    }

    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }

    /// Modules in registration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }
}
