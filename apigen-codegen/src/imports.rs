//! Per-namespace import accumulation with conflict detection.

use std::collections::HashSet;

use apigen_registry::ConstantValue;
use indexmap::IndexMap;
use log::trace;

use crate::{
    Error, Result,
    format::{format_constant, format_import, full_export_name},
};

/// Builds a map from destination namespace to the statements it contains.
///
/// Statements keep insertion order within a namespace and namespaces keep
/// the order in which they first received a statement.
///
/// # Example
///
/// ```
/// use apigen_codegen::ModuleImportsBuilder;
///
/// let mut imports = ModuleImportsBuilder::new();
/// imports.add_import("tf", "pkg.impl_a", "Foo", "Foo").unwrap();
/// imports.add_import("tf", "pkg.impl_a", "Foo", "Foo").unwrap();
///
/// assert_eq!(imports.imports("tf"), &["from pkg.impl_a import Foo".to_string()]);
/// assert!(imports.add_import("tf", "pkg.impl_b", "Bar", "Foo").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleImportsBuilder {
    module_imports: IndexMap<String, Vec<String>>,
    seen_api_names: HashSet<String>,
}

impl ModuleImportsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `from <source_module> import <source_name> as <dest_name>` to
    /// `dest_namespace`.
    ///
    /// Adding an identical statement twice is a no-op. Adding a different
    /// statement for a public name that is already taken fails with
    /// [`Error::SymbolExposedTwice`].
    pub fn add_import(
        &mut self,
        dest_namespace: &str,
        source_module: &str,
        source_name: &str,
        dest_name: &str,
    ) -> Result<()> {
        let statement = format_import(source_module, source_name, dest_name);
        self.add_statement(dest_namespace, statement, dest_name)
    }

    /// Add a `<dest_name> = <value>` assignment to `dest_namespace`.
    ///
    /// Same duplicate and conflict rules as [`add_import`](Self::add_import).
    pub fn add_constant(
        &mut self,
        dest_namespace: &str,
        value: &ConstantValue,
        dest_name: &str,
    ) -> Result<()> {
        let statement = format_constant(dest_name, value);
        self.add_statement(dest_namespace, statement, dest_name)
    }

    fn add_statement(
        &mut self,
        dest_namespace: &str,
        statement: String,
        dest_name: &str,
    ) -> Result<()> {
        let existing = self.module_imports.get(dest_namespace);
        if existing.is_some_and(|statements| statements.contains(&statement)) {
            trace!("'{}' already in '{}'", statement, dest_namespace);
            return Ok(());
        }

        let full_api_name = full_export_name(dest_namespace, dest_name);
        if !self.seen_api_names.insert(full_api_name.clone()) {
            return Err(Error::SymbolExposedTwice {
                name: full_api_name,
            });
        }

        self.module_imports
            .entry(dest_namespace.to_string())
            .or_default()
            .push(statement);
        Ok(())
    }

    /// Statements of one namespace, empty if it has none.
    pub fn imports(&self, namespace: &str) -> &[String] {
        self.module_imports
            .get(namespace)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check if a namespace has any statements.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.module_imports.contains_key(namespace)
    }

    /// Namespaces in the order they first received a statement.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.module_imports.keys().map(String::as_str)
    }

    /// Iterate over namespaces and their statements.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.module_imports
            .iter()
            .map(|(ns, statements)| (ns.as_str(), statements.as_slice()))
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.module_imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.module_imports.is_empty()
    }

    /// Total number of statements across all namespaces.
    pub fn statement_count(&self) -> usize {
        self.module_imports.values().map(Vec::len).sum()
    }

    pub fn into_module_imports(self) -> IndexMap<String, Vec<String>> {
        self.module_imports
    }
}
