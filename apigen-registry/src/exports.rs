//! Side-table of declared export paths.

use indexmap::IndexMap;

use crate::SymbolId;

/// Maps a symbol handle to the dotted public paths it is exported under.
///
/// Populated through [`register`](Self::register) calls, either directly or by
/// the registry loader. Only base (unwrapped) symbols are expected here;
/// entries for decorators are never consulted by the scanner.
#[derive(Debug, Clone, Default)]
pub struct ExportTable {
    entries: IndexMap<SymbolId, Vec<String>>,
}

impl ExportTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare export paths for a symbol.
    ///
    /// Repeated registration appends to the symbol's list, skipping paths
    /// already present.
    pub fn register<I, S>(&mut self, symbol: SymbolId, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entries.entry(symbol).or_default();
        for path in paths {
            let path = path.into();
            if !entry.contains(&path) {
                entry.push(path);
            }
        }
    }

    /// Declared export paths of a symbol, if it has any.
    pub fn get(&self, symbol: SymbolId) -> Option<&[String]> {
        self.entries
            .get(&symbol)
            .map(Vec::as_slice)
            .filter(|paths| !paths.is_empty())
    }

    /// Whether the symbol carries export metadata.
    pub fn is_exported(&self, symbol: SymbolId) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
