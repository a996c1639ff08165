//! Symbol arena and identity handles.
//!
//! Every object that can be bound to a module member lives in a
//! [`SymbolArena`]. Identity is the [`SymbolId`] handle: two symbols with the
//! same registry key text or the same export paths are still different
//! objects unless they share a handle.

/// Opaque handle to a symbol in a [`SymbolArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Index of this symbol in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Capability of objects that transparently decorate another object.
pub trait Unwrappable {
    /// The object directly wrapped by this one, if any.
    fn wrapped(&self) -> Option<SymbolId>;
}

/// A function, class or other object registered in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Registry key, used for diagnostics only.
    pub key: String,
    wraps: Option<SymbolId>,
}

impl Symbol {
    /// Whether this symbol decorates another one.
    pub fn is_decorator(&self) -> bool {
        self.wraps.is_some()
    }
}

impl Unwrappable for Symbol {
    fn wrapped(&self) -> Option<SymbolId> {
        self.wraps
    }
}

/// Storage for all symbols of a registry.
#[derive(Debug, Clone, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a plain symbol.
    pub fn alloc(&mut self, key: impl Into<String>) -> SymbolId {
        self.push(Symbol {
            key: key.into(),
            wraps: None,
        })
    }

    /// Allocate a transparent decorator around `wraps`.
    pub fn alloc_decorator(&mut self, key: impl Into<String>, wraps: SymbolId) -> SymbolId {
        self.push(Symbol {
            key: key.into(),
            wraps: Some(wraps),
        })
    }

    fn push(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    /// Point an existing symbol at the object it decorates.
    ///
    /// Used by the loader, which may see a decorator before its target.
    pub(crate) fn set_wraps(&mut self, id: SymbolId, wraps: SymbolId) {
        self.symbols[id.index()].wraps = Some(wraps);
    }

    /// Look up a symbol by handle.
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// Follow the decoration chain of `id` down to the base object.
    ///
    /// Stops after visiting every symbol once, so a cyclic chain built
    /// through [`set_wraps`](Self::set_wraps) cannot loop forever.
    pub fn unwrap(&self, id: SymbolId) -> SymbolId {
        let mut current = id;
        for _ in 0..self.symbols.len() {
            match self.get(current).wrapped() {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Find the first symbol of a chain that is revisited, if the chain loops.
    pub fn find_cycle(&self, id: SymbolId) -> Option<SymbolId> {
        let mut seen = vec![false; self.symbols.len()];
        let mut current = id;
        loop {
            if seen[current.index()] {
                return Some(current);
            }
            seen[current.index()] = true;
            current = self.get(current).wrapped()?;
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
