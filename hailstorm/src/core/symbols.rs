//! Named unknowns of a polynomial system.

use thiserror::Error;

/// Handle to an unknown; doubles as its exponent-vector position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(usize);

impl Symbol {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {0:?} is already declared")]
pub struct DuplicateSymbol(pub String);

/// Ordered, collision-free set of unknown names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbols {
    names: Vec<String>,
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>) -> Result<Symbol, DuplicateSymbol> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(DuplicateSymbol(name));
        }
        self.names.push(name);
        Ok(Symbol(self.names.len() - 1))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, symbol: Symbol) -> &str {
        &self.names[symbol.0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.names.len()).map(Symbol)
    }
}
