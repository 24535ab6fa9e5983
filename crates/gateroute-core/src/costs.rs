//! Terrain cost tables.

use std::collections::{BTreeMap, BTreeSet};

use crate::terrain::SymbolGrid;

/// Traversal cost of a single terrain symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cost {
    /// Entering a cell with this symbol costs the given amount.
    Step(u32),
    /// Cells with this symbol can never be entered.
    Impassable,
}

/// Mapping from terrain symbol to the cost of entering a cell holding it.
///
/// Symbols without an entry are impassable. Use
/// [`unlisted_symbols`](Self::unlisted_symbols) to find grid symbols that
/// fall back to that default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTable {
    entries: BTreeMap<char, Cost>,
}

impl CostTable {
    /// Create an empty table (every symbol impassable).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the cost of `symbol` (builder).
    pub fn with(mut self, symbol: char, cost: Cost) -> Self {
        self.insert(symbol, cost);
        self
    }

    /// Add or replace the cost of `symbol`.
    pub fn insert(&mut self, symbol: char, cost: Cost) {
        self.entries.insert(symbol, cost);
    }

    /// Cost of entering a cell holding `symbol`; `None` means impassable.
    #[inline]
    pub fn cost_of(&self, symbol: char) -> Option<u32> {
        match self.entries.get(&symbol) {
            Some(Cost::Step(c)) => Some(*c),
            Some(Cost::Impassable) | None => None,
        }
    }

    /// Whether `symbol` has an explicit entry (passable or not).
    #[inline]
    pub fn is_listed(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    /// Symbols present in `grid` that have no entry in this table, sorted.
    pub fn unlisted_symbols(&self, grid: &SymbolGrid) -> Vec<char> {
        grid.iter()
            .map(|(_, ch)| ch)
            .filter(|ch| !self.is_listed(*ch))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cost_table_round_trip() {
        let t = CostTable::new()
            .with('0', Cost::Step(10))
            .with('#', Cost::Impassable);
        let json = serde_json::to_string(&t).unwrap();
        let back: CostTable = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
