use std::fmt;

use gateroute_core::{CostTable, Point, SymbolGrid};

/// Identifies the grid a point or path segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridId {
    World,
    /// Index into the sub-area list given to the optimizer.
    SubArea(usize),
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => write!(f, "world"),
            Self::SubArea(i) => write!(f, "sub-area {}", i + 1),
        }
    }
}

/// A self-contained grid entered from the world through a single gate.
///
/// Visiting a sub-area means walking from `entry` to `target` and back on
/// its own grid; `gate` is where that happens on the world grid.
#[derive(Debug, Clone)]
pub struct SubArea {
    pub name: String,
    /// Access point on the world grid.
    pub gate: Point,
    /// Point on this sub-area's grid matching the gate.
    pub entry: Point,
    /// Point on this sub-area's grid that must be reached.
    pub target: Point,
    pub grid: SymbolGrid,
    pub costs: CostTable,
}

impl SubArea {
    pub fn new(
        name: impl Into<String>,
        gate: Point,
        entry: Point,
        target: Point,
        grid: SymbolGrid,
        costs: CostTable,
    ) -> Self {
        Self {
            name: name.into(),
            gate,
            entry,
            target,
            grid,
            costs,
        }
    }
}
