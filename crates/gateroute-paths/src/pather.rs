//! [`TerrainPather`]: walks a [`SymbolGrid`] according to a [`CostTable`].

use gateroute_core::{CostTable, Point, SymbolGrid};

use crate::traits::{AstarPather, Pather, WeightedPather};

/// Pather over a terrain grid.
///
/// Moves are 4-directional, expanded up, down, left, right. A cell may be
/// entered only if its symbol has a finite cost; entering it costs exactly
/// that amount. The estimate is the Manhattan distance to the goal.
#[derive(Debug, Clone, Copy)]
pub struct TerrainPather<'a> {
    grid: &'a SymbolGrid,
    costs: &'a CostTable,
}

impl<'a> TerrainPather<'a> {
    pub fn new(grid: &'a SymbolGrid, costs: &'a CostTable) -> Self {
        Self { grid, costs }
    }

    /// Cost of entering `p`; `None` if `p` is impassable or out of bounds.
    #[inline]
    pub fn entry_cost(&self, p: Point) -> Option<u32> {
        self.grid.at(p).and_then(|ch| self.costs.cost_of(ch))
    }
}

impl Pather for TerrainPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.grid
                .neighbors(p)
                .filter(|&n| self.entry_cost(n).is_some()),
        );
    }
}

impl WeightedPather for TerrainPather<'_> {
    fn cost(&self, _from: Point, to: Point) -> u32 {
        // Neighbors are pre-filtered, so `to` is always passable here.
        self.entry_cost(to).unwrap_or(crate::UNREACHABLE)
    }
}

impl AstarPather for TerrainPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> u32 {
        from.manhattan(to)
    }
}
