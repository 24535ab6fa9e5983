//! Shortest paths over weighted terrain grids.
//!
//! - **A\*** shortest-path search ([`PathRange::astar_path`], [`find_path`])
//! - **Flood fill** reachability ([`PathRange::reachable`])
//!
//! All searches operate through [`PathRange`], which owns and reuses internal
//! caches so that repeated queries on one grid incur no allocations after
//! warm-up. [`TerrainPather`] adapts a [`SymbolGrid`] and its [`CostTable`]
//! to the pather traits.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | flood fill |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod error;
mod pather;
mod pathrange;
mod reach;
mod result;
mod traits;

use gateroute_core::{CostTable, Point, SymbolGrid};

pub use error::PathError;
pub use pather::TerrainPather;
pub use pathrange::{PathRange, UNREACHABLE};
pub use result::PathResult;
pub use traits::{AstarPather, Pather, WeightedPather};

/// Compute the minimum-cost path from `start` to `goal` on `grid`.
///
/// One-shot convenience over [`PathRange::astar_path`]; callers issuing many
/// queries on the same grid should keep a [`PathRange`] around instead.
pub fn find_path(
    grid: &SymbolGrid,
    costs: &CostTable,
    start: Point,
    goal: Point,
) -> Result<PathResult, PathError> {
    let mut pr = PathRange::new(grid.bounds());
    pr.astar_path(&TerrainPather::new(grid, costs), start, goal)
}

#[cfg(test)]
mod tests {
    use gateroute_core::Cost;

    use super::*;

    #[test]
    fn find_path_one_shot() {
        let grid = SymbolGrid::from_lines(["8001", "3301", "0007"]).unwrap();
        let costs = CostTable::new()
            .with('0', Cost::Step(10))
            .with('1', Cost::Step(20))
            .with('3', Cost::Step(150))
            .with('7', Cost::Step(0))
            .with('8', Cost::Step(0));
        let r = find_path(&grid, &costs, Point::new(0, 0), Point::new(3, 2)).unwrap();
        // Grass all the way; the sand column and the mountains cost more.
        assert_eq!(r.cost, 10 + 10 + 10 + 10 + 0);
        assert!(r.path.contains(&Point::new(2, 1)));
        assert_eq!(r.steps(), 5);
    }

    #[test]
    fn find_path_reports_invalid_goal() {
        let grid = SymbolGrid::from_lines(["00"]).unwrap();
        let costs = CostTable::new().with('0', Cost::Step(10));
        assert!(matches!(
            find_path(&grid, &costs, Point::new(0, 0), Point::new(0, 3)),
            Err(PathError::InvalidCoordinate { .. })
        ));
    }
}
