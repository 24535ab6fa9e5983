use gateroute_core::{CostTable, Point, SymbolGrid};

use crate::subarea::{GridId, SubArea};

/// One shortest-path search result, tagged with the grid it runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub grid: GridId,
    pub path: Vec<Point>,
    pub cost: u32,
}

/// The chosen visiting order, its legs, and the total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Sub-area indices in visiting order.
    pub order: Vec<usize>,
    pub legs: Vec<Leg>,
    pub total_cost: u32,
}

impl Itinerary {
    #[inline]
    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// Every `(grid, point)` of the route in visiting order.
    ///
    /// Consecutive legs each start with their own first cell, so a cell
    /// where one leg ends and the next begins appears twice.
    pub fn steps(&self) -> impl Iterator<Item = (GridId, Point)> + '_ {
        self.legs
            .iter()
            .flat_map(|leg| leg.path.iter().map(move |&p| (leg.grid, p)))
    }

    /// Number of entries yielded by [`steps`](Self::steps).
    pub fn len(&self) -> usize {
        self.legs.iter().map(|l| l.path.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cumulative cost after each entry of [`steps`](Self::steps).
    ///
    /// Costs come from per-cell terrain lookups; the first cell of every leg
    /// adds nothing, so the last value equals [`total_cost`](Self::total_cost).
    pub fn running_costs(
        &self,
        world: &SymbolGrid,
        world_costs: &CostTable,
        sub_areas: &[SubArea],
    ) -> Vec<u32> {
        let mut total = 0u32;
        let mut out = Vec::with_capacity(self.len());
        for leg in &self.legs {
            for (i, &p) in leg.path.iter().enumerate() {
                if i > 0 {
                    let step = cost_at(world, world_costs, sub_areas, leg.grid, p).unwrap_or(0);
                    total = total.saturating_add(step);
                }
                out.push(total);
            }
        }
        out
    }
}

/// Cost of entering `p` on the grid identified by `grid`.
///
/// Returns `None` when the cell is impassable, `p` is out of bounds, or the
/// sub-area index is unknown.
pub fn cost_at(
    world: &SymbolGrid,
    world_costs: &CostTable,
    sub_areas: &[SubArea],
    grid: GridId,
    p: Point,
) -> Option<u32> {
    let (g, costs) = match grid {
        GridId::World => (world, world_costs),
        GridId::SubArea(i) => {
            let area = sub_areas.get(i)?;
            (&area.grid, &area.costs)
        }
    };
    g.at(p).and_then(|ch| costs.cost_of(ch))
}
