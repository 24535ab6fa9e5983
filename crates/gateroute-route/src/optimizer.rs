use gateroute_core::{CostTable, Point, SymbolGrid};
use gateroute_paths::UNREACHABLE;

use crate::error::RouteError;
use crate::itinerary::Itinerary;
use crate::legs::LegTable;
use crate::permutations::Permutations;
use crate::subarea::SubArea;

/// Finds the cheapest order in which to visit every sub-area of a world.
///
/// All `n!` visiting orders are evaluated; the sub-area count is expected to
/// stay small (a handful).
#[derive(Debug, Clone, Copy)]
pub struct RouteOptimizer<'a> {
    world: &'a SymbolGrid,
    world_costs: &'a CostTable,
}

impl<'a> RouteOptimizer<'a> {
    pub fn new(world: &'a SymbolGrid, world_costs: &'a CostTable) -> Self {
        Self { world, world_costs }
    }

    /// Compute the minimum-cost itinerary from `start` through every
    /// sub-area (gate, entry to target and back, gate) to `destination`.
    ///
    /// Among equally cheap orders the lexicographically smallest wins.
    pub fn optimize(
        &self,
        start: Point,
        sub_areas: &[SubArea],
        destination: Point,
    ) -> Result<Itinerary, RouteError> {
        let table = LegTable::build(self.world, self.world_costs, sub_areas, start, destination)?;
        let (cost, order) = cheapest_order(&table).ok_or(RouteError::NoRouteFound)?;
        if cost == UNREACHABLE {
            log::info!("no visiting order of {} sub-areas is reachable", sub_areas.len());
            return Err(RouteError::NoRouteFound);
        }

        let itinerary = table.itinerary(&order);
        log::info!(
            "best order {:?}: cost {}, {} steps",
            order,
            itinerary.total_cost,
            itinerary.len()
        );
        Ok(itinerary)
    }
}

/// Compute the minimum-cost itinerary; see [`RouteOptimizer::optimize`].
pub fn find_optimal_itinerary(
    start: Point,
    sub_areas: &[SubArea],
    world: &SymbolGrid,
    world_costs: &CostTable,
    destination: Point,
) -> Result<Itinerary, RouteError> {
    RouteOptimizer::new(world, world_costs).optimize(start, sub_areas, destination)
}

#[cfg(not(feature = "parallel"))]
fn cheapest_order(table: &LegTable) -> Option<(u32, Vec<usize>)> {
    Permutations::new(table.sub_area_count())
        .map(|order| {
            let cost = table.order_cost(&order);
            log::debug!("order {order:?}: cost {cost}");
            (cost, order)
        })
        .min()
}

#[cfg(feature = "parallel")]
fn cheapest_order(table: &LegTable) -> Option<(u32, Vec<usize>)> {
    use rayon::prelude::*;

    // Keyed by (cost, order), so the reduction picks the same winner as the
    // sequential scan regardless of scheduling.
    Permutations::new(table.sub_area_count())
        .par_bridge()
        .map(|order| {
            let cost = table.order_cost(&order);
            log::debug!("order {order:?}: cost {cost}");
            (cost, order)
        })
        .min()
}
