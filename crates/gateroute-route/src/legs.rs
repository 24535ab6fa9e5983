//! Memoized leg searches.
//!
//! Every visiting order is stitched from the same small set of legs: start
//! or gate to gate or destination on the world grid, and entry to target and
//! back inside each sub-area. Searches are deterministic, so each distinct
//! leg is searched once up front and reused by every order.

use gateroute_core::{CostTable, Point, SymbolGrid};
use gateroute_paths::{PathError, PathRange, PathResult, TerrainPather};

use crate::error::RouteError;
use crate::itinerary::{Itinerary, Leg};
use crate::subarea::{GridId, SubArea};

/// Precomputed shortest paths for every leg an itinerary can use.
#[derive(Debug, Clone)]
pub struct LegTable {
    /// `world[s][t]`: stop `s` (0 = start, `i + 1` = gate `i`) to target `t`
    /// (`i` = gate `i`, `n` = destination).
    world: Vec<Vec<PathResult>>,
    /// Entry to target, per sub-area.
    inbound: Vec<PathResult>,
    /// Target back to entry, per sub-area.
    outbound: Vec<PathResult>,
}

impl LegTable {
    /// Search every leg. Fails if any point lies outside its grid.
    pub fn build(
        world: &SymbolGrid,
        world_costs: &CostTable,
        sub_areas: &[SubArea],
        start: Point,
        destination: Point,
    ) -> Result<Self, RouteError> {
        let n = sub_areas.len();
        check(world, GridId::World, start)?;
        check(world, GridId::World, destination)?;
        for (i, area) in sub_areas.iter().enumerate() {
            check(world, GridId::World, area.gate)?;
            check(&area.grid, GridId::SubArea(i), area.entry)?;
            check(&area.grid, GridId::SubArea(i), area.target)?;
        }

        let pather = TerrainPather::new(world, world_costs);
        let mut pr = PathRange::new(world.bounds());

        let stops: Vec<Point> = std::iter::once(start)
            .chain(sub_areas.iter().map(|a| a.gate))
            .collect();
        let targets: Vec<Point> = sub_areas
            .iter()
            .map(|a| a.gate)
            .chain(std::iter::once(destination))
            .collect();

        let mut world_legs = Vec::with_capacity(n + 1);
        for &from in &stops {
            let mut row = Vec::with_capacity(n + 1);
            for &to in &targets {
                row.push(search(&mut pr, &pather, GridId::World, from, to)?);
            }
            world_legs.push(row);
        }

        let mut inbound = Vec::with_capacity(n);
        let mut outbound = Vec::with_capacity(n);
        for (i, area) in sub_areas.iter().enumerate() {
            let id = GridId::SubArea(i);
            let pather = TerrainPather::new(&area.grid, &area.costs);
            let mut pr = PathRange::new(area.grid.bounds());
            inbound.push(search(&mut pr, &pather, id, area.entry, area.target)?);
            outbound.push(search(&mut pr, &pather, id, area.target, area.entry)?);
        }

        Ok(Self {
            world: world_legs,
            inbound,
            outbound,
        })
    }

    /// Number of sub-areas covered by the table.
    #[inline]
    pub fn sub_area_count(&self) -> usize {
        self.inbound.len()
    }

    /// Total cost of visiting the sub-areas in `order`, then reaching the
    /// destination. [`UNREACHABLE`](gateroute_paths::UNREACHABLE) if any
    /// leg is.
    pub fn order_cost(&self, order: &[usize]) -> u32 {
        let mut total = 0u32;
        let mut stop = 0;
        for &a in order {
            total = total
                .saturating_add(self.world[stop][a].cost)
                .saturating_add(self.inbound[a].cost)
                .saturating_add(self.outbound[a].cost);
            stop = a + 1;
        }
        total.saturating_add(self.world[stop][self.sub_area_count()].cost)
    }

    /// The legs of `order` in travel sequence.
    pub fn legs(&self, order: &[usize]) -> Vec<Leg> {
        let mut legs = Vec::with_capacity(order.len() * 3 + 1);
        let mut stop = 0;
        for &a in order {
            legs.push(leg(GridId::World, &self.world[stop][a]));
            legs.push(leg(GridId::SubArea(a), &self.inbound[a]));
            legs.push(leg(GridId::SubArea(a), &self.outbound[a]));
            stop = a + 1;
        }
        legs.push(leg(GridId::World, &self.world[stop][self.sub_area_count()]));
        legs
    }

    /// Assemble the full itinerary for `order`.
    pub fn itinerary(&self, order: &[usize]) -> Itinerary {
        Itinerary {
            order: order.to_vec(),
            legs: self.legs(order),
            total_cost: self.order_cost(order),
        }
    }
}

fn leg(grid: GridId, r: &PathResult) -> Leg {
    Leg {
        grid,
        path: r.path.clone(),
        cost: r.cost,
    }
}

fn check(grid: &SymbolGrid, id: GridId, p: Point) -> Result<(), RouteError> {
    if grid.contains(p) {
        Ok(())
    } else {
        Err(RouteError::InvalidCoordinate { grid: id, point: p })
    }
}

fn search(
    pr: &mut PathRange,
    pather: &TerrainPather<'_>,
    id: GridId,
    from: Point,
    to: Point,
) -> Result<PathResult, RouteError> {
    let r = pr.astar_path(pather, from, to).map_err(|e| match e {
        PathError::InvalidCoordinate { point, .. } => RouteError::InvalidCoordinate { grid: id, point },
    })?;
    if r.is_reachable() {
        log::debug!("leg {id} {from} -> {to}: cost {}", r.cost);
    } else {
        log::debug!("leg {id} {from} -> {to}: unreachable");
    }
    Ok(r)
}
