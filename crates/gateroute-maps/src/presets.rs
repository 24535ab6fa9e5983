//! Terrain symbols and cost tables for the standard overworld and dungeons.

use gateroute_core::{Cost, CostTable};

pub const GRASS: char = '0';
pub const SAND: char = '1';
pub const FOREST: char = '2';
pub const MOUNTAIN: char = '3';
pub const WATER: char = '4';
pub const SWORD: char = '5';
pub const DESTINATION: char = '7';
pub const START: char = '8';

pub const WALL: char = '0';
pub const FLOOR: char = '1';
pub const ENTRY: char = '3';
pub const TARGET: char = '4';

/// Default gate markers, one per dungeon in order.
pub const GATES: [char; 3] = ['A', 'B', 'C'];

/// Costs on the overworld. Markers (gates, start, destination, sword) are
/// free to enter.
pub fn world_costs() -> CostTable {
    let mut t = CostTable::new()
        .with(GRASS, Cost::Step(10))
        .with(SAND, Cost::Step(20))
        .with(FOREST, Cost::Step(100))
        .with(MOUNTAIN, Cost::Step(150))
        .with(WATER, Cost::Step(180))
        .with(SWORD, Cost::Step(0))
        .with(DESTINATION, Cost::Step(0))
        .with(START, Cost::Step(0));
    for g in GATES {
        t.insert(g, Cost::Step(0));
    }
    t
}

/// Costs inside a dungeon.
pub fn dungeon_costs() -> CostTable {
    CostTable::new()
        .with(WALL, Cost::Impassable)
        .with(FLOOR, Cost::Step(10))
        .with(ENTRY, Cost::Step(0))
        .with(TARGET, Cost::Step(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_terrain_costs() {
        let t = world_costs();
        assert_eq!(t.cost_of(GRASS), Some(10));
        assert_eq!(t.cost_of(SAND), Some(20));
        assert_eq!(t.cost_of(FOREST), Some(100));
        assert_eq!(t.cost_of(MOUNTAIN), Some(150));
        assert_eq!(t.cost_of(WATER), Some(180));
        for marker in [SWORD, DESTINATION, START, 'A', 'B', 'C'] {
            assert_eq!(t.cost_of(marker), Some(0), "{marker}");
        }
        assert_eq!(t.cost_of('D'), None);
    }

    #[test]
    fn dungeon_walls_block() {
        let t = dungeon_costs();
        assert_eq!(t.cost_of(WALL), None);
        assert!(t.is_listed(WALL));
        assert_eq!(t.cost_of(FLOOR), Some(10));
        assert_eq!(t.cost_of(ENTRY), Some(0));
        assert_eq!(t.cost_of(TARGET), Some(0));
    }
}
