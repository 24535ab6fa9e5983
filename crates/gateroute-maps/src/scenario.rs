use std::path::{Path, PathBuf};

use gateroute_core::{Cost, CostTable, Point, SymbolGrid};
use gateroute_route::{GridId, Itinerary, RouteOptimizer, SubArea, cost_at};

use crate::error::MapError;
use crate::parse::{load_grid, locate, parse_grid};
use crate::presets;

/// Where one dungeon's map lives and how it connects to the world.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonLayout {
    /// Map file, relative to the scenario directory.
    pub file: PathBuf,
    /// Gate marker on the world map.
    pub gate: char,
}

/// File names and marker symbols making up a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScenarioLayout {
    pub world: PathBuf,
    pub start: char,
    pub destination: char,
    pub entry: char,
    pub target: char,
    pub dungeons: Vec<DungeonLayout>,
}

impl ScenarioLayout {
    /// Standard layout with `n` dungeons: `dungeon1.txt`, `dungeon2.txt`…
    /// entered through gates `A`, `B`…
    pub fn with_dungeons(n: usize) -> Self {
        let dungeons = (0..n)
            .map(|i| DungeonLayout {
                file: PathBuf::from(format!("dungeon{}.txt", i + 1)),
                gate: gate_marker(i),
            })
            .collect();
        Self {
            world: PathBuf::from("world.txt"),
            start: presets::START,
            destination: presets::DESTINATION,
            entry: presets::ENTRY,
            target: presets::TARGET,
            dungeons,
        }
    }
}

impl Default for ScenarioLayout {
    fn default() -> Self {
        Self::with_dungeons(presets::GATES.len())
    }
}

fn gate_marker(i: usize) -> char {
    presets::GATES
        .get(i)
        .copied()
        .or_else(|| char::from_u32('A' as u32 + i as u32))
        .unwrap_or('?')
}

/// A world map, its dungeons and the journey's endpoints, ready to solve.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub world: SymbolGrid,
    pub world_costs: CostTable,
    pub start: Point,
    pub destination: Point,
    pub sub_areas: Vec<SubArea>,
}

impl Scenario {
    /// Build a scenario from map texts using the standard markers and cost
    /// tables. Dungeon `i` is entered through gate `A + i`.
    pub fn from_texts(world: &str, dungeons: &[&str]) -> Result<Self, MapError> {
        let layout = ScenarioLayout::with_dungeons(dungeons.len());
        let world = parse_grid(world).map_err(|source| MapError::Grid {
            map: "world".into(),
            source,
        })?;
        let dungeons = dungeons
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let name = format!("dungeon {}", i + 1);
                parse_grid(text)
                    .map(|g| (name.clone(), g))
                    .map_err(|source| MapError::Grid { map: name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_grids(world, dungeons, &layout)
    }

    /// Load every map named by `layout` from `dir`.
    pub fn load(dir: &Path, layout: &ScenarioLayout) -> Result<Self, MapError> {
        let world = load_grid(&dir.join(&layout.world))?;
        let mut dungeons = Vec::with_capacity(layout.dungeons.len());
        for d in &layout.dungeons {
            let grid = load_grid(&dir.join(&d.file))?;
            let name = d
                .file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| d.file.display().to_string());
            dungeons.push((name, grid));
        }
        Self::from_grids(world, dungeons, layout)
    }

    /// Resolve markers and assemble sub-areas. `dungeons` pairs with
    /// `layout.dungeons` by position.
    ///
    /// Every marker named by the layout costs nothing to enter, on top of
    /// the preset tables.
    pub fn from_grids(
        world: SymbolGrid,
        dungeons: Vec<(String, SymbolGrid)>,
        layout: &ScenarioLayout,
    ) -> Result<Self, MapError> {
        if dungeons.len() != layout.dungeons.len() {
            return Err(MapError::DungeonCount {
                maps: dungeons.len(),
                layout: layout.dungeons.len(),
            });
        }

        let start = locate(&world, layout.start, "world")?;
        let destination = locate(&world, layout.destination, "world")?;

        let mut world_costs = presets::world_costs();
        let gates = layout.dungeons.iter().map(|d| d.gate);
        for marker in [layout.start, layout.destination].into_iter().chain(gates) {
            world_costs.insert(marker, Cost::Step(0));
        }
        let dungeon_costs = presets::dungeon_costs()
            .with(layout.entry, Cost::Step(0))
            .with(layout.target, Cost::Step(0));

        let mut sub_areas = Vec::with_capacity(dungeons.len());
        for ((name, grid), d) in dungeons.into_iter().zip(&layout.dungeons) {
            let gate = locate(&world, d.gate, "world")?;
            let entry = locate(&grid, layout.entry, &name)?;
            let target = locate(&grid, layout.target, &name)?;
            log::debug!("{name}: gate {gate}, entry {entry}, target {target}");
            sub_areas.push(SubArea::new(
                name,
                gate,
                entry,
                target,
                grid,
                dungeon_costs.clone(),
            ));
        }

        Ok(Self {
            world,
            world_costs,
            start,
            destination,
            sub_areas,
        })
    }

    /// Grid identified by `id`, if any.
    pub fn grid(&self, id: GridId) -> Option<&SymbolGrid> {
        match id {
            GridId::World => Some(&self.world),
            GridId::SubArea(i) => self.sub_areas.get(i).map(|a| &a.grid),
        }
    }

    /// Find the cheapest itinerary through every dungeon.
    pub fn solve(&self) -> Result<Itinerary, MapError> {
        let optimizer = RouteOptimizer::new(&self.world, &self.world_costs);
        Ok(optimizer.optimize(self.start, &self.sub_areas, self.destination)?)
    }

    /// Symbols present in some grid but missing from its cost table. Those
    /// cells are impassable.
    pub fn unlisted_symbols(&self) -> Vec<(GridId, char)> {
        let mut out: Vec<_> = self
            .world_costs
            .unlisted_symbols(&self.world)
            .into_iter()
            .map(|c| (GridId::World, c))
            .collect();
        for (i, area) in self.sub_areas.iter().enumerate() {
            out.extend(
                area.costs
                    .unlisted_symbols(&area.grid)
                    .into_iter()
                    .map(|c| (GridId::SubArea(i), c)),
            );
        }
        out
    }

    /// Cost of entering `p` on grid `id`.
    pub fn cost_at(&self, id: GridId, p: Point) -> Option<u32> {
        cost_at(&self.world, &self.world_costs, &self.sub_areas, id, p)
    }

    /// Cumulative cost after each step of `itinerary`.
    pub fn running_costs(&self, itinerary: &Itinerary) -> Vec<u32> {
        itinerary.running_costs(&self.world, &self.world_costs, &self.sub_areas)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gateroute_route::RouteError;

    use super::*;

    const WORLD: &str = "\
800000
0000B0
A00000
000000
00C007
";

    const LINEAR: &str = "31114";
    const SHORT: &str = "314";
    const BENT: &str = "\
3110
0010
0014
";

    #[test]
    fn default_layout_names_three_dungeons() {
        let l = ScenarioLayout::default();
        assert_eq!(l.world, PathBuf::from("world.txt"));
        let gates: Vec<_> = l.dungeons.iter().map(|d| d.gate).collect();
        assert_eq!(gates, vec!['A', 'B', 'C']);
        assert_eq!(l.dungeons[2].file, PathBuf::from("dungeon3.txt"));
        assert_eq!(ScenarioLayout::with_dungeons(4).dungeons[3].gate, 'D');
    }

    #[test]
    fn markers_resolve() {
        let s = Scenario::from_texts(WORLD, &[LINEAR, SHORT, BENT]).unwrap();
        assert_eq!(s.start, Point::new(0, 0));
        assert_eq!(s.destination, Point::new(5, 4));
        assert_eq!(s.sub_areas.len(), 3);
        assert_eq!(s.sub_areas[0].gate, Point::new(0, 2));
        assert_eq!(s.sub_areas[1].gate, Point::new(4, 1));
        assert_eq!(s.sub_areas[2].gate, Point::new(2, 4));
        assert_eq!(s.sub_areas[0].target, Point::new(4, 0));
        assert_eq!(s.sub_areas[2].entry, Point::new(0, 0));
        assert_eq!(s.sub_areas[2].target, Point::new(3, 2));
        assert_eq!(s.grid(GridId::SubArea(1)).map(|g| g.width()), Some(3));
        assert!(s.grid(GridId::SubArea(3)).is_none());
    }

    #[test]
    fn missing_markers_are_reported() {
        let err = Scenario::from_texts("000\n007", &[]).unwrap_err();
        assert!(matches!(err, MapError::MissingMarker { marker: '8', .. }));

        let err = Scenario::from_texts(WORLD, &[LINEAR, "311"]).unwrap_err();
        match err {
            MapError::MissingMarker { map, marker } => {
                assert_eq!(map, "dungeon 2");
                assert_eq!(marker, '4');
            }
            e => panic!("unexpected error {e}"),
        }

        let err = Scenario::from_texts("8007", &[SHORT]).unwrap_err();
        assert!(matches!(err, MapError::MissingMarker { marker: 'A', .. }));
    }

    #[test]
    fn ragged_map_is_reported() {
        let err = Scenario::from_texts(WORLD, &["314\n31"]).unwrap_err();
        assert!(matches!(err, MapError::Grid { .. }));
        assert!(err.to_string().starts_with("map dungeon 1:"));
    }

    #[test]
    fn solve_visits_every_dungeon() {
        let s = Scenario::from_texts(WORLD, &[LINEAR, SHORT, BENT]).unwrap();
        let it = s.solve().unwrap();

        let mut order = it.order.clone();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(it.legs.len(), 3 * 3 + 1);

        // Round trips cross 3, 1 and 4 floor cells each way.
        let inside: u32 = it
            .legs
            .iter()
            .filter(|l| l.grid != GridId::World)
            .map(|l| l.cost)
            .sum();
        assert_eq!(inside, 60 + 20 + 80);

        let running = s.running_costs(&it);
        assert_eq!(running.len(), it.len());
        assert_eq!(running.last().copied(), Some(it.total_cost()));
    }

    #[test]
    fn fourth_gate_is_enterable() {
        let s = Scenario::from_texts("8A0B0C0D07", &[SHORT; 4]).unwrap();
        assert!(s.unlisted_symbols().is_empty());
        assert_eq!(s.cost_at(GridId::World, Point::new(7, 0)), Some(0));

        let it = s.solve().unwrap();
        assert_eq!(it.order, vec![0, 1, 2, 3]);
        // Four grass cells on the world row, 20 per dungeon round trip.
        assert_eq!(it.total_cost(), 40 + 4 * 20);
    }

    #[test]
    fn custom_markers_are_free() {
        let layout = ScenarioLayout {
            destination: 'Z',
            entry: 'E',
            target: 'T',
            ..ScenarioLayout::with_dungeons(1)
        };
        let world = parse_grid("8A0Z").unwrap();
        let cave = parse_grid("E1T").unwrap();
        let s = Scenario::from_grids(world, vec![("cave".into(), cave)], &layout).unwrap();
        assert!(s.unlisted_symbols().is_empty());
        assert_eq!(s.destination, Point::new(3, 0));

        let it = s.solve().unwrap();
        assert_eq!(it.total_cost(), 10 + 20);
    }

    #[test]
    fn dungeon_count_must_match_layout() {
        let world = parse_grid("8AB7").unwrap();
        let cave = parse_grid("314").unwrap();
        let err = Scenario::from_grids(
            world,
            vec![("cave".into(), cave)],
            &ScenarioLayout::with_dungeons(2),
        )
        .unwrap_err();
        assert!(matches!(err, MapError::DungeonCount { maps: 1, layout: 2 }));
        assert_eq!(err.to_string(), "1 dungeon maps for 2 dungeons in the layout");
    }

    #[test]
    fn sealed_dungeon_fails_to_solve() {
        let s = Scenario::from_texts(WORLD, &["304"]).unwrap();
        let err = s.solve().unwrap_err();
        assert!(matches!(err, MapError::Route(RouteError::NoRouteFound)));
    }

    #[test]
    fn unlisted_symbols_per_grid() {
        let s = Scenario::from_texts("8A0X\n0007", &["31Z4"]).unwrap();
        assert_eq!(
            s.unlisted_symbols(),
            vec![(GridId::World, 'X'), (GridId::SubArea(0), 'Z')]
        );
        assert_eq!(s.cost_at(GridId::World, Point::new(3, 0)), None);
        assert_eq!(s.cost_at(GridId::World, Point::new(2, 0)), Some(10));
    }

    #[test]
    fn load_reads_layout_from_directory() {
        let dir = std::env::temp_dir().join(format!("gateroute-maps-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("overworld.txt"), "8A\n07\n").unwrap();
        fs::write(dir.join("cave.txt"), "314\n").unwrap();

        let layout = ScenarioLayout {
            world: "overworld.txt".into(),
            dungeons: vec![DungeonLayout {
                file: "cave.txt".into(),
                gate: 'A',
            }],
            ..ScenarioLayout::default()
        };
        let s = Scenario::load(&dir, &layout).unwrap();
        assert_eq!(s.sub_areas.len(), 1);
        assert_eq!(s.sub_areas[0].name, "cave");

        // Markers are free, so only the cave floor counts.
        let it = s.solve().unwrap();
        assert_eq!(it.total_cost(), 20);

        let missing = Scenario::load(&dir, &ScenarioLayout::default()).unwrap_err();
        assert!(matches!(missing, MapError::Io { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
