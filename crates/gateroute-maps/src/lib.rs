//! Loading gateroute scenarios from text maps.
//!
//! A scenario directory holds a world map and one map per dungeon. Each map
//! is plain text, one row per line. Marker symbols on the world map give the
//! start, the destination and one gate per dungeon; inside a dungeon they
//! give the entry and the target. See [`presets`] for the standard symbols.

mod error;
mod parse;
pub mod presets;
mod scenario;

pub use error::MapError;
pub use parse::{load_grid, locate, parse_grid};
pub use scenario::{DungeonLayout, Scenario, ScenarioLayout};
