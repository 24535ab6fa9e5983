use std::fmt;
use std::io;
use std::path::PathBuf;

use gateroute_core::GridError;
use gateroute_route::RouteError;

/// Errors that can occur when loading or solving a scenario.
#[derive(Debug)]
pub enum MapError {
    /// A map file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A map's text is not a valid grid.
    Grid { map: String, source: GridError },
    /// A required marker symbol does not appear in a map.
    MissingMarker { map: String, marker: char },
    /// The number of dungeon maps differs from the layout's dungeon list.
    DungeonCount { maps: usize, layout: usize },
    /// The optimizer rejected the scenario.
    Route(RouteError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Grid { map, source } => write!(f, "map {map}: {source}"),
            Self::MissingMarker { map, marker } => {
                write!(f, "map {map}: marker \u{201c}{marker}\u{201d} not found")
            }
            Self::DungeonCount { maps, layout } => {
                write!(f, "{maps} dungeon maps for {layout} dungeons in the layout")
            }
            Self::Route(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
            Self::MissingMarker { .. } | Self::DungeonCount { .. } => None,
            Self::Route(e) => Some(e),
        }
    }
}

impl From<RouteError> for MapError {
    fn from(e: RouteError) -> Self {
        Self::Route(e)
    }
}
