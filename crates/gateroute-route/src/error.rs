use std::fmt;

use gateroute_core::Point;

use crate::subarea::GridId;

/// Errors that can occur when optimizing an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// A start, destination, gate, entry or target point lies outside its
    /// grid.
    InvalidCoordinate { grid: GridId, point: Point },
    /// Every visiting order contains at least one unreachable leg.
    NoRouteFound,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { grid, point } => {
                write!(f, "route: point {point} is outside the {grid} grid")
            }
            Self::NoRouteFound => write!(f, "route: no visiting order reaches every target"),
        }
    }
}

impl std::error::Error for RouteError {}
