use std::fmt;

use gateroute_core::{Point, Range};

/// Errors reported by path searches.
///
/// An unreachable goal is not an error; it is reported through
/// [`PathResult::is_reachable`](crate::PathResult::is_reachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A start or goal point lies outside the searched grid.
    InvalidCoordinate { point: Point, bounds: Range },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { point, bounds } => {
                write!(f, "path: point {point} is outside grid bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for PathError {}
