use gateroute_core::Point;

use crate::pathrange::UNREACHABLE;

/// Outcome of a single shortest-path search.
///
/// `cost` is the sum of the costs of every cell entered along `path`; the
/// start cell is never counted. An unreachable goal yields an empty path and
/// a cost of [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path: Vec<Point>,
    pub cost: u32,
}

impl PathResult {
    /// The result of a search whose goal could not be reached.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: UNREACHABLE,
        }
    }

    /// Whether the goal was reached.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost != UNREACHABLE
    }

    /// Number of steps taken (cells entered).
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First cell of the path, if any.
    pub fn start(&self) -> Option<Point> {
        self.path.first().copied()
    }

    /// Last cell of the path, if any.
    pub fn goal(&self) -> Option<Point> {
        self.path.last().copied()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_result_round_trip() {
        let r = PathResult {
            path: vec![Point::new(3, 7), Point::new(3, 8)],
            cost: 42,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
