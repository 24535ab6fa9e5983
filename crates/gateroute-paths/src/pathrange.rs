use gateroute_core::{Point, Range};

use crate::error::PathError;

// ---------------------------------------------------------------------------
// Internal node for A* priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
        }
    }
}

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first, then the smallest `g`, then the first cell in row-major order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u32,
    pub(crate) g: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "unreachable".
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid rectangle.
///
/// `PathRange` owns the per-cell search state (flat arrays indexed by
/// `y * width + x`) so that repeated queries on the same grid incur no
/// allocations after the first use.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    // flood-fill caches
    pub(crate) reach_seen: Vec<bool>,
    pub(crate) reach_stack: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            reach_seen: vec![false; len],
            reach_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Like [`idx`](Self::idx), but reports out-of-range points as errors.
    #[inline]
    pub(crate) fn checked_idx(&self, p: Point) -> Result<usize, PathError> {
        self.idx(p).ok_or(PathError::InvalidCoordinate {
            point: p,
            bounds: self.rng,
        })
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_round_trip() {
        let pr = PathRange::new(Range::new(0, 0, 7, 3));
        for p in pr.range().iter() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(7, 0)), None);
        assert_eq!(pr.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn checked_idx_reports_bounds() {
        let rng = Range::new(0, 0, 3, 3);
        let pr = PathRange::new(rng);
        assert_eq!(
            pr.checked_idx(Point::new(3, 1)),
            Err(PathError::InvalidCoordinate {
                point: Point::new(3, 1),
                bounds: rng,
            })
        );
    }

    #[test]
    fn heap_pops_lowest_f_then_g_then_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 1, f: 5, g: 3 });
        heap.push(NodeRef { idx: 9, f: 4, g: 4 });
        heap.push(NodeRef { idx: 2, f: 5, g: 2 });
        heap.push(NodeRef { idx: 0, f: 5, g: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![9, 0, 2, 1]);
    }
}
