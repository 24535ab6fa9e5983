use std::collections::BinaryHeap;

use gateroute_core::Point;

use crate::PathRange;
use crate::error::PathError;
use crate::pathrange::{NodeRef, UNREACHABLE};
use crate::result::PathResult;
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) and its cost, or an
    /// unreachable [`PathResult`] if the frontier empties first. Points
    /// outside the range are reported as [`PathError::InvalidCoordinate`].
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<PathResult, PathError> {
        let start_idx = self.checked_idx(from)?;
        let goal_idx = self.checked_idx(to)?;

        if start_idx == goal_idx {
            return Ok(PathResult {
                path: vec![from],
                cost: 0,
            });
        }

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: pather.estimate(from, to),
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries: a cheaper route to this cell was pushed later.
            if current.g != self.astar_nodes[ci].g {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            expanded += 1;
            let current_g = current.g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(pather.cost(current_point, np));

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g.saturating_add(pather.estimate(np, to)),
                    g: tentative_g,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("astar {from} -> {to}: unreachable after {expanded} expansions");
            return Ok(PathResult::unreachable());
        }

        // Reconstruct path.
        let cost = self.astar_nodes[goal_idx].g;
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        log::debug!(
            "astar {from} -> {to}: cost {cost}, {} steps, {expanded} expansions",
            path.len() - 1
        );
        debug_assert_ne!(cost, UNREACHABLE);
        Ok(PathResult { path, cost })
    }
}
