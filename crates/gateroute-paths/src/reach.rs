//! Reachability by flood fill.

use gateroute_core::Point;

use crate::PathRange;
use crate::error::PathError;
use crate::traits::Pather;

impl PathRange {
    /// Flood-fill from `from` and return every cell reachable from it,
    /// `from` included, in discovery order.
    ///
    /// Two cells are connected if there is a chain of neighbours (as defined
    /// by `pather`) between them.
    pub fn reachable<P: Pather>(&mut self, pather: &P, from: Point) -> Result<Vec<Point>, PathError> {
        let si = self.checked_idx(from)?;

        for v in self.reach_seen.iter_mut() {
            *v = false;
        }

        let mut result = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        self.reach_stack.clear();
        self.reach_stack.push(si);
        self.reach_seen[si] = true;
        result.push(from);

        while let Some(ci) = self.reach_stack.pop() {
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if let Some(ni) = self.idx(np) {
                    if !self.reach_seen[ni] {
                        self.reach_seen[ni] = true;
                        self.reach_stack.push(ni);
                        result.push(np);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        Ok(result)
    }

    /// Whether `p` was reached by the last [`reachable`](Self::reachable)
    /// call. Points outside the range are never reached.
    pub fn reached(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.reach_seen[i])
    }
}
