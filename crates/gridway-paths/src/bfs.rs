use gridway_core::Point;

use crate::Router;
use crate::router::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl Router {
    /// Compute a breadth-first distance map from the given source cells.
    ///
    /// Every source starts at distance 0 (duplicates seed once); each move
    /// costs 1 regardless of heading. Cells at distance `max_dist` are
    /// reached but not expanded, so nothing beyond the bound enters the
    /// map; `i32::MAX` means unbounded. The returned slice lists every
    /// reached cell in non-decreasing distance order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        self.bfs_results.clear();
        for d in self.bfs_map.iter_mut() {
            *d = UNREACHABLE;
        }

        // The frontier only ever grows during a search, so a plain Vec
        // with a read cursor does the job of a ring buffer.
        let mut queue = std::mem::take(&mut self.bfs_queue);
        queue.clear();
        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.bfs_map[si] == UNREACHABLE {
                self.bfs_map[si] = 0;
                queue.push(si);
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut head = 0;
        while head < queue.len() {
            let ci = queue[head];
            head += 1;
            let cp = self.point(ci);
            let dist = self.bfs_map[ci];
            self.bfs_results.push(PathNode { pos: cp, cost: dist });
            if dist == max_dist {
                continue;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = dist + 1;
                queue.push(ni);
            }
        }
        self.nbuf = nbuf;
        self.bfs_queue = queue;

        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}
