use std::collections::BinaryHeap;

use gridway_core::{Heading, Point};

use crate::Router;
use crate::router::{HEADINGS, NodeRef, Route, UNREACHABLE};
use crate::traits::{AstarPather, Step, StepPather};

impl Router {
    /// Compute a minimum-cost path from `from` (facing `heading`) to `to`
    /// using A*.
    ///
    /// The goal is the cell: the search finishes on the cheapest goal step
    /// over all arrival headings. Returns `None` if `to` is unreachable or
    /// either endpoint lies outside the range.
    ///
    /// Correct only for admissible estimates; with
    /// [`estimate`](AstarPather::estimate) identically zero this is plain
    /// Dijkstra (see [`shortest_path`](Router::shortest_path)).
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        heading: Heading,
        to: Point,
    ) -> Option<Route> {
        self.step_search(pather, from, heading, to, |a, b| pather.estimate(a, b))
    }

    /// Shared engine for the point-to-point searches: A* over (cell,
    /// heading) states, Dijkstra when `estimate` is identically zero.
    ///
    /// A state is settled the first time it is popped — valid because
    /// step costs are non-negative (asserted). Stale heap entries are
    /// skipped on pop instead of being removed eagerly.
    pub(crate) fn step_search<P: StepPather>(
        &mut self,
        pather: &P,
        from: Point,
        heading: Heading,
        to: Point,
        estimate: impl Fn(Point, Point) -> i32,
    ) -> Option<Route> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(Route {
                cost: 0,
                cells: vec![from],
            });
        }

        // Bump generation to lazily invalidate all nodes.
        self.step_generation = self.step_generation.wrapping_add(1);
        let cur_gen = self.step_generation;

        // Initialise the start step.
        let start_sidx = self.sidx(start_idx, heading);
        {
            let node = &mut self.step_nodes[start_sidx];
            node.g = 0;
            node.f = estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_sidx,
            f: self.step_nodes[start_sidx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let goal_sidx = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let si = current.idx;

            // Skip stale entries.
            if self.step_nodes[si].generation != cur_gen || !self.step_nodes[si].open {
                continue;
            }

            let ci = si / HEADINGS;
            if ci == goal_idx {
                break 'search Some(si);
            }

            self.step_nodes[si].open = false;
            let current_g = self.step_nodes[si].g;
            let cur_step = self.step(si);

            nbuf.clear();
            pather.neighbors(cur_step.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // Step-aware moves are unit cardinal.
                let Some(nh) = Heading::from_delta(np - cur_step.pos) else {
                    continue;
                };
                let next_step = Step::new(np, nh);
                let cost = pather.step_cost(cur_step, next_step);
                assert!(
                    cost >= 0,
                    "negative step cost {cost} from {} to {}",
                    cur_step.pos,
                    np
                );
                let tentative_g = current_g + cost;
                let nsi = self.sidx(ni, nh);

                let n = &mut self.step_nodes[nsi];
                if n.generation == cur_gen {
                    // Already reached this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g + estimate(np, to);
                n.parent = si;
                n.open = true;

                open.push(NodeRef { idx: nsi, f: n.f });
            }
        };

        self.nbuf = nbuf;

        let goal_sidx = goal_sidx?;

        // Reconstruct by walking parent links backward, then reversing.
        let cost = self.step_nodes[goal_sidx].g;
        let mut cells = Vec::new();
        let mut si = goal_sidx;
        while si != usize::MAX {
            cells.push(self.point(si / HEADINGS));
            si = self.step_nodes[si].parent;
        }
        cells.reverse();
        Some(Route { cost, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Range;

    struct Open(Range);

    impl crate::Pather for Open {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_4() {
                if self.0.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    impl crate::WeightedPather for Open {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    impl StepPather for Open {}

    impl AstarPather for Open {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            crate::manhattan(from, to)
        }
    }

    #[test]
    fn astar_matches_manhattan_on_open_grid() {
        let rng = Range::new(0, 0, 10, 10);
        let mut r = Router::new(rng);
        let p = Open(rng);
        let route = r
            .astar_path(&p, Point::ZERO, Heading::East, Point::new(7, 4))
            .unwrap();
        assert_eq!(route.cost, 11);
        assert_eq!(route.edges(), 11);
        assert_eq!(route.cells[0], Point::ZERO);
        assert_eq!(*route.cells.last().unwrap(), Point::new(7, 4));
    }

    #[test]
    fn astar_agrees_with_dijkstra() {
        let rng = Range::new(0, 0, 12, 9);
        let mut r = Router::new(rng);
        let p = Open(rng);
        let from = Point::new(1, 1);
        let to = Point::new(10, 7);
        let a = r.astar_path(&p, from, Heading::North, to).unwrap();
        let d = r.shortest_path(&p, from, Heading::North, to).unwrap();
        assert_eq!(a.cost, d.cost);
    }

    #[test]
    fn astar_out_of_range_endpoint() {
        let rng = Range::new(0, 0, 5, 5);
        let mut r = Router::new(rng);
        let p = Open(rng);
        assert!(
            r.astar_path(&p, Point::ZERO, Heading::East, Point::new(9, 9))
                .is_none()
        );
    }

    struct BadCost(Range);

    impl crate::Pather for BadCost {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_4() {
                if self.0.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    impl crate::WeightedPather for BadCost {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            -1
        }
    }

    impl StepPather for BadCost {}

    #[test]
    #[should_panic(expected = "negative step cost")]
    fn negative_cost_is_rejected() {
        let rng = Range::new(0, 0, 3, 3);
        let mut r = Router::new(rng);
        let p = BadCost(rng);
        let _ = r.shortest_path(&p, Point::ZERO, Heading::East, Point::new(2, 2));
    }
}
