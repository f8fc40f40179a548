//! All-optimal-path cell collection.
//!
//! Reconstructing "every cell on any minimum-cost path" needs set-valued
//! predecessors: keeping a single parent per state systematically
//! undercounts whenever the optimal-cost graph branches.

use std::collections::BinaryHeap;

use gridway_core::{Heading, Point};

use crate::Router;
use crate::router::{HEADINGS, NodeRef, UNREACHABLE};
use crate::traits::{Step, StepPather};

impl Router {
    /// Collect every cell that lies on at least one minimum-cost path from
    /// `from` (facing `heading`) to `to`.
    ///
    /// Runs the same forward Dijkstra as
    /// [`shortest_path`](Router::shortest_path), but a relaxation to a cost
    /// *equal to* a state's known best adds the predecessor to that state's
    /// predecessor set instead of discarding it. A backward traversal over
    /// the predecessor graph, seeded from every goal step at the minimal
    /// cost, then marks the cells of all optimal paths without ever
    /// materializing individual paths.
    ///
    /// The result is a superset of the cells of any single `shortest_path`
    /// answer on the same inputs. Unreachable or out-of-range goals yield
    /// an empty vector. Cells are returned in discovery order.
    ///
    /// # Panics
    ///
    /// If [`step_cost`](StepPather::step_cost) returns a negative value.
    pub fn best_path_cells<P: StepPather>(
        &mut self,
        pather: &P,
        from: Point,
        heading: Heading,
        to: Point,
    ) -> Vec<Point> {
        let Some(start_idx) = self.idx(from) else {
            return Vec::new();
        };
        let Some(goal_idx) = self.idx(to) else {
            return Vec::new();
        };

        if start_idx == goal_idx {
            return vec![from];
        }

        self.multi_generation = self.multi_generation.wrapping_add(1);
        let cur_gen = self.multi_generation;

        let start_sidx = self.sidx(start_idx, heading);
        {
            let node = &mut self.multi_nodes[start_sidx];
            node.g = 0;
            node.generation = cur_gen;
            node.open = true;
            node.parents.clear();
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_sidx,
            f: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut goal_cost: Option<i32> = None;

        while let Some(current) = open.pop() {
            let si = current.idx;

            if self.multi_nodes[si].generation != cur_gen || !self.multi_nodes[si].open {
                continue;
            }

            let current_g = self.multi_nodes[si].g;

            // Once the frontier passes the goal cost, no remaining
            // expansion can relax a state at or below it.
            if let Some(gc) = goal_cost {
                if current_g > gc {
                    break;
                }
            }

            self.multi_nodes[si].open = false;

            let ci = si / HEADINGS;
            if ci == goal_idx {
                // Equal-cost goal steps keep popping until the cutoff.
                goal_cost.get_or_insert(current_g);
                continue;
            }

            let cur_step = self.step(si);

            nbuf.clear();
            pather.neighbors(cur_step.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
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

                let n = &mut self.multi_nodes[nsi];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.parents.clear();
                }

                if tentative_g < n.g {
                    // Strictly better: this predecessor supersedes the set.
                    n.g = tentative_g;
                    n.parents.clear();
                    n.parents.push(si);
                    n.open = true;
                    open.push(NodeRef {
                        idx: nsi,
                        f: tentative_g,
                    });
                } else if tentative_g == n.g {
                    // Equally good: another optimal way in.
                    n.parents.push(si);
                }
            }
        }

        self.nbuf = nbuf;

        let Some(goal_cost) = goal_cost else {
            return Vec::new();
        };

        // Backward pass: BFS the predecessor graph from every minimal goal
        // step, marking visited steps and collecting distinct cells.
        let mut step_seen = std::mem::take(&mut self.step_seen);
        let mut cell_seen = std::mem::take(&mut self.cell_seen);
        let mut stack = std::mem::take(&mut self.back_stack);
        for v in step_seen.iter_mut() {
            *v = false;
        }
        for v in cell_seen.iter_mut() {
            *v = false;
        }
        stack.clear();

        for h in Heading::ALL {
            let si = self.sidx(goal_idx, h);
            let n = &self.multi_nodes[si];
            if n.generation == cur_gen && n.g == goal_cost {
                step_seen[si] = true;
                stack.push(si);
            }
        }

        let mut cells = Vec::new();
        while let Some(si) = stack.pop() {
            let ci = si / HEADINGS;
            if !cell_seen[ci] {
                cell_seen[ci] = true;
                cells.push(self.point(ci));
            }
            for &pi in &self.multi_nodes[si].parents {
                if !step_seen[pi] {
                    step_seen[pi] = true;
                    stack.push(pi);
                }
            }
        }

        self.step_seen = step_seen;
        self.cell_seen = cell_seen;
        self.back_stack = stack;
        cells
    }
}
