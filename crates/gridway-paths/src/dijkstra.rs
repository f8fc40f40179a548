use gridway_core::{Heading, Point};

use crate::Router;
use crate::router::Route;
use crate::traits::StepPather;

impl Router {
    /// Compute a minimum-cost path from `from` (facing `heading`) to `to`
    /// using Dijkstra over (cell, heading) states.
    ///
    /// The goal is the cell: the search finishes on the cheapest goal step
    /// over all arrival headings. `from == to` yields cost 0 and the
    /// single-cell path `[from]`. Returns `None` if `to` is unreachable or
    /// either endpoint lies outside the range — an ordinary outcome, not a
    /// panic.
    ///
    /// # Panics
    ///
    /// If [`step_cost`](StepPather::step_cost) returns a negative value
    /// (contract violation; it would break the settled-on-pop invariant).
    pub fn shortest_path<P: StepPather>(
        &mut self,
        pather: &P,
        from: Point,
        heading: Heading,
        to: Point,
    ) -> Option<Route> {
        self.step_search(pather, from, heading, to, |_, _| 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, Step, WeightedPather};
    use gridway_core::Range;

    /// Fully open rectangle with unit move cost.
    struct Open(Range);

    impl Pather for Open {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_4() {
                if self.0.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Open {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    impl StepPather for Open {}

    /// Open rectangle where walking straight costs `step` and any heading
    /// change pays an extra `turn`.
    struct Turning {
        rng: Range,
        step: i32,
        turn: i32,
    }

    impl Pather for Turning {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_4() {
                if self.rng.contains(n) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Turning {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            self.step
        }
    }

    impl StepPather for Turning {
        fn step_cost(&self, from: Step, to: Step) -> i32 {
            if from.heading == to.heading {
                self.step
            } else {
                self.turn + self.step
            }
        }
    }

    #[test]
    fn open_grid_cost_is_manhattan() {
        let rng = Range::new(0, 0, 8, 8);
        let mut r = Router::new(rng);
        let p = Open(rng);
        for to in [Point::new(5, 0), Point::new(0, 6), Point::new(4, 7)] {
            let route = r.shortest_path(&p, Point::ZERO, Heading::East, to).unwrap();
            let dist = crate::manhattan(Point::ZERO, to);
            assert_eq!(route.cost, dist);
            assert_eq!(route.edges() as i32, dist);
        }
    }

    #[test]
    fn start_equals_goal() {
        let rng = Range::new(0, 0, 4, 4);
        let mut r = Router::new(rng);
        let p = Open(rng);
        let route = r
            .shortest_path(&p, Point::new(2, 2), Heading::North, Point::new(2, 2))
            .unwrap();
        assert_eq!(route.cost, 0);
        assert_eq!(route.cells, vec![Point::new(2, 2)]);
    }

    #[test]
    fn cost_monotone_in_manhattan_distance() {
        let rng = Range::new(0, 0, 9, 9);
        let mut r = Router::new(rng);
        let p = Open(rng);
        let mut last = 0;
        for i in 0..9 {
            let to = Point::new(i, i.min(8));
            let route = r.shortest_path(&p, Point::ZERO, Heading::East, to).unwrap();
            assert!(route.cost >= last);
            last = route.cost;
        }
    }

    #[test]
    fn repeated_queries_are_identical() {
        let rng = Range::new(0, 0, 6, 6);
        let mut r = Router::new(rng);
        let p = Turning {
            rng,
            step: 1,
            turn: 1000,
        };
        let a = r.shortest_path(&p, Point::ZERO, Heading::East, Point::new(5, 5));
        let b = r.shortest_path(&p, Point::ZERO, Heading::East, Point::new(5, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn each_avoided_turn_saves_exactly_the_penalty() {
        // 3×3 open grid, start top-left facing east, goal bottom-right:
        // the best route makes exactly one turn (4 steps + 1 turn).
        let rng = Range::new(0, 0, 3, 3);
        let mut r = Router::new(rng);
        let p = Turning {
            rng,
            step: 1,
            turn: 1000,
        };
        let route = r
            .shortest_path(&p, Point::ZERO, Heading::East, Point::new(2, 2))
            .unwrap();
        assert_eq!(route.cost, 4 + 1000);

        // Goal straight ahead: zero turns, exactly 1000 less than the
        // one-turn detour above per avoided turn.
        let straight = r
            .shortest_path(&p, Point::ZERO, Heading::East, Point::new(2, 0))
            .unwrap();
        assert_eq!(straight.cost, 2);
    }

    #[test]
    fn initial_heading_matters() {
        let rng = Range::new(0, 0, 5, 1);
        let mut r = Router::new(rng);
        let p = Turning {
            rng,
            step: 1,
            turn: 1000,
        };
        // Facing east along a corridor: no turn.
        let east = r
            .shortest_path(&p, Point::ZERO, Heading::East, Point::new(4, 0))
            .unwrap();
        assert_eq!(east.cost, 4);
        // Facing north: the first move east counts as a turn.
        let north = r
            .shortest_path(&p, Point::ZERO, Heading::North, Point::new(4, 0))
            .unwrap();
        assert_eq!(north.cost, 4 + 1000);
    }

    /// Grid with a wall column blocking everything but one gap.
    struct Walled {
        rng: Range,
        walls: Vec<Point>,
    }

    impl Pather for Walled {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in p.neighbors_4() {
                if self.rng.contains(n) && !self.walls.contains(&n) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Walled {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    impl StepPather for Walled {}

    #[test]
    fn walled_off_goal_returns_none() {
        let rng = Range::new(0, 0, 5, 5);
        let goal = Point::new(4, 4);
        // Surround the goal entirely.
        let walls = vec![Point::new(3, 4), Point::new(4, 3), Point::new(3, 3)];
        let mut r = Router::new(rng);
        let p = Walled { rng, walls };
        assert!(r.shortest_path(&p, Point::ZERO, Heading::East, goal).is_none());
        assert!(r.best_path_cells(&p, Point::ZERO, Heading::East, goal).is_empty());
    }
}
