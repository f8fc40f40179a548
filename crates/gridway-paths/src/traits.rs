use gridway_core::{Heading, Point};

/// The unit of exploration for direction-aware searches: a cell plus the
/// heading the search arrived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub pos: Point,
    pub heading: Heading,
}

impl Step {
    /// Create a new step.
    #[inline]
    pub const fn new(pos: Point, heading: Heading) -> Self {
        Self { pos, heading }
    }
}

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append traversable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling. Direction-aware searches only consider
    /// neighbors at a unit cardinal offset from `p`.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Pather whose edge cost may depend on the direction of travel.
///
/// The default implementation ignores headings and charges the plain cell
/// cost, so direction-free pathers need no extra code beyond
/// `impl StepPather for ... {}`.
pub trait StepPather: WeightedPather {
    /// Cost of the transition from `from` to the adjacent step `to`,
    /// where `to.heading` is the direction of the move. Must be >= 0;
    /// the searches assert this.
    fn step_cost(&self, from: Step, to: Step) -> i32 {
        self.cost(from.pos, to.pos)
    }
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: StepPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
