//! Cost policies connecting a [`Maze`] to the search traits.

use gridway_core::Point;
use gridway_paths::{AstarPather, Pather, Step, StepPather, WeightedPather, manhattan};

use crate::maze::Maze;

/// Unit-cost pather over a maze: every move between adjacent floor cells
/// costs 1, headings are irrelevant.
pub struct MazePather<'a> {
    maze: &'a Maze,
}

impl<'a> MazePather<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }
}

impl Pather for MazePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.maze.walkable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for MazePather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl StepPather for MazePather<'_> {}

impl AstarPather for MazePather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Turn-penalty constants: moving straight costs `step`, any heading
/// change (90° or 180°) pays `turn` on top of the step.
///
/// The default (1 / 1000) is the classic reindeer-maze scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnPolicy {
    pub step: i32,
    pub turn: i32,
}

impl Default for TurnPolicy {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

/// Maze pather whose cost depends on the direction of travel.
pub struct TurnPather<'a> {
    maze: &'a Maze,
    policy: TurnPolicy,
}

impl<'a> TurnPather<'a> {
    pub fn new(maze: &'a Maze, policy: TurnPolicy) -> Self {
        Self { maze, policy }
    }
}

impl Pather for TurnPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.maze.walkable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for TurnPather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        self.policy.step
    }
}

impl StepPather for TurnPather<'_> {
    fn step_cost(&self, from: Step, to: Step) -> i32 {
        if from.heading == to.heading {
            self.policy.step
        } else {
            self.policy.turn + self.policy.step
        }
    }
}

impl AstarPather for TurnPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        // Admissible: every edge costs at least `step`.
        manhattan(from, to) * self.policy.step
    }
}
