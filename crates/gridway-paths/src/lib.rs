//! Weighted shortest-path search on 2D grids.
//!
//! This crate implements the search engine shared by maze-style puzzles:
//! priority-queue shortest paths over a rectangular grid, where the cost of
//! a move may depend on the direction of travel (turn penalties).
//!
//! - **Dijkstra** point-to-point paths ([`Router::shortest_path`])
//! - **A\*** point-to-point paths ([`Router::astar_path`])
//! - **All-optimal-path cells** ([`Router::best_path_cells`]) — every cell
//!   lying on at least one minimum-cost path
//! - **BFS** unweighted distance maps ([`Router::bfs_map`])
//!
//! All algorithms operate through [`Router`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS maps |
//! | [`WeightedPather`] : [`Pather`] | base cell-to-cell cost |
//! | [`StepPather`] : [`WeightedPather`] | point-to-point paths |
//! | [`AstarPather`] : [`StepPather`] | A* |
//!
//! [`StepPather::step_cost`] defaults to the plain cell cost, so pathers
//! without direction-dependent costs only implement the first two levels
//! and add an empty `impl StepPather for ... {}`.

mod astar;
mod bestpaths;
mod bfs;
mod dijkstra;
mod distance;
mod router;
mod traits;

pub use distance::manhattan;
pub use router::{PathNode, Route, Router, UNREACHABLE};
pub use traits::{AstarPather, Pather, Step, StepPather, WeightedPather};
