//! Maze loading and cost policies for the *gridway* searches.
//!
//! [`Maze`] parses the textual grids the puzzle inputs use (`#` wall, `.`
//! floor, `S` start, `E` goal) with fail-fast construction errors, or
//! builds an open grid that cells are knocked out of afterwards.
//! [`MazePather`] and [`TurnPather`] supply the cost functions: plain unit
//! cost, or a turn penalty on every heading change.
//! [`count_shortcuts`] analyses how much wall-crossing skips would shorten
//! the walk.

pub mod maze;
pub mod pather;
pub mod shortcuts;

pub use maze::{Maze, MazeError};
pub use pather::{MazePather, TurnPather, TurnPolicy};
pub use shortcuts::{ShortcutPolicy, count_shortcuts};
