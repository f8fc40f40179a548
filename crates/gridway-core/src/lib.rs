//! **gridway-core** — Grid pathfinding toolkit (geometry primitives).
//!
//! This crate provides the foundational value types used across the
//! *gridway* ecosystem: integer points, half-open rectangles, and cardinal
//! headings.

pub mod geom;
pub mod heading;

pub use geom::{Point, Range, RangeIter};
pub use heading::Heading;
