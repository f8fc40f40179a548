//! Cardinal headings for direction-aware grid movement.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal directions.
///
/// Used as the facing component of a search state when movement cost
/// depends on direction (e.g. turn penalties). X grows right, Y grows
/// down, so [`Heading::North`] has delta `(0, -1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All four headings, in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit offset of one step in this heading.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
            Self::West => Point::new(-1, 0),
        }
    }

    /// The heading matching a unit cardinal offset, if any.
    #[inline]
    pub const fn from_delta(d: Point) -> Option<Self> {
        match (d.x, d.y) {
            (0, -1) => Some(Self::North),
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::South),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }

    /// Heading after a 90° counter-clockwise turn.
    #[inline]
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Heading after a 90° clockwise turn.
    #[inline]
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The opposite heading.
    #[inline]
    pub const fn reverse(self) -> Self {
        self.left().left()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(s)
    }
}
