//! Rectangular traversability grids parsed from text.

use std::collections::HashSet;
use std::fmt;

use gridway_core::{Point, Range};

const WALL: char = '#';
const FLOOR: char = '.';
const START: char = 'S';
const GOAL: char = 'E';
const OVERLAY: char = 'O';

/// A rectangular maze: every cell is either walkable or a wall, with
/// optional start/goal markers. Immutable for the lifetime of a search;
/// [`block`](Maze::block) / [`unblock`](Maze::unblock) exist for callers
/// that build the obstacle set incrementally between searches.
#[derive(Debug, Clone)]
pub struct Maze {
    bounds: Range,
    width: usize,
    walkable: Vec<bool>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// Recognized glyphs: `#` wall, `.` floor, `S` start (floor), `E`
    /// goal (floor). Leading/trailing whitespace is trimmed from the whole
    /// string but not from individual lines. Every line must have the same
    /// width; anything malformed is rejected at construction, never
    /// mid-search.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        let mut walkable = Vec::new();
        let mut start = None;
        let mut goal = None;
        let mut width: i32 = -1;
        let mut x: i32 = 0;
        let mut y: i32 = 0;

        for ch in s.chars() {
            if ch == '\n' {
                if width >= 0 && x != width {
                    return Err(MazeError::InconsistentWidth { row: y });
                }
                width = x;
                x = 0;
                y += 1;
                continue;
            }
            let pos = Point::new(x, y);
            match ch {
                WALL => walkable.push(false),
                FLOOR => walkable.push(true),
                START => {
                    if let Some(first) = start {
                        return Err(MazeError::DuplicateMarker {
                            ch,
                            first,
                            second: pos,
                        });
                    }
                    start = Some(pos);
                    walkable.push(true);
                }
                GOAL => {
                    if let Some(first) = goal {
                        return Err(MazeError::DuplicateMarker {
                            ch,
                            first,
                            second: pos,
                        });
                    }
                    goal = Some(pos);
                    walkable.push(true);
                }
                _ => return Err(MazeError::UnknownGlyph { ch, pos }),
            }
            x += 1;
        }
        if width >= 0 && x != width {
            return Err(MazeError::InconsistentWidth { row: y });
        }
        if width < 0 {
            width = x;
        }
        let height = if width > 0 || y > 0 { y + 1 } else { 0 };

        Ok(Self {
            bounds: Range::new(0, 0, width, height),
            width: width.max(0) as usize,
            walkable,
            start,
            goal,
        })
    }

    /// Create a fully open maze of the given size, with no markers.
    ///
    /// Combined with [`block`](Maze::block), this covers inputs that list
    /// obstacle coordinates instead of drawing the grid.
    pub fn open(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            width: bounds.width() as usize,
            walkable: vec![true; bounds.len()],
            start: None,
            goal: None,
        }
    }

    /// Make `p` a wall. Points outside the bounds are ignored.
    pub fn block(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.walkable[i] = false;
        }
    }

    /// Make `p` a floor cell. Points outside the bounds are ignored.
    pub fn unblock(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.walkable[i] = true;
        }
    }

    /// The bounding rectangle of the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is a floor cell. Coordinates outside the bounds are
    /// never walkable.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => self.walkable[i],
            None => false,
        }
    }

    /// Position of the `S` marker, if the parsed text had one.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `E` marker, if the parsed text had one.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Render the maze as text with the given cells overlaid as `O`.
    ///
    /// The overlay wins over every glyph, markers included. Useful for
    /// eyeballing a returned path.
    pub fn render(&self, overlay: &[Point]) -> String {
        let marks: HashSet<Point> = overlay.iter().copied().collect();
        let mut s = String::with_capacity(self.bounds.len() + self.bounds.height() as usize);
        for y in self.bounds.min.y..self.bounds.max.y {
            for x in self.bounds.min.x..self.bounds.max.x {
                let p = Point::new(x, y);
                let ch = if marks.contains(&p) {
                    OVERLAY
                } else if self.start == Some(p) {
                    START
                } else if self.goal == Some(p) {
                    GOAL
                } else if self.walkable(p) {
                    FLOOR
                } else {
                    WALL
                };
                s.push(ch);
            }
            s.push('\n');
        }
        s
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !p.in_range(&self.bounds) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Construction-time failures for [`Maze::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A row's width differs from the rows before it.
    InconsistentWidth { row: i32 },
    /// A character outside the recognized glyph set.
    UnknownGlyph { ch: char, pos: Point },
    /// A start or goal marker appeared more than once.
    DuplicateMarker {
        ch: char,
        first: Point,
        second: Point,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { row } => {
                write!(f, "maze: row {row} has inconsistent width")
            }
            Self::UnknownGlyph { ch, pos } => {
                write!(f, "maze: unknown glyph \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(
                    f,
                    "maze: duplicate \u{201c}{ch}\u{201d} marker at {second} (first at {first})"
                )
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
#####
#S..#
#.#.#
#..E#
#####";

    #[test]
    fn parse_and_query() {
        let m = Maze::parse(MAP).unwrap();
        assert_eq!(m.bounds(), Range::new(0, 0, 5, 5));
        assert_eq!(m.start(), Some(Point::new(1, 1)));
        assert_eq!(m.goal(), Some(Point::new(3, 3)));
        assert!(m.walkable(Point::new(1, 1)));
        assert!(m.walkable(Point::new(3, 1)));
        assert!(!m.walkable(Point::new(2, 2)));
        assert!(!m.walkable(Point::new(0, 0)));
        // Outside the bounds is never walkable.
        assert!(!m.walkable(Point::new(-1, 2)));
        assert!(!m.walkable(Point::new(5, 2)));
    }

    #[test]
    fn parse_inconsistent_width() {
        let err = Maze::parse("###\n##\n###").unwrap_err();
        assert_eq!(err, MazeError::InconsistentWidth { row: 1 });
    }

    #[test]
    fn parse_unknown_glyph() {
        let err = Maze::parse("##\n#x").unwrap_err();
        assert_eq!(
            err,
            MazeError::UnknownGlyph {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_duplicate_marker() {
        let err = Maze::parse("S.S").unwrap_err();
        assert_eq!(
            err,
            MazeError::DuplicateMarker {
                ch: 'S',
                first: Point::new(0, 0),
                second: Point::new(2, 0),
            }
        );
    }

    #[test]
    fn markers_are_optional() {
        let m = Maze::parse("...\n.#.").unwrap();
        assert_eq!(m.start(), None);
        assert_eq!(m.goal(), None);
        assert_eq!(m.bounds(), Range::new(0, 0, 3, 2));
    }

    #[test]
    fn open_block_unblock() {
        let mut m = Maze::open(4, 3);
        assert!(m.walkable(Point::new(3, 2)));
        m.block(Point::new(3, 2));
        assert!(!m.walkable(Point::new(3, 2)));
        m.unblock(Point::new(3, 2));
        assert!(m.walkable(Point::new(3, 2)));
        // Out of bounds is a no-op.
        m.block(Point::new(10, 10));
    }

    #[test]
    fn render_overlay() {
        let m = Maze::parse(MAP).unwrap();
        let s = m.render(&[Point::new(2, 1), Point::new(3, 1)]);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[1], "#SOO#");
        assert_eq!(lines[3], "#..E#");
        // Display is the plain render.
        assert_eq!(m.to_string(), m.render(&[]));
    }
}
