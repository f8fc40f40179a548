use gridway_core::{Heading, Point, Range};

use crate::traits::Step;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// A minimum-cost path: total cost plus the cells visited, start to goal
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub cost: i32,
    pub cells: Vec<Point>,
}

impl Route {
    /// Number of edges in the path (one less than the number of cells).
    #[inline]
    pub fn edges(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Internal nodes for the priority-queue searches
// ---------------------------------------------------------------------------

/// Per-step node for the single-predecessor path searches.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Per-step node for the all-optimal-paths search. Keeps every predecessor
/// achieving the current best cost, not just one.
#[derive(Clone, Default)]
pub(crate) struct MultiNode {
    pub(crate) g: i32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) parents: Vec<usize>,
}

/// Reference into a node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Headings per cell in the step-aware state space.
pub(crate) const HEADINGS: usize = 4;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid rectangle.
///
/// `Router` owns all internal caches (open lists, node arrays, distance
/// maps, predecessor sets) so that repeated queries incur no allocations
/// after the first use. The step-aware searches explore a state space of
/// `range.len() * 4` (cell × heading) nodes.
///
/// Every query is a pure function of the router's range and its arguments:
/// repeated identical calls yield identical results.
pub struct Router {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // Step-aware path search caches (cell × heading).
    pub(crate) step_nodes: Vec<Node>,
    pub(crate) step_generation: u32,
    // All-optimal-paths caches.
    pub(crate) multi_nodes: Vec<MultiNode>,
    pub(crate) multi_generation: u32,
    pub(crate) step_seen: Vec<bool>,
    pub(crate) cell_seen: Vec<bool>,
    pub(crate) back_stack: Vec<usize>,
    // BFS map caches.
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_queue: Vec<usize>,
    pub(crate) bfs_results: Vec<PathNode>,
    // Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Point>,
}

impl Router {
    /// Create a new `Router` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            step_nodes: vec![Node::default(); len * HEADINGS],
            step_generation: 0,
            multi_nodes: vec![MultiNode::default(); len * HEADINGS],
            multi_generation: 0,
            step_seen: vec![false; len * HEADINGS],
            cell_seen: vec![false; len],
            back_stack: Vec::new(),
            bfs_map: vec![UNREACHABLE; len],
            bfs_queue: Vec::new(),
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(HEADINGS),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are preserved
    /// and only generation counters are bumped so stale entries are
    /// ignored. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.bfs_map.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.step_generation = self.step_generation.wrapping_add(1);
            self.multi_generation = self.multi_generation.wrapping_add(1);
            // Clear result vectors (they hold variable-length query output).
            self.bfs_results.clear();
            return;
        }

        // New size exceeds capacity — reallocate everything.
        self.step_nodes.clear();
        self.step_nodes.resize(new_len * HEADINGS, Node::default());
        self.step_generation = 0;

        self.multi_nodes.clear();
        self.multi_nodes
            .resize(new_len * HEADINGS, MultiNode::default());
        self.multi_generation = 0;
        self.step_seen.clear();
        self.step_seen.resize(new_len * HEADINGS, false);
        self.cell_seen.clear();
        self.cell_seen.resize(new_len, false);
        self.back_stack.clear();

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
        self.bfs_queue.clear();
        self.bfs_results.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat cell index. Returns `None` if out of
    /// range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !p.in_range(&self.rng) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat cell index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Flat step index for a cell index and heading.
    #[inline]
    pub(crate) fn sidx(&self, cell: usize, heading: Heading) -> usize {
        cell * HEADINGS + heading as usize
    }

    /// Convert a flat step index back to a [`Step`].
    #[inline]
    pub(crate) fn step(&self, sidx: usize) -> Step {
        Step::new(self.point(sidx / HEADINGS), Heading::ALL[sidx % HEADINGS])
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Router {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Router {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(Router::new(range))
    }
}
