//! Wall-skipping shortcut analysis.
//!
//! A shortcut leaves the floor at an entry cell, passes straight through
//! walls for a bounded number of steps, and rejoins the floor at an exit
//! cell. Its value is how many steps it shaves off the ordinary walk from
//! start to goal.

use gridway_core::Point;
use gridway_paths::{Router, UNREACHABLE};

use crate::maze::Maze;
use crate::pather::MazePather;

/// Bounds for [`count_shortcuts`]: a shortcut spans at most `max_skip`
/// steps (Manhattan length between entry and exit), and only shortcuts
/// saving at least `min_saving` steps are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortcutPolicy {
    pub max_skip: i32,
    pub min_saving: i32,
}

/// Count the (entry, exit) cell pairs where cutting through walls for at
/// most `policy.max_skip` steps shortens the walk from `start` to `goal`
/// by at least `policy.min_saving`.
///
/// Both endpoints of a shortcut must be floor cells; the entry must be
/// reachable from `start` and the exit must reach `goal`. Returns 0 when
/// the goal is unreachable without shortcuts.
pub fn count_shortcuts(
    maze: &Maze,
    router: &mut Router,
    start: Point,
    goal: Point,
    policy: ShortcutPolicy,
) -> usize {
    let pather = MazePather::new(maze);

    // Distances from the start, copied out before the second map
    // overwrites the router's BFS cache.
    let from_start = router.bfs_map(&pather, &[start], i32::MAX).to_vec();
    let base = router.bfs_at(goal);
    if base == UNREACHABLE {
        return 0;
    }

    // Distances to the goal (moves are symmetric, so BFS from it).
    router.bfs_map(&pather, &[goal], i32::MAX);

    let mut count = 0;
    for entry in &from_start {
        // Every cell within the skip radius of the entry.
        for dy in -policy.max_skip..=policy.max_skip {
            let rest = policy.max_skip - dy.abs();
            for dx in -rest..=rest {
                let exit = entry.pos.shift(dx, dy);
                if !maze.walkable(exit) {
                    continue;
                }
                let to_goal = router.bfs_at(exit);
                if to_goal == UNREACHABLE {
                    continue;
                }
                let with_skip = entry.cost + dx.abs() + dy.abs() + to_goal;
                if base - with_skip >= policy.min_saving {
                    count += 1;
                }
            }
        }
    }
    count
}
