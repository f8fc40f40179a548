//! Maze solving demo.
//!
//! Reads a maze file (`#` wall, `.` floor, `S` start, `E` goal), prints the
//! minimum cost, the path overlaid on the maze, and the number of cells on
//! any optimal path.
//!
//! Run: cargo run --bin maze-demo -- path/to/maze.txt [--turns] [--shortcuts N]

use std::process::ExitCode;

use gridway_core::Heading;
use gridway_maze::{Maze, MazePather, ShortcutPolicy, TurnPather, TurnPolicy, count_shortcuts};
use gridway_paths::Router;

const USAGE: &str = "usage: maze-demo <file> [--turns] [--shortcuts <min-saving>]";

fn main() -> ExitCode {
    let mut file = None;
    let mut turns = false;
    let mut shortcuts = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--turns" => turns = true,
            "--shortcuts" => match args.next().map(|v| v.parse::<i32>()) {
                Some(Ok(n)) => shortcuts = Some(n),
                _ => {
                    eprintln!("{USAGE}");
                    return ExitCode::FAILURE;
                }
            },
            _ if file.is_none() => file = Some(arg),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }
    let Some(file) = file else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&file, turns, shortcuts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(file: &str, turns: bool, shortcuts: Option<i32>) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(file)?;
    let maze = Maze::parse(&text)?;
    let start = maze.start().ok_or("maze has no start marker")?;
    let goal = maze.goal().ok_or("maze has no goal marker")?;

    let mut router = Router::new(maze.bounds());
    let (route, cells) = if turns {
        let pather = TurnPather::new(&maze, TurnPolicy::default());
        let route = router.shortest_path(&pather, start, Heading::East, goal);
        let cells = router.best_path_cells(&pather, start, Heading::East, goal);
        (route, cells)
    } else {
        let pather = MazePather::new(&maze);
        let route = router.astar_path(&pather, start, Heading::East, goal);
        let cells = router.best_path_cells(&pather, start, Heading::East, goal);
        (route, cells)
    };

    let Some(route) = route else {
        println!("no path from {start} to {goal}");
        return Ok(());
    };

    print!("{}", maze.render(&route.cells));
    println!("cost: {}", route.cost);
    println!("cells on any optimal path: {}", cells.len());

    if let Some(min_saving) = shortcuts {
        let policy = ShortcutPolicy {
            max_skip: 2,
            min_saving,
        };
        let n = count_shortcuts(&maze, &mut router, start, goal, policy);
        println!("wall-skipping shortcuts saving >= {min_saving}: {n}");
    }
    Ok(())
}
