use std::collections::HashMap;

mod dfs;
mod flood_fill;

use dfs::solve_dfs;
use flood_fill::solve_flood_fill;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, GridCell, Maze},
};

/// What the solver did at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Moved forward onto the cell.
    Visit,
    /// Gave up on the cell and stepped back from it.
    Backtrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub coord: Coord,
    pub action: StepAction,
}

impl Step {
    fn visit(coord: Coord) -> Self {
        Step {
            coord,
            action: StepAction::Visit,
        }
    }

    fn backtrack(coord: Coord) -> Self {
        Step {
            coord,
            action: StepAction::Backtrack,
        }
    }
}

/// Outcome of a search over a maze.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    /// Every step taken, in order, for the caller to replay.
    pub trace: Vec<Step>,
    /// Entrance-to-exit path, both ends included. `None` when the exit is unreachable.
    pub path: Option<Vec<Coord>>,
}

impl Solution {
    pub fn visits(&self) -> usize {
        self.trace
            .iter()
            .filter(|s| s.action == StepAction::Visit)
            .count()
    }

    pub fn backtracks(&self) -> usize {
        self.trace
            .iter()
            .filter(|s| s.action == StepAction::Backtrack)
            .count()
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    #[default]
    Dfs,
    FloodFill,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::Dfs, Solver::FloodFill];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::FloodFill => write!(f, "Flood Fill (BFS)"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Solver::Dfs),
            "flood-fill" | "bfs" => Ok(Solver::FloodFill),
            other => Err(MazeError::InvalidConfiguration(format!(
                "unknown solver {other:?}"
            ))),
        }
    }
}

/// Read-only search from the entrance marker to the exit marker.
#[derive(Default, Debug, Clone, Copy)]
pub struct MazeSolver {
    solver: Solver,
}

impl MazeSolver {
    pub fn new(solver: Solver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    pub fn solve(&self, maze: &Maze) -> Result<Solution> {
        let (entrance, exit) = find_endpoints(maze)?;
        tracing::debug!(
            "[solver] {} from {:?} to {:?}",
            self.solver,
            entrance,
            exit
        );
        let solution = match self.solver {
            Solver::Dfs => solve_dfs(maze, entrance),
            Solver::FloodFill => solve_flood_fill(maze, entrance),
        };
        match &solution.path {
            Some(path) => tracing::info!(
                "[solver] path of {} cells after {} steps",
                path.len(),
                solution.trace.len()
            ),
            None => tracing::info!(
                "[solver] no path after {} steps",
                solution.trace.len()
            ),
        }
        Ok(solution)
    }
}

/// The single entrance and single exit of the maze.
fn find_endpoints(maze: &Maze) -> Result<(Coord, Coord)> {
    let single = |cell: GridCell| match maze.find_all(cell).as_slice() {
        [coord] => Ok(*coord),
        found => Err(MazeError::InvalidState(format!(
            "expected exactly one {cell:?} marker, found {}",
            found.len()
        ))),
    };
    Ok((single(GridCell::Entrance)?, single(GridCell::Exit)?))
}

/// Walks the discovery map back from `end` and returns the path in start-to-end order.
fn reconstruct_path(previous: &HashMap<Coord, Coord>, start: Coord, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
