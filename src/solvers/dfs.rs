use std::collections::{HashMap, HashSet};

use super::{Solution, Step, reconstruct_path};
use crate::maze::{Coord, GridCell, Maze};

/// Iterative depth-first search with explicit backtracking.
///
/// Neighbors are tried in the fixed order up, right, down, left and the first unvisited
/// walkable one is entered. A cell with nothing left to try is popped as a backtrack step.
pub fn solve_dfs(maze: &Maze, start: Coord) -> Solution {
    let mut trace = Vec::new();
    let mut stack = vec![start];
    let mut visited = HashSet::from([start]);
    let mut previous: HashMap<Coord, Coord> = HashMap::new();

    while let Some(&current) = stack.last() {
        if maze[current] == GridCell::Exit {
            tracing::debug!(
                "[dfs] exit reached, {} visits and stack depth {}",
                visited.len(),
                stack.len()
            );
            return Solution {
                trace,
                path: Some(reconstruct_path(&previous, start, current)),
            };
        }

        let next = maze
            .cell_neighbors(current)
            .find(|&c| maze[c].is_walkable() && !visited.contains(&c));

        match next {
            Some(next) => {
                visited.insert(next);
                previous.insert(next, current);
                stack.push(next);
                trace.push(Step::visit(next));
            }
            None => {
                stack.pop();
                trace.push(Step::backtrack(current));
            }
        }
    }

    tracing::debug!("[dfs] stack exhausted after {} visits", visited.len());
    Solution { trace, path: None }
}
