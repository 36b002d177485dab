use std::collections::{HashMap, HashSet, VecDeque};

use super::{Solution, Step, reconstruct_path};
use crate::maze::{Coord, GridCell, Maze};

/// Breadth-first flood from the entrance. Every dequeued cell is a visit, so the trace
/// grows outward in rings; the discovered path is a shortest one.
pub fn solve_flood_fill(maze: &Maze, start: Coord) -> Solution {
    let mut trace = Vec::new();
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut previous: HashMap<Coord, Coord> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current != start {
            trace.push(Step::visit(current));
        }
        if maze[current] == GridCell::Exit {
            tracing::debug!("[flood-fill] exit reached after {} visits", trace.len());
            return Solution {
                trace,
                path: Some(reconstruct_path(&previous, start, current)),
            };
        }

        for next in maze.cell_neighbors(current) {
            if maze[next].is_walkable() && visited.insert(next) {
                previous.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    tracing::debug!("[flood-fill] flood exhausted after {} visits", trace.len());
    Solution { trace, path: None }
}
