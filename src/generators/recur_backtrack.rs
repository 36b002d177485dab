use rand::Rng;

use crate::maze::Maze;

pub fn recursive_backtrack<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let size = maze.size();
    let mut visited = vec![false; size as usize * size as usize];

    // Initialize the starting point
    let start = (rng.random_range(0..size), rng.random_range(0..size));
    visited[maze.room_id(start) as usize] = true;

    // The stack keeps the rooms of the current carving branch
    let mut stack = vec![start];

    while let Some(room) = stack.pop() {
        let neighbors = maze
            .room_neighbors(room)
            .filter(|&r| !visited[maze.room_id(r) as usize])
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let neighbor = neighbors[rng.random_range(0..neighbors.len())];
            maze.carve(room, neighbor);
            visited[maze.room_id(neighbor) as usize] = true;
            tracing::trace!("[backtrack] carved {:?} -> {:?}", room, neighbor);
            // Put the room back first so we can look at another neighbor of this room later
            stack.push(room);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }
}
