use rand::Rng;

use crate::maze::Maze;

pub fn randomized_prim<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let size = maze.size();
    let mut in_maze = vec![false; size as usize * size as usize];
    let mut in_frontier = vec![false; size as usize * size as usize];

    // Initialize the starting point
    let start = (rng.random_range(0..size), rng.random_range(0..size));
    in_maze[maze.room_id(start) as usize] = true;

    // Frontier rooms border the carved region but are not part of it yet
    let mut frontiers = Vec::new();
    for room in maze.room_neighbors(start) {
        in_frontier[maze.room_id(room) as usize] = true;
        frontiers.push(room);
    }

    while !frontiers.is_empty() {
        // Randomly select a room from the frontiers
        let idx = rng.random_range(0..frontiers.len());
        let frontier = frontiers.swap_remove(idx);

        // Connect it to one of its neighbors that is already carved
        let carved_neighbors = maze
            .room_neighbors(frontier)
            .filter(|&r| in_maze[maze.room_id(r) as usize])
            .collect::<Vec<_>>();
        let neighbor = carved_neighbors[rng.random_range(0..carved_neighbors.len())];
        maze.carve(frontier, neighbor);
        in_maze[maze.room_id(frontier) as usize] = true;
        tracing::trace!("[prim] carved {:?} -> {:?}", neighbor, frontier);

        // Add the untouched neighbors of the new room to the frontiers
        for room in maze.room_neighbors(frontier) {
            let id = maze.room_id(room) as usize;
            if !in_maze[id] && !in_frontier[id] {
                in_frontier[id] = true;
                frontiers.push(room);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, tests::assert_perfect};

    #[test]
    fn test_randomized_prim() {
        let mut rng = get_rng(Some(2));
        for size in [1, 2, 5, 12] {
            let mut maze = Maze::new(size, None).unwrap();
            randomized_prim(&mut maze, &mut rng);
            assert_perfect(&maze);
        }
    }
}
