use rand::Rng;

use crate::maze::{Maze, Room};

/// Random neighbor of a room, uniformly chosen.
pub(super) fn random_neighbor<R: Rng + ?Sized>(maze: &Maze, room: Room, rng: &mut R) -> Room {
    let neighbors = maze.room_neighbors(room).collect::<Vec<_>>();
    neighbors[rng.random_range(0..neighbors.len())]
}

/// Uniform random walk: entering a room for the first time opens the connector used.
pub fn aldous_broder<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let size = maze.size();
    let mut visited = vec![false; size as usize * size as usize];
    let mut remaining = visited.len() - 1;

    let mut current = (rng.random_range(0..size), rng.random_range(0..size));
    visited[maze.room_id(current) as usize] = true;

    let mut steps = 0usize;
    while remaining > 0 {
        let next = random_neighbor(maze, current, rng);
        let id = maze.room_id(next) as usize;
        if !visited[id] {
            visited[id] = true;
            remaining -= 1;
            maze.carve(current, next);
        }
        current = next;
        steps += 1;
    }
    tracing::debug!("[aldous-broder] walk took {} steps", steps);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, tests::assert_perfect};

    #[test]
    fn test_aldous_broder() {
        let mut rng = get_rng(Some(3));
        for size in [1, 2, 4, 10] {
            let mut maze = Maze::new(size, None).unwrap();
            aldous_broder(&mut maze, &mut rng);
            assert_perfect(&maze);
        }
    }
}
