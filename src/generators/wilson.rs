use rand::{Rng, seq::SliceRandom};

use super::aldous_broder::random_neighbor;
use crate::maze::Maze;

/// Loop-erased random walks from unvisited rooms, each grafted onto the tree once it hits it.
pub fn wilson<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let size = maze.size();
    let mut in_tree = vec![false; size as usize * size as usize];

    let root = (rng.random_range(0..size), rng.random_range(0..size));
    in_tree[maze.room_id(root) as usize] = true;

    // Walk starts are taken in a random order, skipping rooms already grafted
    let mut starts = maze.rooms().collect::<Vec<_>>();
    starts.shuffle(rng);

    // Position of each room in the current walk, for loop erasure. Reset after every graft.
    let mut position: Vec<Option<usize>> = vec![None; in_tree.len()];
    let mut walk = Vec::new();

    for start in starts {
        if in_tree[maze.room_id(start) as usize] {
            continue;
        }
        walk.push(start);
        position[maze.room_id(start) as usize] = Some(0);

        let mut current = start;
        while !in_tree[maze.room_id(current) as usize] {
            let next = random_neighbor(maze, current, rng);
            match position[maze.room_id(next) as usize] {
                Some(idx) => {
                    // Erase the loop that just closed
                    for room in walk.drain(idx + 1..) {
                        position[maze.room_id(room) as usize] = None;
                    }
                }
                None => {
                    position[maze.room_id(next) as usize] = Some(walk.len());
                    walk.push(next);
                }
            }
            current = next;
        }

        for pair in walk.windows(2) {
            maze.carve(pair[0], pair[1]);
        }
        for room in walk.drain(..) {
            let id = maze.room_id(room) as usize;
            in_tree[id] = true;
            position[id] = None;
        }
        tracing::trace!("[wilson] grafted walk ending at {current:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, tests::assert_perfect};

    #[test]
    fn test_wilson_large_board() {
        let mut rng = get_rng(Some(9));
        let mut maze = Maze::new(120, None).unwrap();
        wilson(&mut maze, &mut rng);
        assert_perfect(&maze);
    }

    #[test]
    fn test_wilson() {
        let mut rng = get_rng(Some(4));
        for size in [1, 2, 4, 10] {
            let mut maze = Maze::new(size, None).unwrap();
            wilson(&mut maze, &mut rng);
            assert_perfect(&maze);
        }
    }
}
