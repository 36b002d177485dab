use rand::{Rng, seq::SliceRandom};

use crate::maze::{Maze, Room};

/// Disjoint sets over room identifiers, with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<u16>,
    rank: Vec<u16>,
}

impl UnionFind {
    /// Creates `size` singleton sets, `0..size`.
    pub fn new(size: u16) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size as usize],
        }
    }

    /// Returns the root of `x`, pointing every node on the way directly at it.
    pub fn find(&mut self, x: u16) -> u16 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already joined.
    pub fn unite(&mut self, x: u16, y: u16) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x as usize].cmp(&self.rank[root_y as usize]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y as usize] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x as usize] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y as usize] = root_x;
                self.rank[root_x as usize] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, x: u16, y: u16) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Every pair of orthogonally adjacent rooms in a `size x size` room grid.
/// For each room in row-major order the pair to its right comes before the pair below it.
pub fn candidate_walls(size: u16) -> Vec<(Room, Room)> {
    (0..size)
        .flat_map(|y| (0..size).map(move |x| (y, x)))
        .flat_map(|(y, x)| {
            [
                (x + 1 < size).then(|| ((y, x), (y, x + 1))),
                (y + 1 < size).then(|| ((y, x), (y + 1, x))),
            ]
        })
        .flatten()
        .collect()
}

pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let size = maze.size();

    // Initialize Union-Find for all rooms
    let mut uf = UnionFind::new(size * size);

    let mut walls = candidate_walls(size);
    tracing::debug!("[kruskal] {} candidate walls", walls.len());

    // Fisher-Yates shuffle
    walls.shuffle(rng);

    // Walk the whole list, each union opens exactly one connector
    let mut unions = 0usize;
    for (room1, room2) in walls {
        let idx1 = maze.room_id(room1);
        let idx2 = maze.room_id(room2);

        if uf.unite(idx1, idx2) {
            maze.carve(room1, room2);
            unions += 1;
            tracing::trace!("[kruskal] joined {:?} and {:?}", room1, room2);
        }
    }
    tracing::debug!("[kruskal] {} unions", unions);
}
