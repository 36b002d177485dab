use std::sync::mpsc::Sender;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod aldous_broder;
mod kruskal;
mod prim;
mod recur_backtrack;
mod wilson;

use aldous_broder::aldous_broder;
pub use kruskal::{UnionFind, candidate_walls};
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use wilson::wilson;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, GridCell, GridEvent, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Spanning-tree carving algorithm used to open connectors between rooms.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    #[default]
    Kruskal,
    RecurBacktrack,
    Prim,
    AldousBroder,
    Wilson,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::Kruskal,
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::AldousBroder,
        Generator::Wilson,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::AldousBroder => write!(f, "Aldous-Broder Algorithm"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Generator::Kruskal),
            "backtrack" | "recursive-backtrack" => Ok(Generator::RecurBacktrack),
            "prim" => Ok(Generator::Prim),
            "aldous-broder" => Ok(Generator::AldousBroder),
            "wilson" => Ok(Generator::Wilson),
            other => Err(MazeError::InvalidConfiguration(format!(
                "unknown generator {other:?}"
            ))),
        }
    }
}

/// Builds perfect mazes: allocates the board, carves a spanning tree over the rooms and
/// places the entrance and exit markers on the rim.
#[derive(Default)]
pub struct MazeBuilder {
    generator: Generator,
    seed: Option<u64>,
    sender: Option<Sender<GridEvent>>,
}

impl MazeBuilder {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator,
            ..Default::default()
        }
    }

    /// Fixes the random source so that every `generate` call yields the same maze.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Streams every grid mutation of subsequent generations to `sender`.
    pub fn with_sender(mut self, sender: Sender<GridEvent>) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    /// Generates a maze of `size x size` rooms using the configured random source.
    pub fn generate(&self, size: i32) -> Result<Maze> {
        let mut rng = get_rng(self.seed);
        self.generate_with_rng(size, &mut rng)
    }

    /// Generates a maze of `size x size` rooms, drawing all randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, size: i32, rng: &mut R) -> Result<Maze> {
        let mut maze = Maze::new(size, self.sender.clone())?;
        tracing::debug!(
            "[builder] carving {}x{} rooms with {}",
            maze.size(),
            maze.size(),
            self.generator
        );

        match self.generator {
            Generator::Kruskal => randomized_kruskal(&mut maze, rng),
            Generator::RecurBacktrack => recursive_backtrack(&mut maze, rng),
            Generator::Prim => randomized_prim(&mut maze, rng),
            Generator::AldousBroder => aldous_broder(&mut maze, rng),
            Generator::Wilson => wilson(&mut maze, rng),
        }

        let (entrance, exit) = place_entrance_and_exit(&mut maze, rng)?;
        tracing::info!(
            "[builder] generated {0}x{0} maze, entrance {entrance:?}, exit {exit:?}",
            maze.size()
        );
        Ok(maze)
    }
}

/// Rim cells on the left and right border whose inner neighbor is walkable.
fn border_candidates(maze: &Maze) -> (Vec<Coord>, Vec<Coord>) {
    let last = maze.dimension() - 1;
    let open = |coord: Coord| maze[coord] == GridCell::Path;
    let mut left = Vec::new();
    let mut right = Vec::new();
    for row in 1..last {
        if open((row, 1)) && maze[(row, 0)] == GridCell::Wall {
            left.push((row, 0));
        }
        if open((row, last - 1)) && maze[(row, last)] == GridCell::Wall {
            right.push((row, last));
        }
    }
    (left, right)
}

/// Picks two distinct cells from one side of the board.
///
/// Sharing a side is allowed, sharing a cell is not: a single cell cannot hold both the
/// entrance and the exit, so fewer than two candidates is `InvalidState`.
fn pick_two<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> Result<(Coord, Coord)> {
    if candidates.len() < 2 {
        return Err(MazeError::InvalidState(format!(
            "only {} rim cell(s) available for both entrance and exit",
            candidates.len()
        )));
    }
    let first = rng.random_range(0..candidates.len());
    // Draw from the remaining candidates by skipping over the first pick
    let mut second = rng.random_range(0..candidates.len() - 1);
    if second >= first {
        second += 1;
    }
    Ok((candidates[first], candidates[second]))
}

/// Marks an entrance on the left rim and an exit on the right rim.
/// Falls back to putting both on whichever side has candidates.
pub fn place_entrance_and_exit<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
) -> Result<(Coord, Coord)> {
    let (left, right) = border_candidates(maze);
    let (entrance, exit) = match (left.is_empty(), right.is_empty()) {
        (false, false) => (
            left[rng.random_range(0..left.len())],
            right[rng.random_range(0..right.len())],
        ),
        (false, true) => {
            tracing::warn!("[builder] no right rim candidates, placing both markers on the left");
            pick_two(&left, rng)?
        }
        (true, false) => {
            tracing::warn!("[builder] no left rim candidates, placing both markers on the right");
            pick_two(&right, rng)?
        }
        (true, true) => {
            return Err(MazeError::InvalidState(
                "no rim cell borders a walkable cell".to_string(),
            ));
        }
    };
    maze.set(entrance, GridCell::Entrance);
    maze.set(exit, GridCell::Exit);
    Ok((entrance, exit))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{collections::VecDeque, sync::mpsc::channel};

    /// Asserts that the open connectors form a spanning tree over the rooms.
    pub(crate) fn assert_perfect(maze: &Maze) {
        let n = maze.size() as usize;
        assert_eq!(maze.carved_connectors(), n * n - 1, "edge count\n{maze}");

        // Flood over rooms through open connectors
        let mut seen = vec![false; n * n];
        let mut queue = VecDeque::from([(0u16, 0u16)]);
        seen[0] = true;
        while let Some(room) = queue.pop_front() {
            for next in maze.room_neighbors(room) {
                let id = maze.room_id(next) as usize;
                if maze.is_carved(room, next) && !seen[id] {
                    seen[id] = true;
                    queue.push_back(next);
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "disconnected rooms\n{maze}");

        for (row, col) in maze.coords() {
            let cell = maze[(row, col)];
            // Rim posts may hold a marker, everything else on an even/even cell stays a wall
            let marker = matches!(cell, GridCell::Entrance | GridCell::Exit);
            if row % 2 == 0 && col % 2 == 0 && !marker {
                assert_eq!(cell, GridCell::Wall, "post ({row}, {col})");
            }
            if row % 2 == 1 && col % 2 == 1 {
                assert_eq!(maze[(row, col)], GridCell::Path, "room ({row}, {col})");
            }
        }
    }

    pub(crate) fn assert_markers(maze: &Maze) {
        let entrances = maze.find_all(GridCell::Entrance);
        let exits = maze.find_all(GridCell::Exit);
        assert_eq!(entrances.len(), 1);
        assert_eq!(exits.len(), 1);
        let last = maze.dimension() - 1;
        for coord in [entrances[0], exits[0]] {
            assert!(maze.is_border(coord));
            assert!(coord.1 == 0 || coord.1 == last);
            assert!(coord.0 > 0 && coord.0 < last);
        }
    }

    #[test]
    fn test_every_generator_builds_perfect_mazes() {
        for generator in Generator::ALL {
            for (size, seed) in [(1, 0), (2, 1), (3, 2), (5, 3), (8, 4), (13, 5)] {
                let maze = MazeBuilder::new(generator)
                    .with_seed(Some(seed))
                    .generate(size)
                    .unwrap();
                assert_eq!(maze.dimension() as i32, 2 * size + 1);
                assert_perfect(&maze);
                assert_markers(&maze);
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        for generator in Generator::ALL {
            let builder = MazeBuilder::new(generator).with_seed(Some(42));
            let first = builder.generate(10).unwrap();
            let second = builder.generate(10).unwrap();
            assert_eq!(first.cells(), second.cells(), "{generator}");
        }
    }

    #[test]
    fn test_invalid_size() {
        let builder = MazeBuilder::default();
        for size in [0, -1] {
            assert!(matches!(
                builder.generate(size),
                Err(MazeError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_single_room_markers() {
        let maze = MazeBuilder::default().generate(1).unwrap();
        assert_eq!(maze.dimension(), 3);
        assert_eq!(maze[(1, 0)], GridCell::Entrance);
        assert_eq!(maze[(1, 2)], GridCell::Exit);
    }

    #[test]
    fn test_entrance_on_left_exit_on_right() {
        let mut rng = get_rng(Some(7));
        for _ in 0..20 {
            let maze = MazeBuilder::default()
                .generate_with_rng(6, &mut rng)
                .unwrap();
            let entrance = maze.find_all(GridCell::Entrance)[0];
            let exit = maze.find_all(GridCell::Exit)[0];
            assert_eq!(entrance.1, 0);
            assert_eq!(exit.1, maze.dimension() - 1);
        }
    }

    #[test]
    fn test_markers_on_rim_posts_face_a_connector() {
        let mut on_posts = 0;
        for seed in 0..50 {
            let maze = MazeBuilder::default()
                .with_seed(Some(seed))
                .generate(3)
                .unwrap();
            let last = maze.dimension() - 1;
            let markers = [
                maze.find_all(GridCell::Entrance)[0],
                maze.find_all(GridCell::Exit)[0],
            ];
            for coord in markers {
                let inner = (coord.0, if coord.1 == 0 { 1 } else { last - 1 });
                assert_eq!(maze[inner], GridCell::Path, "seed {seed}, marker {coord:?}");
                if coord.0 % 2 == 0 {
                    // An even-row marker can only be reached through a carved vertical connector
                    assert!(maze.is_connector(inner), "seed {seed}, marker {coord:?}");
                    on_posts += 1;
                }
            }
        }
        assert!(on_posts > 0);
    }

    #[test]
    fn test_entrance_on_even_row() {
        // The only open cell next to the left rim is the vertical connector at (2, 1)
        let mut maze =
            Maze::from_rows(&["#####", "## ##", "# # #", "##  #", "#####"]).unwrap();
        let (left, right) = border_candidates(&maze);
        assert_eq!(left, vec![(2, 0)]);
        assert_eq!(right, vec![(2, 4), (3, 4)]);

        let mut rng = get_rng(Some(0));
        let (entrance, exit) = place_entrance_and_exit(&mut maze, &mut rng).unwrap();
        assert_eq!(entrance, (2, 0));
        assert!(maze.is_connector((2, 1)));
        assert_eq!(maze[(2, 1)], GridCell::Path);
        assert_eq!(exit.1, 4);
    }

    #[test]
    fn test_same_side_fallback() {
        // Right column sealed off so only the left rim qualifies
        let mut maze =
            Maze::from_rows(&["#####", "#  ##", "# ###", "#  ##", "#####"]).unwrap();
        let mut rng = get_rng(Some(3));
        let (entrance, exit) = place_entrance_and_exit(&mut maze, &mut rng).unwrap();
        assert_ne!(entrance, exit);
        assert_eq!(entrance.1, 0);
        assert_eq!(exit.1, 0);
        assert_eq!(maze[entrance], GridCell::Entrance);
        assert_eq!(maze[exit], GridCell::Exit);
    }

    #[test]
    fn test_one_candidate_cannot_hold_both_markers() {
        let mut maze =
            Maze::from_rows(&["#####", "#  ##", "#####", "#####", "#####"]).unwrap();
        let mut rng = get_rng(Some(1));
        assert!(matches!(
            place_entrance_and_exit(&mut maze, &mut rng),
            Err(MazeError::InvalidState(_))
        ));
        assert!(maze.find_all(GridCell::Entrance).is_empty());
    }

    #[test]
    fn test_no_candidates() {
        let mut maze = Maze::from_rows(&["###", "###", "###"]).unwrap();
        let mut rng = get_rng(Some(0));
        assert!(matches!(
            place_entrance_and_exit(&mut maze, &mut rng),
            Err(MazeError::InvalidState(_))
        ));
    }

    #[test]
    fn test_events_replay_to_final_grid() {
        let (tx, rx) = channel();
        let maze = MazeBuilder::default()
            .with_seed(Some(11))
            .with_sender(tx)
            .generate(4)
            .unwrap();

        let mut replay = Vec::new();
        let mut width = 0;
        let mut carved = 0;
        for event in rx.try_iter() {
            match event {
                GridEvent::Initial { cell, width: w, height } => {
                    width = w as usize;
                    replay = vec![cell; w as usize * height as usize];
                }
                GridEvent::Update { coord, old, new } => {
                    let idx = coord.0 as usize * width + coord.1 as usize;
                    assert_eq!(replay[idx], old);
                    replay[idx] = new;
                    if maze.is_connector(coord) {
                        carved += 1;
                    }
                }
            }
        }
        assert_eq!(replay.as_slice(), maze.cells());
        assert_eq!(carved, 15);
    }

    #[test]
    fn test_generator_names() {
        assert_eq!("Kruskal".parse::<Generator>().unwrap(), Generator::Kruskal);
        assert_eq!(
            "aldous-broder".parse::<Generator>().unwrap(),
            Generator::AldousBroder
        );
        assert!("eller".parse::<Generator>().is_err());
    }
}
