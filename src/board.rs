use crate::{
    config::Config,
    error::{MazeError, Result},
    generators::{Generator, MazeBuilder},
    maze::Maze,
    solvers::{MazeSolver, Solution, Solver},
};

/// Holds the one live maze of a session. Generating replaces it, solving reads it.
#[derive(Default)]
pub struct Board {
    builder: MazeBuilder,
    solver: MazeSolver,
    maze: Option<Maze>,
}

impl Board {
    pub fn new(builder: MazeBuilder, solver: MazeSolver) -> Self {
        Self {
            builder,
            solver,
            maze: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            MazeBuilder::new(config.generator).with_seed(config.seed),
            MazeSolver::new(config.solver),
        )
    }

    /// Discards the current maze and generates a new one of `size x size` rooms.
    /// On failure the board is left empty.
    pub fn generate(&mut self, size: i32) -> Result<&Maze> {
        if self.maze.take().is_some() {
            tracing::debug!("[board] discarded previous maze");
        }
        tracing::debug!("[board] generating with {}", self.generator());
        let maze = self.builder.generate(size)?;
        Ok(&*self.maze.insert(maze))
    }

    /// Solves the current maze. Fails if nothing has been generated yet.
    pub fn solve(&self) -> Result<Solution> {
        let maze = self.maze.as_ref().ok_or_else(|| {
            MazeError::InvalidState("no maze has been generated yet".to_string())
        })?;
        self.solver.solve(maze)
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    pub fn generator(&self) -> Generator {
        self.builder.generator()
    }

    pub fn solver(&self) -> Solver {
        self.solver.solver()
    }
}
