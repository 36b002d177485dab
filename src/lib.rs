pub mod board;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;

pub use board::Board;
pub use config::Config;
pub use error::{MazeError, Result};
pub use generators::{Generator, MazeBuilder};
pub use maze::{Coord, GridCell, GridEvent, Maze};
pub use solvers::{MazeSolver, Solution, Solver, Step, StepAction};
