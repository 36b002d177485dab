use std::path::PathBuf;

use tracing::Level;

use crate::{generators::Generator, solvers::Solver};

/// Every knob of a run. The CLI fills this in from its arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rooms along one side of the board
    pub size: i32,
    /// Seed for the random source; `None` draws from the OS
    pub seed: Option<u64>,
    pub generator: Generator,
    pub solver: Solver,
    /// Directory receiving `mazeboard.log`
    pub log_dir: PathBuf,
    pub log_level: Level,
    /// Print every solver step after the maze
    pub show_trace: bool,
}

impl Config {
    pub const LOG_FILE_NAME: &str = "mazeboard.log";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 9,
            seed: None,
            generator: Generator::default(),
            solver: Solver::default(),
            log_dir: PathBuf::from("."),
            log_level: Level::INFO,
            show_trace: false,
        }
    }
}
