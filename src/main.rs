use std::{io::Write, path::PathBuf};

use clap::Parser;
use crossterm::{cursor, queue, terminal};
use mazeboard::{Board, Config, Generator, Solver, StepAction, render::draw_maze};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Generate a perfect maze and solve it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Rooms along one side of the board
    #[arg(short, long, default_value_t = Config::default().size, allow_negative_numbers = true)]
    size: i32,
    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
    /// kruskal, backtrack, prim, aldous-broder or wilson
    #[arg(short, long, default_value = "kruskal")]
    generator: Generator,
    /// dfs or flood-fill
    #[arg(long, default_value = "dfs")]
    solver: Solver,
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
    #[arg(long, default_value = "info")]
    log_level: Level,
    /// Print every solver step
    #[arg(long)]
    show_trace: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            size: cli.size,
            seed: cli.seed,
            generator: cli.generator,
            solver: cli.solver,
            log_dir: cli.log_dir,
            log_level: cli.log_level,
            show_trace: cli.show_trace,
        }
    }
}

/// Send logs to a file so they do not interleave with the drawn maze.
fn init_logging(config: &Config) -> WorkerGuard {
    let appender = tracing_appender::rolling::never(&config.log_dir, Config::LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let config = Config::from(Cli::parse());
    let guard = init_logging(&config);
    tracing::info!("Starting with {:?}", config);

    let mut board = Board::from_config(&config);
    let outcome = board
        .generate(config.size)
        .map(|_| ())
        .and_then(|()| board.solve());
    let solution = match outcome {
        Ok(solution) => solution,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            drop(guard);
            std::process::exit(2);
        }
    };

    let mut stdout = std::io::stdout();
    if let Some(maze) = board.maze() {
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        draw_maze(&mut stdout, maze, solution.path.as_deref(), (0, 0))?;
        queue!(stdout, cursor::MoveTo(0, maze.dimension()))?;
        stdout.flush()?;
        println!();
    }

    println!(
        "{} / {}: {} visits, {} backtracks",
        board.generator(),
        board.solver(),
        solution.visits(),
        solution.backtracks()
    );
    match &solution.path {
        Some(path) => println!("Maze solved! Path length: {}", path.len()),
        None => println!("No path found."),
    }

    if config.show_trace {
        for step in &solution.trace {
            let action = match step.action {
                StepAction::Visit => "visit",
                StepAction::Backtrack => "backtrack",
            };
            println!("{action} {:?}", step.coord);
        }
    }
    Ok(())
}
