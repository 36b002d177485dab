use std::time::{Duration, Instant};

use mazeboard::{Board, Generator, Maze, MazeBuilder, MazeSolver, Solver};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let size = Maze::MAX_SIZE as i32;

    for generator in Generator::ALL {
        for solver in Solver::ALL {
            let mut board = Board::new(MazeBuilder::new(generator), MazeSolver::new(solver));
            let mut generate_time = Duration::ZERO;
            let mut solve_time = Duration::ZERO;
            for _ in 0..num_iters {
                let start = Instant::now();
                if let Err(e) = board.generate(size) {
                    eprintln!("{e}");
                    return Ok(());
                }
                generate_time += start.elapsed();

                let start = Instant::now();
                if let Err(e) = board.solve() {
                    eprintln!("{e}");
                    return Ok(());
                }
                solve_time += start.elapsed();
            }
            println!(
                "{size}x{size} {generator} / {solver}: generate {:?}, solve {:?} (avg of {num_iters})",
                generate_time / num_iters.max(1) as u32,
                solve_time / num_iters.max(1) as u32,
            );
        }
    }
    Ok(())
}
