pub mod cell;
pub mod grid;

use std::{fmt, sync::mpsc::Sender};

use crate::error::{MazeError, Result};
pub use cell::GridCell;
use grid::Grid;
pub use grid::GridEvent;

/// A board position as (row, col).
pub type Coord = (u16, u16);

/// A room position in the logical `n x n` room grid as (y, x).
pub type Room = (u16, u16);

/// A square tile board of `(2n + 1) x (2n + 1)` cells built around `n x n` rooms.
///
/// Cells with both coordinates odd are rooms, cells with both coordinates even are posts,
/// and the remaining cells are connectors separating two neighboring rooms (or the rim).
pub struct Maze {
    grid: Grid,
    size: u16,
}

impl Maze {
    /// Largest accepted board size. Keeps every room identifier within `u16`.
    pub const MAX_SIZE: u16 = u8::MAX as u16;

    /// Checks a requested board size and converts it to the internal representation.
    pub fn validate_size(size: i32) -> Result<u16> {
        if size < 1 {
            return Err(MazeError::InvalidConfiguration(format!(
                "board size must be at least 1, got {size}"
            )));
        }
        if size > Self::MAX_SIZE as i32 {
            return Err(MazeError::InvalidConfiguration(format!(
                "board size must be at most {}, got {size}",
                Self::MAX_SIZE
            )));
        }
        Ok(size as u16)
    }

    /// Creates a fresh board of `size x size` rooms.
    /// Rooms start walkable, every post and connector starts as a wall.
    pub fn new(size: i32, sender: Option<Sender<GridEvent>>) -> Result<Self> {
        let size = Self::validate_size(size)?;
        // n rooms in each dimension -> n + 1 walls -> 2n + 1 total
        let dimension = size * 2 + 1;
        let mut maze = Maze {
            grid: Grid::square(dimension, GridCell::Wall, sender),
            size,
        };
        for room in maze.rooms() {
            maze.grid.set(Self::room_cell(room), GridCell::Path);
        }
        Ok(maze)
    }

    /// Builds a board from text rows using `#` for walls, a space for paths,
    /// `S` for the entrance and `E` for the exit.
    ///
    /// The text must be a square with an odd side of at least 3. No structural
    /// checks are made beyond that, so disconnected or marker-less boards are fine.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let dimension = rows.len();
        if dimension < 3 || dimension % 2 == 0 || dimension > Self::MAX_SIZE as usize * 2 + 1 {
            return Err(MazeError::InvalidConfiguration(format!(
                "board text must have an odd number of rows between 3 and {}, got {dimension}",
                Self::MAX_SIZE * 2 + 1
            )));
        }
        let size = (dimension / 2) as u16;
        let mut grid = Grid::square(dimension as u16, GridCell::Wall, None);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != dimension {
                return Err(MazeError::InvalidConfiguration(format!(
                    "row {row} has {} cells, expected {dimension}",
                    line.chars().count()
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    '#' => GridCell::Wall,
                    ' ' => GridCell::Path,
                    'S' => GridCell::Entrance,
                    'E' => GridCell::Exit,
                    other => {
                        return Err(MazeError::InvalidConfiguration(format!(
                            "unknown cell symbol {other:?} at ({row}, {col})"
                        )));
                    }
                };
                grid.set((row as u16, col as u16), cell);
            }
        }
        Ok(Maze { grid, size })
    }

    /// Number of rooms along one side.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Number of cells along one side, `2 * size + 1`.
    pub fn dimension(&self) -> u16 {
        self.grid.side()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        self.grid.cells()
    }

    pub fn is_border(&self, coord: Coord) -> bool {
        self.grid.is_boundary(coord)
    }

    /// Whether the cell separates two rooms (exactly one even coordinate) and is not on the rim.
    pub fn is_connector(&self, coord: Coord) -> bool {
        (coord.0 % 2 == 0) != (coord.1 % 2 == 0) && !self.is_border(coord)
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: GridCell) -> bool {
        self.grid.set(coord, cell)
    }

    /// Iterates every room in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = Room> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (y, x)))
    }

    /// Identifier of a room, `y * n + x`.
    pub fn room_id(&self, room: Room) -> u16 {
        room.0 * self.size + room.1
    }

    /// Board cell holding the given room.
    pub fn room_cell(room: Room) -> Coord {
        (room.0 * 2 + 1, room.1 * 2 + 1)
    }

    /// Board cell separating two orthogonally adjacent rooms.
    pub fn connector(a: Room, b: Room) -> Coord {
        debug_assert_eq!(
            a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
            1,
            "rooms {a:?} and {b:?} are not adjacent"
        );
        (a.0 + b.0 + 1, a.1 + b.1 + 1)
    }

    /// Opens the connector between two adjacent rooms. Returns `false` if it was already open.
    pub fn carve(&mut self, a: Room, b: Room) -> bool {
        self.grid.set(Self::connector(a, b), GridCell::Path)
    }

    pub fn is_carved(&self, a: Room, b: Room) -> bool {
        self.grid[Self::connector(a, b)] == GridCell::Path
    }

    /// Number of connectors that have been opened.
    pub fn carved_connectors(&self) -> usize {
        self.coords()
            .filter(|&c| self.is_connector(c) && self[c] == GridCell::Path)
            .count()
    }

    /// Iterates every board coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let dimension = self.dimension();
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| (row, col)))
    }

    /// All coordinates holding the given cell state.
    pub fn find_all(&self, cell: GridCell) -> Vec<Coord> {
        self.coords().filter(|&c| self[c] == cell).collect()
    }

    /// Adjacent rooms of a room, in the order up, right, down, left.
    pub fn room_neighbors(&self, room: Room) -> impl Iterator<Item = Room> + use<> {
        let size = self.size;
        let (y, x) = room;
        // NOTE: Subtracting from 0 wraps to u16::MAX and adding saturates at u16::MAX.
        // Both land outside the room grid, whose side is at most 255, and get filtered out.
        [
            (y.wrapping_sub(1), x),
            (y, x.saturating_add(1)),
            (y.saturating_add(1), x),
            (y, x.wrapping_sub(1)),
        ]
        .into_iter()
        .filter(move |&(ny, nx)| y < size && x < size && ny < size && nx < size)
    }

    /// Orthogonally adjacent board cells, in the order up, right, down, left.
    pub fn cell_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + use<> {
        let dimension = self.dimension();
        let (row, col) = coord;
        [
            (row.wrapping_sub(1), col),
            (row, col.saturating_add(1)),
            (row.saturating_add(1), col),
            (row, col.wrapping_sub(1)),
        ]
        .into_iter()
        .filter(move |&(r, c)| {
            row < dimension && col < dimension && r < dimension && c < dimension
        })
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension() {
            for col in 0..self.dimension() {
                write!(f, "{}", self[(row, col)].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
