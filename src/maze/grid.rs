use std::sync::mpsc::Sender;

use super::{Coord, cell::GridCell};

/// A change notification emitted by a [`Grid`] to whoever renders it.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// The grid was (re)allocated with every cell set to `cell`.
    Initial { cell: GridCell, width: u16, height: u16 },
    /// The cell at `coord` (row, col) changed from `old` to `new`.
    Update {
        coord: Coord,
        old: GridCell,
        new: GridCell,
    },
}

/// Square row-major cell storage. Every effective write is mirrored to the optional
/// event sender.
pub struct Grid {
    cells: Vec<GridCell>,
    side: u16,
    events: Option<Sender<GridEvent>>,
}

impl Grid {
    /// Allocates a `side x side` grid filled with `cell` and announces it on `events`.
    pub fn square(side: u16, cell: GridCell, events: Option<Sender<GridEvent>>) -> Self {
        let grid = Grid {
            cells: vec![cell; side as usize * side as usize],
            side,
            events,
        };
        grid.emit(GridEvent::Initial {
            cell,
            width: side,
            height: side,
        });
        grid
    }

    /// Forwards an event to the listener. A dropped receiver is not an error.
    fn emit(&self, event: GridEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }

    /// Cells along one side.
    pub fn side(&self) -> u16 {
        self.side
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn is_in_bounds(&self, (row, col): Coord) -> bool {
        row < self.side && col < self.side
    }

    pub fn is_boundary(&self, (row, col): Coord) -> bool {
        let last = self.side - 1;
        row == 0 || col == 0 || row == last || col == last
    }

    fn offset(&self, (row, col): Coord) -> usize {
        debug_assert!(self.is_in_bounds((row, col)), "({row}, {col}) is off the grid");
        row as usize * self.side as usize + col as usize
    }

    /// Writes `cell` at `coord`. Returns whether the cell actually changed.
    pub fn set(&mut self, coord: Coord, cell: GridCell) -> bool {
        let offset = self.offset(coord);
        let old = std::mem::replace(&mut self.cells[offset], cell);
        if old == cell {
            return false;
        }
        self.emit(GridEvent::Update {
            coord,
            old,
            new: cell,
        });
        true
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}
