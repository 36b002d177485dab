use std::{collections::HashSet, io::Write};

use crossterm::{cursor, queue, style};

use crate::maze::{Coord, GridCell, Maze};

/// Queues the draw commands for the whole board at `origin` (terminal column, row).
///
/// Cells on `route` are drawn with the route tile. The caller flushes `out`.
pub fn draw_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    route: Option<&[Coord]>,
    origin: (u16, u16),
) -> std::io::Result<()> {
    let on_route = route
        .map(|r| r.iter().copied().collect::<HashSet<_>>())
        .unwrap_or_default();
    for row in 0..maze.dimension() {
        queue!(out, cursor::MoveTo(origin.0, origin.1 + row))?;
        for col in 0..maze.dimension() {
            let cell = maze[(row, col)];
            queue!(
                out,
                style::PrintStyledContent(cell.styled(on_route.contains(&(row, col))))
            )?;
        }
    }
    Ok(())
}

/// Queues the draw command for a single cell, e.g. while replaying grid events or a trace.
pub fn draw_cell<W: Write>(
    out: &mut W,
    coord: Coord,
    cell: GridCell,
    on_route: bool,
    origin: (u16, u16),
) -> std::io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(
            origin.0 + coord.1 * GridCell::CELL_WIDTH,
            origin.1 + coord.0
        ),
        style::PrintStyledContent(cell.styled(on_route))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_overlay() {
        let maze = Maze::from_rows(&["#####", "S   E", "# # #", "#   #", "#####"]).unwrap();
        let route = [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)];
        let mut out = Vec::new();
        draw_maze(&mut out, &maze, Some(&route), (0, 0)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("🟩").count(), 1);
        assert_eq!(text.matches("🟥").count(), 1);
        assert_eq!(text.matches("🟨").count(), 3);
        assert_eq!(text.matches("⬜").count(), 15);
    }

    #[test]
    fn test_no_route() {
        let maze = Maze::from_rows(&["###", "S E", "###"]).unwrap();
        let mut out = Vec::new();
        draw_maze(&mut out, &maze, None, (2, 1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("🟨").count(), 0);
        assert_eq!(text.matches("⬜").count(), 6);
    }

    #[test]
    fn test_draw_cell() {
        let mut out = Vec::new();
        draw_cell(&mut out, (1, 1), GridCell::Path, true, (0, 0)).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("🟨"));
    }
}
