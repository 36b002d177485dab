use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single cell on the board. The four states are mutually exclusive.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// A blocked cell: a post, an uncarved connector or the outer rim.
    #[default]
    Wall,
    /// A walkable cell: a room or a carved connector.
    Path,
    /// The single start marker, placed on the left or right rim.
    Entrance,
    /// The single goal marker, placed on the left or right rim.
    Exit,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether a solver may step onto this cell.
    pub fn is_walkable(self) -> bool {
        matches!(self, GridCell::Path | GridCell::Exit)
    }

    /// Plain single-character form, used for logs and text dumps.
    pub fn symbol(self) -> char {
        match self {
            GridCell::Wall => '#',
            GridCell::Path => ' ',
            GridCell::Entrance => 'S',
            GridCell::Exit => 'E',
        }
    }

    /// Terminal tile for the cell. `on_route` highlights cells of a solution path,
    /// except the two markers which always keep their own tile.
    pub fn styled(self, on_route: bool) -> StyledContent<&'static str> {
        let styled_symbol = match self {
            GridCell::Entrance => "🟩".with(Color::Green),
            GridCell::Exit => "🟥".with(Color::Red),
            _ if on_route => "🟨".with(Color::Yellow),
            GridCell::Path => "  ".with(Color::Reset),
            GridCell::Wall => "⬜".with(Color::White),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            debug_assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        styled_symbol
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled(false))
    }
}
