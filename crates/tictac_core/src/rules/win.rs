//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a winning alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of this line.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark filling all three positions, if any.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let cell = board.get(a);
        match cell {
            Cell::Occupied(mark) if cell == board.get(b) && cell == board.get(c) => Some(mark),
            _ => None,
        }
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine([TopLeft, TopCenter, TopRight]),
        WinLine([MiddleLeft, Center, MiddleRight]),
        WinLine([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinLine([TopLeft, MiddleLeft, BottomLeft]),
        WinLine([TopCenter, Center, BottomCenter]),
        WinLine([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinLine([TopLeft, Center, BottomRight]),
        WinLine([TopRight, Center, BottomLeft]),
    ]
};

/// Finds the first complete line on the board.
///
/// Returns the owning mark together with the line, `None` if no line
/// is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}
