//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules hold no state; the store
//! calls them after every move and the UI calls them to highlight
//! the winning line.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, winning_line};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// The first complete line in [`WIN_LINES`] order names the winner.
/// Without a complete line, a full board is a draw and anything else
/// is still in progress.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = winning_line(board) {
        Outcome::Winner(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
