//! History consistency invariant: the board is the replay of its moves.

use super::Invariant;
use crate::{Board, BoardStore, Cell};

/// Invariant: replaying the move history onto an empty board yields the
/// current board.
///
/// This also rules out a cell being written twice or reverting to empty.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardStore> for HistoryConsistentInvariant {
    fn holds(store: &BoardStore) -> bool {
        let mut replayed = Board::new();
        for action in store.history() {
            if !replayed.is_empty(action.position) {
                return false;
            }
            replayed.set(action.position, Cell::Occupied(action.mark));
        }
        replayed == *store.board()
    }

    fn description() -> &'static str {
        "Board matches replayed move history"
    }
}
