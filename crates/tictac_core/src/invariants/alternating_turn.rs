//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{BoardStore, Mark};

/// Invariant: marks alternate and the turn indicator agrees with history.
///
/// The first move is always X. After `n` moves, X is to move when `n`
/// is even and O when it is odd.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardStore> for AlternatingTurnInvariant {
    fn holds(store: &BoardStore) -> bool {
        let history = store.history();

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };

        store.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
