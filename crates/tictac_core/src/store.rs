//! The board state store.
//!
//! [`BoardStore`] owns the authoritative board, the mark to move next
//! and the move history of the current game. Every mutation goes
//! through [`BoardStore::place_mark`] or [`BoardStore::reset`].

use crate::action::{Move, MoveError};
use crate::events::{GameEvent, Observers, SubscriptionId};
use crate::invariants::{InvariantSet, StoreInvariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, GameSnapshot, Mark, Outcome};
use tracing::{debug, error, info, instrument};

/// Owns a single game's state and gatekeeps all mutation.
///
/// States are *in progress* and *decided*. Placements are accepted only
/// while the game is in progress; once decided, only [`reset`] changes
/// anything.
///
/// [`reset`]: BoardStore::reset
#[derive(Debug, Default)]
pub struct BoardStore {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
    observers: Observers,
}

impl BoardStore {
    /// Creates a store with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current mark at `index` (0-8, row-major).
    ///
    /// On success the mark is written, the turn passes to the other
    /// mark, subscribers are notified and the new outcome is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index > 8`
    /// - [`MoveError::GameOver`] if the game is already decided
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark
    ///
    /// A rejected placement leaves the store untouched and notifies no one.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;

        if self.current_outcome().is_decided() {
            debug!(%position, "Rejected placement, game over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Rejected placement, cell occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let action = Move::new(self.to_move, position);
        self.board.set(position, Cell::Occupied(action.mark));
        self.history.push(action);
        self.to_move = self.to_move.opponent();
        self.check_invariants();

        let outcome = self.current_outcome();
        debug!(%action, %outcome, "Move accepted");

        self.observers.notify(&GameEvent::MoveMade(action));
        if outcome.is_decided() {
            info!(%outcome, moves = self.history.len(), "Game decided");
            self.observers.notify(&GameEvent::GameOver(outcome));
        }

        Ok(outcome)
    }

    /// Restores an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting board");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.history.clear();
        self.observers.notify(&GameEvent::Restarted);
    }

    /// Evaluates the current board.
    pub fn current_outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns positions that would accept a placement right now.
    ///
    /// Empty once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_outcome().is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Captures board, turn and outcome for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            to_move: self.to_move,
            outcome: self.current_outcome(),
        }
    }

    /// Registers a callback invoked after every state change.
    ///
    /// Callbacks run synchronously, in subscription order, after the
    /// change they describe has been applied.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = self.observers.add(Box::new(callback));
        debug!(?id, subscribers = self.observers.len(), "Subscriber added");
        id
    }

    /// Removes a subscription. Returns false if `id` was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    fn check_invariants(&self) {
        let result = StoreInvariants::check_all(self);
        if let Err(violations) = &result {
            for v in violations {
                error!(description = %v.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Store invariants violated");
    }
}
