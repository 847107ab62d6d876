//! Tic-tac-toe game core.
//!
//! Two pieces live here:
//!
//! - **Rules**: [`rules::evaluate`] is a pure function from a [`Board`]
//!   to an [`Outcome`]. Win lines are checked in a fixed order (rows,
//!   columns, diagonals) and the first complete line wins.
//! - **Store**: [`BoardStore`] owns the board and the mark to move next.
//!   It is the only thing allowed to mutate a board, and it notifies
//!   subscribers with a [`GameEvent`] after every state change.
//!
//! # Example
//!
//! ```
//! use tictac_core::{BoardStore, Mark, Outcome};
//!
//! let mut store = BoardStore::new();
//! for index in [0, 4, 1, 5, 2] {
//!     store.place_mark(index)?;
//! }
//! assert_eq!(store.current_outcome(), Outcome::Winner(Mark::X));
//! # Ok::<(), tictac_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod events;
pub mod invariants;
mod position;
pub mod rules;
mod store;
mod types;

pub use action::{Move, MoveError};
pub use events::{GameEvent, SubscriptionId};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, evaluate, is_full, winning_line};
pub use store::BoardStore;
pub use types::{Board, BoardParseError, Cell, GameSnapshot, Mark, Outcome};
