//! State-change notifications.

use crate::action::Move;
use crate::types::Outcome;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Notification sent to subscribers after the store changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was accepted.
    MoveMade(Move),
    /// The last move decided the game.
    GameOver(Outcome),
    /// The board was reset.
    Restarted,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&GameEvent)>;

/// Registered subscriber callbacks, in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn notify(&mut self, event: &GameEvent) {
        trace!(?event, subscribers = self.callbacks.len(), "Notifying subscribers");
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
