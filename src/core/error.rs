//! Engine error types.
//!
//! Every error is recoverable: an operation that fails leaves the
//! `GameState` exactly as it was. Hosts that go through
//! `RoundEngine::apply` never see these as faults, only as a rejected
//! response.

use thiserror::Error;

/// Why an engine operation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A draw was attempted with no cards left in the deck.
    #[error("the deck is empty")]
    EmptyDeck,

    /// The item is not held, unknown, or an item was already used this room.
    #[error("cannot use item: {0}")]
    InvalidItemUse(String),

    /// Hit, stand or item use outside a live round.
    #[error("no hand is in play")]
    NoActiveHand,
}
