//! Cards, the deck, and hand scoring.
//!
//! ## Key Types
//!
//! - `Card`: immutable suit/rank with a display glyph
//! - `Deck`: 52-card stack, shuffled through the game RNG
//! - `Hand`: cards held by player or dealer, scored with `hand_value`

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit, CARD_BACK};
pub use deck::{Deck, DECK_SIZE};
pub use hand::{hand_value, Hand, BLACKJACK};
