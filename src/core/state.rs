//! Game state: everything the round engine reads and writes.
//!
//! ## GameState
//!
//! One owned struct passed by `&mut` into every engine operation:
//! - Deck, player, dealer
//! - Room number, narrative message, room event, hole-card flag
//! - Round phase
//! - The session RNG
//! - Room history
//!
//! Hosts get read-only accessors; only `RoundEngine` mutates.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{DealerState, PlayerState};
use super::rng::{GameRng, GameRngState};
use crate::cards::Deck;
use crate::dealers::DealerKind;
use crate::rules::RoomEvent;

/// Where the current room stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No hand dealt (new session or after a game over).
    #[default]
    Idle,
    /// Both sides hold cards; the player may hit, stand or use an item.
    InRound,
    /// Stand was called; the dealer is drawing.
    DealerResolving,
    /// The room's outcome is decided; waiting for the next deal.
    Settled,
}

/// How a room ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Dealer busted or the player had the higher total.
    Win,
    /// The dealer had the higher total.
    Loss,
    /// Equal totals.
    Push,
    /// The player went over 21 on a hit.
    Bust,
}

impl RoundOutcome {
    /// Win and push clear the room; loss and bust replay it.
    #[must_use]
    pub fn clears_room(self) -> bool {
        matches!(self, RoundOutcome::Win | RoundOutcome::Push)
    }
}

/// A settled room, kept for history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub room: u32,
    pub dealer: DealerKind,
    pub outcome: RoundOutcome,
    pub player_value: u32,
    pub dealer_value: u32,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) player: PlayerState,
    pub(crate) dealer: DealerState,
    pub(crate) room: u32,
    pub(crate) message: String,
    pub(crate) room_event: Option<RoomEvent>,
    pub(crate) reveal_hole_card: bool,
    pub(crate) phase: RoundPhase,
    pub(crate) rng: GameRng,
    /// Persistent vector so snapshots of the state stay cheap to clone.
    pub(crate) history: Vector<RoundRecord>,
}

/// Greeting shown before the first deal.
pub const WELCOME_MESSAGE: &str = "Welcome to Blackjack Roguelike!";

impl GameState {
    /// Idle state at room 1 with a shuffled deck.
    #[must_use]
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Idle state drawing from an existing RNG.
    #[must_use]
    pub fn with_rng(config: &GameConfig, mut rng: GameRng) -> Self {
        Self {
            deck: Deck::shuffled(&mut rng),
            player: PlayerState::new(config.starting_health),
            dealer: DealerState::default(),
            room: 1,
            message: WELCOME_MESSAGE.to_string(),
            room_event: None,
            reveal_hole_card: false,
            phase: RoundPhase::Idle,
            rng,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn dealer(&self) -> &DealerState {
        &self.dealer
    }

    /// Dealer dealing the current room.
    #[must_use]
    pub fn dealer_kind(&self) -> Option<DealerKind> {
        self.dealer.profile
    }

    /// Current room number (starts at 1).
    #[must_use]
    pub fn room(&self) -> u32 {
        self.room
    }

    /// Latest narrative message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// What the player found on entering this room.
    #[must_use]
    pub fn room_event(&self) -> Option<&RoomEvent> {
        self.room_event.as_ref()
    }

    /// Whether the dealer's second card is face up.
    #[must_use]
    pub fn hole_card_revealed(&self) -> bool {
        self.reveal_hole_card
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether hit, stand and items are currently accepted.
    #[must_use]
    pub fn in_round(&self) -> bool {
        self.phase == RoundPhase::InRound
    }

    /// Settled rooms, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// RNG position, for reproducing the session from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub(crate) fn record(&mut self, record: RoundRecord) {
        self.history.push_back(record);
    }
}
