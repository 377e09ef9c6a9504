//! # rogue-blackjack
//!
//! A roguelike blackjack round engine. The player walks through numbered
//! rooms, each guarded by a dealer with a personality and a trick. Winning
//! a room earns gold and opens the next one; losing costs health, and a run
//! ends when health reaches zero.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine never renders or reads input. Hosts
//!    send `Command`s and render `StateView` snapshots.
//!
//! 2. **Deterministic**: Every random choice (shuffles, dealers, tricks,
//!    room events) draws from one seeded `GameRng` held in the state, so a
//!    seed replays a whole session.
//!
//! 3. **Fail Without Side Effects**: A refused operation returns a
//!    `GameError` and leaves the state as it was.
//!
//! ## Modules
//!
//! - `core`: state, player and dealer records, RNG, configuration, errors
//! - `cards`: cards, the deck, hand scoring
//! - `dealers`: dealer profiles and tricks
//! - `items`: the item catalog
//! - `rules`: the round engine, room events, commands, and views
//!
//! ## Example
//!
//! ```
//! use rogue_blackjack::{Command, GameConfig, Response, RoundEngine};
//!
//! let engine = RoundEngine::new(GameConfig::default()).unwrap();
//! let mut state = engine.create_state(42);
//!
//! let response = engine.apply(&mut state, Command::Deal);
//! assert!(matches!(response, Response::Dealt(_)));
//! assert_eq!(state.player().hand.len(), 2);
//! ```

pub mod cards;
pub mod core;
pub mod dealers;
pub mod items;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DealerState, GameConfig, GameError, GameRng, GameRngState, GameState,
    PlayerState, RoundOutcome, RoundPhase, RoundRecord,
};

pub use crate::cards::{hand_value, Card, Deck, Hand, Rank, Suit, BLACKJACK, DECK_SIZE};

pub use crate::dealers::{apply_trick, DealerKind, DealerProfile, DealerRegistry, TrickEffect, TrickOutcome};

pub use crate::items::{Item, ItemCatalog, ItemKind};

pub use crate::rules::{
    Command, DealReport, HitReport, ItemEffect, ItemReport, ParseCommandError, Response,
    RoomEvent, RoundEngine, StandReport, StateView,
};
