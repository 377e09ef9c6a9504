//! Core engine types: state, players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use player::{DealerState, PlayerState};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, RoundOutcome, RoundPhase, RoundRecord, WELCOME_MESSAGE};
