//! Round rules.
//!
//! `RoundEngine` drives the room loop: deal, hit, stand, items, and the
//! room events rolled on each deal. Hosts either call the transitions
//! directly or send `Command`s through `RoundEngine::apply`.

pub mod command;
pub mod engine;
pub mod events;
pub mod report;
pub mod view;

pub use command::{Command, ParseCommandError, Response};
pub use engine::{RoundEngine, EMPTY_DECK_MESSAGE, GAME_OVER_MESSAGE};
pub use events::{roll_room_event, RoomEvent};
pub use report::{DealReport, HitReport, ItemEffect, ItemReport, StandReport};
pub use view::{DealerView, StateView};
