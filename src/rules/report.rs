//! What each engine operation hands back to the host.

use serde::Serialize;

use super::events::RoomEvent;
use crate::cards::{Card, Hand};
use crate::core::RoundOutcome;
use crate::dealers::{DealerKind, TrickOutcome};
use crate::items::ItemKind;

/// A new room was dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DealReport {
    pub room: u32,
    pub dealer: DealerKind,
    pub player_hand: Hand,
    /// The dealer's face-up card. The second card stays hidden.
    pub dealer_upcard: Option<Card>,
    pub event: Option<RoomEvent>,
    pub message: String,
}

/// The player took a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HitReport {
    /// The card drawn by the hit (a trick may since have swapped it out).
    pub card: Card,
    /// Hand after the hit and any trick, before a game-over reset.
    pub player_hand: Hand,
    pub player_value: u32,
    pub trick: Option<TrickOutcome>,
    /// Over 21 and penalized.
    pub busted: bool,
    /// Over 21 but absorbed by Extra Hit.
    pub bust_suppressed: bool,
    /// The room is settled; only a deal continues the game.
    pub round_over: bool,
    /// Health ran out and the run was reset.
    pub game_over: bool,
    pub message: String,
}

/// The player stood and the room was resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StandReport {
    /// Dealer's full hand after drawing.
    pub dealer_hand: Hand,
    pub player_value: u32,
    pub dealer_value: u32,
    pub outcome: RoundOutcome,
    pub game_over: bool,
    /// The next room, when a win or push started one.
    pub next_room: Option<DealReport>,
    /// Outcome message for this room.
    pub message: String,
}

impl StandReport {
    /// Whether a new room auto-started.
    #[must_use]
    pub fn advanced(&self) -> bool {
        self.next_room.is_some()
    }
}

/// What an item did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ItemEffect {
    /// The next bust this room costs nothing.
    ExtraHitArmed,
    /// The dealer's hidden card is now face up.
    HoleCardRevealed(Card),
    /// Announced only; the item has no mechanical effect.
    Unimplemented,
}

/// An item was used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub item: ItemKind,
    pub effect: ItemEffect,
    pub message: String,
}
