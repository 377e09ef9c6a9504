//! Read-only snapshot of the table for hosts.
//!
//! `StateView` is what a UI renders: player stats, both hands (the dealer's
//! hole card face down until revealed), the dealer's profile, and the
//! narrative message. It serializes to JSON for non-Rust hosts.

use serde::Serialize;
use std::fmt;

use crate::cards::{Card, Hand, CARD_BACK};
use crate::core::{GameState, RoundPhase};

/// Dealer identity shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DealerView {
    pub name: &'static str,
    pub description: &'static str,
}

/// Snapshot of everything a host displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateView {
    pub room: u32,
    pub phase: RoundPhase,
    pub health: i32,
    pub gold: u32,
    pub items: Vec<&'static str>,
    pub used_item: Option<&'static str>,
    pub deck_remaining: usize,
    pub dealer: Option<DealerView>,
    pub player_hand: Hand,
    pub player_value: u32,
    /// `None` marks the face-down hole card.
    pub dealer_cards: Vec<Option<Card>>,
    /// Only known once the hole card is revealed.
    pub dealer_value: Option<u32>,
    pub room_event: Option<String>,
    pub message: String,
}

impl StateView {
    /// Capture the current table.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let player = state.player();
        let dealer_hand = &state.dealer().hand;
        let revealed = state.hole_card_revealed();

        let dealer_cards = dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| if i == 1 && !revealed { None } else { Some(*card) })
            .collect();

        Self {
            room: state.room(),
            phase: state.phase(),
            health: player.health,
            gold: player.gold,
            items: player.items.iter().map(|item| item.name()).collect(),
            used_item: player.used_item.map(|item| item.name()),
            deck_remaining: state.deck_size(),
            dealer: state.dealer_kind().map(|kind| DealerView {
                name: kind.name(),
                description: kind.description(),
            }),
            player_hand: player.hand.clone(),
            player_value: player.hand.value(),
            dealer_cards,
            dealer_value: revealed.then(|| dealer_hand.value()),
            room_event: state.room_event().map(ToString::to_string),
            message: state.message().to_string(),
        }
    }
}

impl fmt::Display for StateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = if self.items.is_empty() {
            "None".to_string()
        } else {
            self.items.join(", ")
        };
        writeln!(
            f,
            "Room {} | Health {} | Gold {} | Items: {}",
            self.room, self.health, self.gold, items
        )?;

        if let Some(dealer) = &self.dealer {
            writeln!(f, "Dealer: {} ({})", dealer.name, dealer.description)?;
        }
        if let Some(event) = &self.room_event {
            writeln!(f, "{event}")?;
        }

        if self.deck_remaining > 0 {
            writeln!(f, "Deck ({} left)", self.deck_remaining)?;
        } else {
            writeln!(f, "No cards remaining")?;
        }

        let dealer_value = self
            .dealer_value
            .map_or_else(|| "?".to_string(), |v| v.to_string());
        let dealer_cards: Vec<String> = self
            .dealer_cards
            .iter()
            .map(|card| card.map_or(CARD_BACK, |c| c.glyph()).to_string())
            .collect();
        writeln!(f, "Dealer ({dealer_value}): {}", dealer_cards.join(" "))?;
        writeln!(f, "You ({}): {}", self.player_value, self.player_hand.glyphs())?;
        write!(f, "{}", self.message)
    }
}
