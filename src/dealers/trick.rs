//! Dealer tricks.
//!
//! A trick runs once per player hit, after the drawn card joins the player's
//! hand. Each dealer kind has one trick; they are dispatched through
//! [`apply_trick`] rather than stored as closures.
//!
//! ## Tricks
//!
//! - Sneaky Sam: player at 18+ gets their last card swapped for a fresh one
//! - Cautious Cathy: sometimes peeks at the player's hand (message only)
//! - Random Rick: sometimes draws an extra card for himself
//! - Bold Betty: none
//! - Shifty Sharon: sometimes reshuffles the remaining deck

use serde::Serialize;
use tracing::{debug, warn};

use super::registry::DealerKind;
use crate::cards::{Card, Deck, Hand};
use crate::core::GameRng;

/// Player total at which Sneaky Sam swaps the last card.
pub const SNEAKY_SAM_THRESHOLD: u32 = 18;

/// What a trick did to the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TrickEffect {
    /// The player's last card was discarded and replaced.
    SwappedPlayerCard { removed: Option<Card>, drawn: Card },
    /// The dealer looked at the player's hand.
    PeekedAtHand,
    /// The dealer added a card to his own hand.
    DealerDrew(Card),
    /// The remaining deck was reshuffled.
    Reshuffled,
}

/// A trick that fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrickOutcome {
    pub dealer: DealerKind,
    pub effect: TrickEffect,
    pub message: String,
}

impl TrickOutcome {
    fn new(dealer: DealerKind, effect: TrickEffect, message: impl Into<String>) -> Self {
        Self {
            dealer,
            effect,
            message: message.into(),
        }
    }
}

/// Apply `kind`'s trick to the table.
///
/// Returns `None` when the trick does not fire, including when it needs a
/// card and the deck is empty. Chance rolls are independent per call.
pub fn apply_trick(
    kind: DealerKind,
    player_hand: &mut Hand,
    dealer_hand: &mut Hand,
    deck: &mut Deck,
    rng: &mut GameRng,
) -> Option<TrickOutcome> {
    let outcome = match kind {
        DealerKind::SneakySam => {
            if player_hand.value() < SNEAKY_SAM_THRESHOLD {
                return None;
            }
            let drawn = draw_for_trick(kind, deck)?;
            let removed = player_hand.replace_last(drawn);
            TrickOutcome::new(
                kind,
                TrickEffect::SwappedPlayerCard { removed, drawn },
                "Sneaky Sam swapped your last card!",
            )
        }
        DealerKind::CautiousCathy => {
            if !rng.gen_bool(kind.trick_chance()) {
                return None;
            }
            TrickOutcome::new(
                kind,
                TrickEffect::PeekedAtHand,
                format!("Cathy peeks at your hand: {}", player_hand.glyphs()),
            )
        }
        DealerKind::RandomRick => {
            if !rng.gen_bool(kind.trick_chance()) {
                return None;
            }
            let drawn = draw_for_trick(kind, deck)?;
            dealer_hand.push(drawn);
            TrickOutcome::new(
                kind,
                TrickEffect::DealerDrew(drawn),
                "Random Rick added a surprise card for himself!",
            )
        }
        DealerKind::BoldBetty => return None,
        DealerKind::ShiftySharon => {
            if !rng.gen_bool(kind.trick_chance()) {
                return None;
            }
            deck.shuffle(rng);
            TrickOutcome::new(kind, TrickEffect::Reshuffled, "Shifty Sharon reshuffled the deck!")
        }
    };

    debug!(dealer = %kind, effect = ?outcome.effect, "dealer trick fired");
    Some(outcome)
}

fn draw_for_trick(kind: DealerKind, deck: &mut Deck) -> Option<Card> {
    match deck.draw() {
        Ok(card) => Some(card),
        Err(_) => {
            warn!(dealer = %kind, "trick skipped: deck is empty");
            None
        }
    }
}
