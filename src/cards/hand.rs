//! Hands and blackjack scoring.

use serde::Serialize;
use smallvec::SmallVec;

use super::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u32 = 21;

/// Total and softness of a set of cards.
///
/// Aces start at 11; while the total is over 21 and an ace still counts 11,
/// one ace is demoted to 1. The hand is soft if an ace still counts 11.
fn evaluate(cards: &[Card]) -> (u32, bool) {
    let mut total = 0;
    let mut high_aces = 0;

    for card in cards {
        if card.rank().is_ace() {
            high_aces += 1;
        }
        total += card.rank().value();
    }

    while total > BLACKJACK && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    (total, high_aces > 0)
}

/// Blackjack total of `cards`, resolving aces to avoid busting when possible.
///
/// May exceed 21 when no ace demotion can save the hand.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u32 {
    evaluate(cards).0
}

/// Cards held by the player or the dealer, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Replace the most recently drawn card, returning the one removed.
    ///
    /// On an empty hand the card is simply added.
    pub fn replace_last(&mut self, card: Card) -> Option<Card> {
        let removed = self.cards.pop();
        self.cards.push(card);
        removed
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Blackjack total.
    #[must_use]
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// True while an ace still counts as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Card glyphs separated by spaces.
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.cards
            .iter()
            .map(|c| c.glyph().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
