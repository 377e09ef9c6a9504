//! The 52-card deck.
//!
//! A `Deck` is a stack: the top card is the end of the vector. Drawn cards
//! are gone until a new deck is built.

use serde::Serialize;
use tracing::warn;

use super::card::{Card, Rank, Suit};
use crate::core::{GameError, GameRng};

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// Ordered stack of cards (top = end of vec).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Standard 52-card deck, unshuffled, suit-major then rank-minor:
    /// ♤ A..K, ♡ A..K, ♢ A..K, ♧ A..K.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Fresh deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Stacked deck: `cards[0]` is drawn first.
    #[must_use]
    pub fn from_top(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Uniformly reorder the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or_else(|| {
            warn!("draw attempted on an empty deck");
            GameError::EmptyDeck
        })
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
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

    /// Iterate from the bottom card to the top card.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_build_is_complete_and_unique() {
        let deck = Deck::build();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<_> = deck.iter().map(|c| (c.suit(), c.rank())).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_build_order_is_suit_major() {
        let deck = Deck::build();
        let cards: Vec<_> = deck.iter().copied().collect();

        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards[12], Card::new(Rank::King, Suit::Spades));
        assert_eq!(cards[13], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(cards[51], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = Deck::build();
        let top = *deck.peek().unwrap();

        assert_eq!(deck.draw(), Ok(top));
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(deck.iter().all(|c| *c != top));
    }

    #[test]
    fn test_draw_empty_is_error() {
        let mut deck = Deck::from_top([Card::new(Rank::Two, Suit::Clubs)]);
        assert!(deck.draw().is_ok());
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    }

    #[test]
    fn test_from_top_draw_order() {
        let first = Card::new(Rank::Ten, Suit::Spades);
        let second = Card::new(Rank::Nine, Suit::Hearts);
        let mut deck = Deck::from_top([first, second]);

        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let a = Deck::shuffled(&mut GameRng::new(11));
        let b = Deck::shuffled(&mut GameRng::new(11));
        let c = Deck::shuffled(&mut GameRng::new(12));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::build());
    }
}
