//! Playing cards.
//!
//! A `Card` is an immutable suit/rank pair plus the Unicode playing-card
//! glyph used to display it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Face-down card glyph.
pub const CARD_BACK: char = '\u{1F0A0}';

/// Card suit, in deck-building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♤',
            Suit::Hearts => '♡',
            Suit::Diamonds => '♢',
            Suit::Clubs => '♧',
        }
    }

    /// First code point of this suit's block in the Playing Cards range.
    const fn glyph_base(self) -> u32 {
        match self {
            Suit::Spades => 0x1F0A0,
            Suit::Hearts => 0x1F0B0,
            Suit::Diamonds => 0x1F0C0,
            Suit::Clubs => 0x1F0D0,
        }
    }
}

/// Card rank, Ace low in deck-building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in deck-building order (A..K).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Blackjack value with aces counted high.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u32,
        }
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }

    /// Display symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Offset within a suit's glyph block. The Knight slot (0xC) is skipped.
    const fn glyph_offset(self) -> u32 {
        match self {
            Rank::Queen => 0xD,
            Rank::King => 0xE,
            r => r as u32,
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    glyph: char,
}

impl Card {
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let glyph = char::from_u32(suit.glyph_base() + rank.glyph_offset()).unwrap_or(CARD_BACK);
        Self { suit, rank, glyph }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Unicode playing-card glyph.
    #[must_use]
    pub fn glyph(&self) -> char {
        self.glyph
    }
}

impl fmt::Display for Card {
    /// Format like `A♤`, `10♡`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}
