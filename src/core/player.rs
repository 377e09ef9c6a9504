//! Player and dealer state.
//!
//! ## PlayerState
//!
//! Hand, health, gold and the item inventory. Everything except the hand
//! carries over between rooms; a game over resets it all.
//!
//! ## DealerState
//!
//! The dealer's hand and which personality is dealing this room.

use serde::Serialize;

use crate::cards::Hand;
use crate::dealers::DealerKind;
use crate::items::ItemKind;

/// The player's run state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    /// Current hand.
    pub hand: Hand,

    /// Remaining health. A game over happens at zero or below.
    pub health: i32,

    /// Gold collected. Never negative.
    pub gold: u32,

    /// Items found, in order. Duplicates allowed.
    pub items: Vec<ItemKind>,

    /// The item used this room, if any.
    pub used_item: Option<ItemKind>,

    /// Whether an active Extra Hit has already absorbed a bust this room.
    pub extra_hit_spent: bool,
}

impl PlayerState {
    /// Fresh player with `health`, no gold and no items.
    #[must_use]
    pub fn new(health: i32) -> Self {
        Self {
            hand: Hand::new(),
            health,
            gold: 0,
            items: Vec::new(),
            used_item: None,
            extra_hit_spent: false,
        }
    }

    /// Check if the player holds at least one `item`.
    #[must_use]
    pub fn holds(&self, item: ItemKind) -> bool {
        self.items.contains(&item)
    }

    pub fn grant_item(&mut self, item: ItemKind) {
        self.items.push(item);
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Deduct health and return what remains.
    pub fn lose_health(&mut self, amount: i32) -> i32 {
        self.health -= amount;
        self.health
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// True when Extra Hit is the room's item and has not absorbed a bust yet.
    #[must_use]
    pub fn extra_hit_ready(&self) -> bool {
        self.used_item == Some(ItemKind::ExtraHit) && !self.extra_hit_spent
    }

    /// Clear per-room item state.
    pub fn start_room(&mut self) {
        self.used_item = None;
        self.extra_hit_spent = false;
    }

    /// Full reset after a game over.
    pub fn reset(&mut self, health: i32) {
        *self = Self::new(health);
    }
}

/// The dealer's side of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DealerState {
    pub hand: Hand,
    /// Personality dealing this room. `None` before the first deal.
    pub profile: Option<DealerKind>,
}

impl DealerState {
    pub fn clear(&mut self) {
        self.hand.clear();
        self.profile = None;
    }
}
