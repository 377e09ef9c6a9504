//! Item catalog for lookup by kind or by display name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::GameRng;

/// The three power-up items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// The next bust this room costs no health.
    ExtraHit,
    /// Reveals the dealer's hidden card.
    Peek,
    /// Announced as a card swap; has no mechanical effect yet.
    Reroll,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::ExtraHit, ItemKind::Peek, ItemKind::Reroll];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ItemKind::ExtraHit => "Extra Hit",
            ItemKind::Peek => "Peek",
            ItemKind::Reroll => "Re-roll",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static item data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    pub kind: ItemKind,
    pub name: &'static str,
    pub description: &'static str,
}

impl Item {
    const fn new(kind: ItemKind, description: &'static str) -> Self {
        Self {
            kind,
            name: kind.name(),
            description,
        }
    }
}

/// Fixed catalog of items.
///
/// ## Example
///
/// ```
/// use rogue_blackjack::items::{ItemCatalog, ItemKind};
///
/// let catalog = ItemCatalog::standard();
/// assert_eq!(catalog.find_by_name("peek"), Some(ItemKind::Peek));
/// assert_eq!(catalog.get(ItemKind::Reroll).name, "Re-roll");
/// ```
#[derive(Clone, Debug)]
pub struct ItemCatalog {
    items: Vec<Item>,
    by_name: FxHashMap<String, ItemKind>,
}

impl ItemCatalog {
    /// The three standard items.
    #[must_use]
    pub fn standard() -> Self {
        let items = vec![
            Item::new(ItemKind::ExtraHit, "Hit without busting once per room"),
            Item::new(ItemKind::Peek, "See dealer's hidden card"),
            Item::new(ItemKind::Reroll, "Swap a card once per room"),
        ];
        let by_name = items
            .iter()
            .map(|item| (normalize(item.name), item.kind))
            .collect();

        Self { items, by_name }
    }

    /// Get an item by kind.
    #[must_use]
    pub fn get(&self, kind: ItemKind) -> &Item {
        // Every kind is registered by `standard`, in `ItemKind::ALL` order.
        &self.items[kind as usize]
    }

    /// Look up an item by display name, ignoring case, spaces and dashes.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<ItemKind> {
        self.by_name.get(&normalize(name)).copied()
    }

    /// Uniformly pick an item.
    pub fn random(&self, rng: &mut GameRng) -> ItemKind {
        self.items[rng.gen_index(self.items.len())].kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = ItemCatalog::standard();
        assert_eq!(catalog.len(), 3);

        for kind in ItemKind::ALL {
            assert_eq!(catalog.get(kind).kind, kind);
        }
        assert_eq!(catalog.get(ItemKind::ExtraHit).description, "Hit without busting once per room");
    }

    #[test]
    fn test_find_by_name() {
        let catalog = ItemCatalog::standard();

        assert_eq!(catalog.find_by_name("Extra Hit"), Some(ItemKind::ExtraHit));
        assert_eq!(catalog.find_by_name("extra-hit"), Some(ItemKind::ExtraHit));
        assert_eq!(catalog.find_by_name("Re-roll"), Some(ItemKind::Reroll));
        assert_eq!(catalog.find_by_name("reroll"), Some(ItemKind::Reroll));
        assert_eq!(catalog.find_by_name("Potion"), None);
    }

    #[test]
    fn test_random_covers_catalog() {
        let catalog = ItemCatalog::standard();
        let mut rng = GameRng::new(8);
        let mut seen = Vec::new();

        for _ in 0..200 {
            let kind = catalog.random(&mut rng);
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }

        assert_eq!(seen.len(), 3);
    }
}
