//! Room events rolled on every deal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{GameConfig, GameRng};
use crate::items::{ItemCatalog, ItemKind};

/// Something found on entering a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomEvent {
    /// Gold on the floor.
    Gold(u32),
    /// An item from the catalog.
    Item(ItemKind),
}

impl fmt::Display for RoomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomEvent::Gold(amount) => write!(f, "You found {amount} gold on the floor!"),
            RoomEvent::Item(item) => write!(f, "You found an item: {item}"),
        }
    }
}

/// Roll this room's event.
///
/// One uniform roll decides the kind: below `gold_event_chance` is gold,
/// below `gold_event_chance + item_event_chance` is an item, anything else
/// is nothing. The amount or item takes a second draw.
pub fn roll_room_event(
    config: &GameConfig,
    items: &ItemCatalog,
    rng: &mut GameRng,
) -> Option<RoomEvent> {
    let roll = rng.roll();

    if roll < config.gold_event_chance {
        Some(RoomEvent::Gold(rng.gen_range_u32(config.gold_min..=config.gold_max)))
    } else if roll < config.gold_event_chance + config.item_event_chance && !items.is_empty() {
        Some(RoomEvent::Item(items.random(rng)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RoomEvent::Gold(7).to_string(), "You found 7 gold on the floor!");
        assert_eq!(
            RoomEvent::Item(ItemKind::ExtraHit).to_string(),
            "You found an item: Extra Hit"
        );
    }

    #[test]
    fn test_disabled_events_never_fire() {
        let config = GameConfig::new().without_events();
        let items = ItemCatalog::standard();
        let mut rng = GameRng::new(1);

        for _ in 0..500 {
            assert_eq!(roll_room_event(&config, &items, &mut rng), None);
        }
    }

    #[test]
    fn test_certain_gold_within_range() {
        let config = GameConfig::new().with_event_chances(1.0, 0.0);
        let items = ItemCatalog::standard();
        let mut rng = GameRng::new(2);

        for _ in 0..500 {
            match roll_room_event(&config, &items, &mut rng) {
                Some(RoomEvent::Gold(amount)) => assert!((5..=14).contains(&amount)),
                other => panic!("expected gold, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_certain_item() {
        let config = GameConfig::new().with_event_chances(0.0, 1.0);
        let items = ItemCatalog::standard();
        let mut rng = GameRng::new(3);

        for _ in 0..100 {
            assert!(matches!(
                roll_room_event(&config, &items, &mut rng),
                Some(RoomEvent::Item(_))
            ));
        }
    }

    #[test]
    fn test_default_odds() {
        let config = GameConfig::default();
        let items = ItemCatalog::standard();
        let mut rng = GameRng::new(4);
        let (mut gold, mut item, mut nothing) = (0, 0, 0);

        for _ in 0..10_000 {
            match roll_room_event(&config, &items, &mut rng) {
                Some(RoomEvent::Gold(_)) => gold += 1,
                Some(RoomEvent::Item(_)) => item += 1,
                None => nothing += 1,
            }
        }

        // 25% / 15% / 60%
        assert!((2200..2800).contains(&gold), "gold {gold}");
        assert!((1200..1800).contains(&item), "item {item}");
        assert!((5600..6400).contains(&nothing), "nothing {nothing}");
    }
}
