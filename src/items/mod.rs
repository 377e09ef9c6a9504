//! Power-up items the player collects from room events.
//!
//! Items stay in the inventory once found. At most one item may be used per
//! room; the engine tracks that in `PlayerState::used_item`.

mod catalog;

pub use catalog::{Item, ItemCatalog, ItemKind};
