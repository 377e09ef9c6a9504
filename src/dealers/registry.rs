//! Dealer registry for profile lookup and per-room selection.
//!
//! The `DealerRegistry` holds the five dealer personalities. A fresh dealer
//! is picked uniformly for every room.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::GameRng;

/// The five dealer personalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealerKind {
    SneakySam,
    CautiousCathy,
    RandomRick,
    BoldBetty,
    ShiftySharon,
}

impl DealerKind {
    pub const ALL: [DealerKind; 5] = [
        DealerKind::SneakySam,
        DealerKind::CautiousCathy,
        DealerKind::RandomRick,
        DealerKind::BoldBetty,
        DealerKind::ShiftySharon,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DealerKind::SneakySam => "Sneaky Sam",
            DealerKind::CautiousCathy => "Cautious Cathy",
            DealerKind::RandomRick => "Random Rick",
            DealerKind::BoldBetty => "Bold Betty",
            DealerKind::ShiftySharon => "Shifty Sharon",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            DealerKind::SneakySam => "Swaps your last card if you're close to 21.",
            DealerKind::CautiousCathy => "Rarely busts and sometimes peeks at your hand.",
            DealerKind::RandomRick => "Randomly adds a card for himself.",
            DealerKind::BoldBetty => "Always hits to 19, ignores safe play.",
            DealerKind::ShiftySharon => "Randomly reshuffles deck during your turn.",
        }
    }

    /// Probability that the trick fires on a given hit.
    ///
    /// Sneaky Sam's trick is conditional on the player's total instead of a
    /// roll; Bold Betty has none.
    #[must_use]
    pub const fn trick_chance(self) -> f64 {
        match self {
            DealerKind::SneakySam => 1.0,
            DealerKind::CautiousCathy => 0.3,
            DealerKind::RandomRick => 0.2,
            DealerKind::BoldBetty => 0.0,
            DealerKind::ShiftySharon => 0.15,
        }
    }
}

impl fmt::Display for DealerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static dealer data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DealerProfile {
    pub kind: DealerKind,
    pub name: &'static str,
    pub description: &'static str,
    pub trick_chance: f64,
}

impl DealerProfile {
    #[must_use]
    pub const fn of(kind: DealerKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            description: kind.description(),
            trick_chance: kind.trick_chance(),
        }
    }
}

/// Registry of dealer profiles.
///
/// ## Example
///
/// ```
/// use rogue_blackjack::dealers::{DealerKind, DealerRegistry};
///
/// let registry = DealerRegistry::standard();
/// let sam = registry.get(DealerKind::SneakySam).unwrap();
/// assert_eq!(sam.name, "Sneaky Sam");
/// ```
#[derive(Clone, Debug)]
pub struct DealerRegistry {
    profiles: FxHashMap<DealerKind, DealerProfile>,
    order: Vec<DealerKind>,
}

impl DealerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Registry holding all five dealers.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for kind in DealerKind::ALL {
            registry.register(DealerProfile::of(kind));
        }
        registry
    }

    /// Register a dealer profile.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, profile: DealerProfile) {
        if self.profiles.contains_key(&profile.kind) {
            panic!("Dealer {:?} already registered", profile.kind);
        }
        self.order.push(profile.kind);
        self.profiles.insert(profile.kind, profile);
    }

    /// Get a profile by kind.
    #[must_use]
    pub fn get(&self, kind: DealerKind) -> Option<&DealerProfile> {
        self.profiles.get(&kind)
    }

    /// Uniformly pick a dealer for a new room.
    ///
    /// Returns `None` only for an empty registry.
    pub fn choose(&self, rng: &mut GameRng) -> Option<DealerKind> {
        rng.choose(&self.order).copied()
    }

    #[must_use]
    pub fn contains(&self, kind: DealerKind) -> bool {
        self.profiles.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over profiles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DealerProfile> {
        self.order.iter().filter_map(|kind| self.profiles.get(kind))
    }
}
