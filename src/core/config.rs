//! Game configuration.
//!
//! `GameConfig` carries every tunable number of a session: starting health,
//! penalties and rewards, the dealer's stand threshold, and the room event
//! odds. The defaults reproduce the standard rules. Hosts may load a partial
//! JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at engine construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value the engine cannot run with.
    #[error("{field} is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    /// The JSON document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health the player starts with and is restored to on game over.
    pub starting_health: i32,

    /// Health lost on a bust.
    pub bust_penalty: i32,

    /// Health lost when the dealer beats the player at showdown.
    pub loss_penalty: i32,

    /// Gold gained for beating the dealer.
    pub win_reward: u32,

    /// The dealer keeps drawing while below this total.
    pub dealer_stands_on: u32,

    /// Chance that a room starts with gold on the floor.
    pub gold_event_chance: f64,

    /// Chance (after the gold roll misses) that a room starts with an item.
    pub item_event_chance: f64,

    /// Smallest gold find.
    pub gold_min: u32,

    /// Largest gold find (inclusive).
    pub gold_max: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            bust_penalty: 10,
            loss_penalty: 10,
            win_reward: 10,
            dealer_stands_on: 17,
            gold_event_chance: 0.25,
            item_event_chance: 0.15,
            gold_min: 5,
            gold_max: 14,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the bust and showdown-loss penalties.
    #[must_use]
    pub fn with_penalties(mut self, bust: i32, loss: i32) -> Self {
        self.bust_penalty = bust;
        self.loss_penalty = loss;
        self
    }

    /// Set the gold reward for a win.
    #[must_use]
    pub fn with_win_reward(mut self, reward: u32) -> Self {
        self.win_reward = reward;
        self
    }

    /// Set the room event odds.
    #[must_use]
    pub fn with_event_chances(mut self, gold: f64, item: f64) -> Self {
        self.gold_event_chance = gold;
        self.item_event_chance = item;
        self
    }

    /// Disable room events entirely.
    #[must_use]
    pub fn without_events(self) -> Self {
        self.with_event_chances(0.0, 0.0)
    }

    /// Set the inclusive gold find range.
    #[must_use]
    pub fn with_gold_range(mut self, min: u32, max: u32) -> Self {
        self.gold_min = min;
        self.gold_max = max;
        self
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health <= 0 {
            return Err(ConfigError::invalid("starting_health", "must be > 0"));
        }
        if self.bust_penalty < 0 {
            return Err(ConfigError::invalid("bust_penalty", "must be >= 0"));
        }
        if self.loss_penalty < 0 {
            return Err(ConfigError::invalid("loss_penalty", "must be >= 0"));
        }
        if !(1..=21).contains(&self.dealer_stands_on) {
            return Err(ConfigError::invalid("dealer_stands_on", "must be within 1..=21"));
        }
        for (field, chance) in [
            ("gold_event_chance", self.gold_event_chance),
            ("item_event_chance", self.item_event_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::invalid(field, format!("{chance} is not a probability")));
            }
        }
        if self.gold_event_chance + self.item_event_chance > 1.0 {
            return Err(ConfigError::invalid(
                "item_event_chance",
                "event chances sum past 1.0",
            ));
        }
        if self.gold_min > self.gold_max {
            return Err(ConfigError::invalid(
                "gold_min",
                format!("{} exceeds gold_max {}", self.gold_min, self.gold_max),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_health, 100);
        assert_eq!(config.dealer_stands_on, 17);
        assert_eq!((config.gold_min, config.gold_max), (5, 14));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_starting_health(30)
            .with_penalties(5, 15)
            .with_win_reward(25)
            .without_events();

        assert_eq!(config.starting_health, 30);
        assert_eq!(config.bust_penalty, 5);
        assert_eq!(config.loss_penalty, 15);
        assert_eq!(config.win_reward, 25);
        assert_eq!(config.gold_event_chance, 0.0);
        assert_eq!(config.item_event_chance, 0.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_health": 40 }"#).unwrap();
        assert_eq!(config.starting_health, 40);
        assert_eq!(config.win_reward, 10);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = GameConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_probabilities() {
        let config = GameConfig::new().with_event_chances(1.5, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "gold_event_chance", .. })
        ));

        let config = GameConfig::new().with_event_chances(0.7, 0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_gold_range() {
        let config = GameConfig::new().with_gold_range(10, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_health() {
        let err = GameConfig::from_json(r#"{ "starting_health": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "starting_health is invalid: must be > 0");
    }
}
