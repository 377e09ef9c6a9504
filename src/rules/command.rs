//! Host commands and responses.
//!
//! A host forwards each user intent as a `Command` to
//! `RoundEngine::apply` and renders the `Response`. Refusals come back as
//! `Response::Rejected`; they never escape as errors.

use std::str::FromStr;
use thiserror::Error;

use super::report::{DealReport, HitReport, ItemReport, StandReport};
use crate::core::GameError;

/// A user intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reset the run and deal room 1.
    NewGame,
    /// Deal the current room.
    Deal,
    Hit,
    Stand,
    /// Use an item by display name.
    UseItem(String),
}

/// The text did not name a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("`use` needs an item name")]
    MissingItem,
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse `new`, `deal`, `hit`/`h`, `stand`/`s`, or `use <item name>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = match s.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (s, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "new" => Ok(Command::NewGame),
            "deal" | "d" => Ok(Command::Deal),
            "hit" | "h" => Ok(Command::Hit),
            "stand" | "s" => Ok(Command::Stand),
            "use" | "u" if rest.is_empty() => Err(ParseCommandError::MissingItem),
            "use" | "u" => Ok(Command::UseItem(rest.to_string())),
            _ => Err(ParseCommandError::Unknown(s.to_string())),
        }
    }
}

/// Result of applying a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Dealt(DealReport),
    Hit(HitReport),
    Stood(StandReport),
    ItemUsed(ItemReport),
    /// Nothing changed (except the message, for an empty deck).
    Rejected(GameError),
}

impl Response {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Response::Rejected(_))
    }

    /// The operation's own message, if it produced one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Dealt(r) => Some(&r.message),
            Response::Hit(r) => Some(&r.message),
            Response::Stood(r) => Some(&r.message),
            Response::ItemUsed(r) => Some(&r.message),
            Response::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("deal".parse(), Ok(Command::Deal));
        assert_eq!(" HIT ".parse(), Ok(Command::Hit));
        assert_eq!("s".parse(), Ok(Command::Stand));
        assert_eq!("new".parse(), Ok(Command::NewGame));
        assert_eq!(
            "use Extra Hit".parse(),
            Ok(Command::UseItem("Extra Hit".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!("use".parse::<Command>(), Err(ParseCommandError::MissingItem));
        assert_eq!(
            "split".parse::<Command>(),
            Err(ParseCommandError::Unknown("split".to_string()))
        );
    }
}
