//! The round engine.
//!
//! `RoundEngine` holds the fixed rules (configuration, dealer registry, item
//! catalog) and applies every transition to a `GameState` passed in by the
//! host:
//!
//! ```text
//! Idle --deal--> InRound --hit (bust)--> Settled --deal--> InRound
//!                   |                                         ^
//!                 stand                                       |
//!                   v                                         |
//!            DealerResolving --win/push--> Settled --advance--+
//!                   |
//!                 loss --> Settled (replay room) or Idle (game over)
//! ```
//!
//! Failed operations return a `GameError` and leave the state untouched.

use tracing::{debug, info, warn};

use super::command::{Command, Response};
use super::events::{roll_room_event, RoomEvent};
use super::report::{DealReport, HitReport, ItemEffect, ItemReport, StandReport};
use super::view::StateView;
use crate::cards::{Deck, Hand, BLACKJACK};
use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, GameState, RoundOutcome, RoundPhase, RoundRecord,
};
use crate::dealers::{apply_trick, DealerKind, DealerRegistry};
use crate::items::{ItemCatalog, ItemKind};

/// Shown when health runs out.
pub const GAME_OVER_MESSAGE: &str = "You have perished! Game over.";

/// Shown when a hit finds no card to draw.
pub const EMPTY_DECK_MESSAGE: &str = "No cards remaining in the deck.";

/// Applies game rules to a `GameState`.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: GameConfig,
    dealers: DealerRegistry,
    items: ItemCatalog,
}

impl RoundEngine {
    /// Create an engine with the standard dealers and items.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            dealers: DealerRegistry::standard(),
            items: ItemCatalog::standard(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dealers(&self) -> &DealerRegistry {
        &self.dealers
    }

    #[must_use]
    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    /// Idle state for a new session.
    #[must_use]
    pub fn create_state(&self, seed: u64) -> GameState {
        GameState::new(&self.config, seed)
    }

    /// Idle state drawing from an existing RNG.
    #[must_use]
    pub fn create_state_with_rng(&self, rng: GameRng) -> GameState {
        GameState::with_rng(&self.config, rng)
    }

    /// Snapshot of the table for rendering.
    #[must_use]
    pub fn view(&self, state: &GameState) -> StateView {
        StateView::capture(state)
    }

    // === Host entry point ===

    /// Apply a host command, folding refusals into the response.
    pub fn apply(&self, state: &mut GameState, command: Command) -> Response {
        let result = match command {
            Command::NewGame => self.new_game(state).map(Response::Dealt),
            Command::Deal => self.deal(state).map(Response::Dealt),
            Command::Hit => self.hit(state).map(Response::Hit),
            Command::Stand => self.stand(state).map(Response::Stood),
            Command::UseItem(name) => self.use_item_by_name(state, &name).map(Response::ItemUsed),
        };

        result.unwrap_or_else(|err| {
            if err == GameError::EmptyDeck {
                state.message = EMPTY_DECK_MESSAGE.to_string();
            }
            debug!(%err, "command rejected");
            Response::Rejected(err)
        })
    }

    // === Transitions ===

    /// Reset the run to its starting values and deal room 1.
    pub fn new_game(&self, state: &mut GameState) -> Result<DealReport, GameError> {
        state.player.reset(self.config.starting_health);
        state.dealer.clear();
        state.room = 1;
        state.room_event = None;
        state.reveal_hole_card = false;
        state.phase = RoundPhase::Idle;
        info!("new game");
        self.deal(state)
    }

    /// Deal the current room with a fresh shuffled deck and a random dealer.
    ///
    /// Allowed from any phase; a room in progress is abandoned.
    pub fn deal(&self, state: &mut GameState) -> Result<DealReport, GameError> {
        let deck = Deck::shuffled(&mut state.rng);
        // The standard registry always has all five dealers.
        let dealer = self
            .dealers
            .choose(&mut state.rng)
            .unwrap_or(DealerKind::BoldBetty);
        self.deal_from(state, deck, dealer)
    }

    /// Deal the current room from a given deck and dealer.
    ///
    /// Player gets the first two cards, dealer the next two. Fails with
    /// `EmptyDeck` (state unchanged) if the deck holds fewer than four.
    pub fn deal_from(
        &self,
        state: &mut GameState,
        mut deck: Deck,
        dealer: DealerKind,
    ) -> Result<DealReport, GameError> {
        let player_cards = [deck.draw()?, deck.draw()?];
        let dealer_cards = [deck.draw()?, deck.draw()?];

        state.deck = deck;
        state.player.hand = Hand::from_cards(&player_cards);
        state.player.start_room();
        state.dealer.hand = Hand::from_cards(&dealer_cards);
        state.dealer.profile = Some(dealer);
        state.reveal_hole_card = false;
        state.phase = RoundPhase::InRound;

        let event = roll_room_event(&self.config, &self.items, &mut state.rng);
        match event {
            Some(RoomEvent::Gold(amount)) => state.player.add_gold(amount),
            Some(RoomEvent::Item(item)) => state.player.grant_item(item),
            None => {}
        }
        state.room_event = event.clone();
        state.message = format!("Room {}: {} appears!", state.room, dealer.name());

        debug!(room = state.room, %dealer, ?event, "room dealt");

        Ok(DealReport {
            room: state.room,
            dealer,
            player_hand: state.player.hand.clone(),
            dealer_upcard: state.dealer.hand.get(0).copied(),
            event,
            message: state.message.clone(),
        })
    }

    /// Draw a card for the player, then let the dealer play his trick.
    pub fn hit(&self, state: &mut GameState) -> Result<HitReport, GameError> {
        let dealer = self.active_dealer(state)?;
        let card = state.deck.draw()?;
        state.player.hand.push(card);

        let trick = apply_trick(
            dealer,
            &mut state.player.hand,
            &mut state.dealer.hand,
            &mut state.deck,
            &mut state.rng,
        );
        if let Some(trick) = &trick {
            state.message = trick.message.clone();
        }

        let player_hand = state.player.hand.clone();
        let player_value = player_hand.value();
        let mut busted = false;
        let mut bust_suppressed = false;
        let mut game_over = false;

        if player_value > BLACKJACK {
            if state.player.extra_hit_ready() {
                state.player.extra_hit_spent = true;
                bust_suppressed = true;
                state.message.push_str(" Extra Hit saved you from busting!");
                debug!(player_value, "bust absorbed by Extra Hit");
            } else {
                busted = true;
                state.player.lose_health(self.config.bust_penalty);
                state
                    .message
                    .push_str(&format!(" Bust! You lose {} health.", self.config.bust_penalty));
                self.settle(state, dealer, RoundOutcome::Bust, player_value);
                game_over = self.check_game_over(state);
            }
        }

        debug!(%card, player_value, busted, "player hit");

        Ok(HitReport {
            card,
            player_hand,
            player_value,
            trick,
            busted,
            bust_suppressed,
            round_over: busted,
            game_over,
            message: state.message.clone(),
        })
    }

    /// Reveal the hole card, let the dealer draw, and settle the room.
    ///
    /// A win or push advances to the next room immediately; a loss leaves
    /// the room to be replayed by the next deal.
    pub fn stand(&self, state: &mut GameState) -> Result<StandReport, GameError> {
        let dealer = self.active_dealer(state)?;
        state.reveal_hole_card = true;
        state.phase = RoundPhase::DealerResolving;

        while state.dealer.hand.value() < self.config.dealer_stands_on {
            match state.deck.draw() {
                Ok(card) => state.dealer.hand.push(card),
                Err(_) => {
                    warn!("deck ran out while the dealer was drawing; dealer stands");
                    break;
                }
            }
        }

        let dealer_hand = state.dealer.hand.clone();
        let player_value = state.player.hand.value();
        let dealer_value = dealer_hand.value();

        let outcome = if dealer_value > BLACKJACK || player_value > dealer_value {
            RoundOutcome::Win
        } else if player_value < dealer_value {
            RoundOutcome::Loss
        } else {
            RoundOutcome::Push
        };

        let message = match outcome {
            RoundOutcome::Win => {
                state.player.add_gold(self.config.win_reward);
                format!("Player Wins! You gain {} gold.", self.config.win_reward)
            }
            RoundOutcome::Loss => {
                state.player.lose_health(self.config.loss_penalty);
                format!("Dealer Wins! You lose {} health.", self.config.loss_penalty)
            }
            _ => "Push (Tie). Room cleared.".to_string(),
        };
        state.message = message.clone();
        self.settle(state, dealer, outcome, player_value);

        let mut game_over = false;
        let mut next_room = None;
        if outcome.clears_room() {
            let report = self.advance_room(state)?;
            state.message = format!("{message} {}", report.message);
            next_room = Some(report);
        } else {
            game_over = self.check_game_over(state);
        }

        Ok(StandReport {
            dealer_hand,
            player_value,
            dealer_value,
            outcome,
            game_over,
            next_room,
            message,
        })
    }

    /// Use an item by display name.
    pub fn use_item_by_name(&self, state: &mut GameState, name: &str) -> Result<ItemReport, GameError> {
        let item = self
            .items
            .find_by_name(name)
            .ok_or_else(|| GameError::InvalidItemUse(format!("no item called {name:?}")))?;
        self.use_item(state, item)
    }

    /// Use a held item. One item per room.
    pub fn use_item(&self, state: &mut GameState, item: ItemKind) -> Result<ItemReport, GameError> {
        if !state.in_round() {
            return Err(GameError::NoActiveHand);
        }
        if !state.player.holds(item) {
            return Err(GameError::InvalidItemUse(format!("{item} is not in your inventory")));
        }
        if let Some(used) = state.player.used_item {
            return Err(GameError::InvalidItemUse(format!("{used} was already used this room")));
        }

        let (effect, message) = match item {
            ItemKind::ExtraHit => (
                ItemEffect::ExtraHitArmed,
                "Extra Hit available! Hit without busting once.".to_string(),
            ),
            ItemKind::Peek => {
                let hole = state
                    .dealer
                    .hand
                    .get(1)
                    .copied()
                    .ok_or_else(|| GameError::InvalidItemUse("the dealer has no hidden card".to_string()))?;
                state.reveal_hole_card = true;
                (
                    ItemEffect::HoleCardRevealed(hole),
                    format!("Peek used! Dealer's hidden card: {}", hole.glyph()),
                )
            }
            ItemKind::Reroll => {
                warn!("Re-roll has no mechanical effect");
                (
                    ItemEffect::Unimplemented,
                    "Re-roll: Swap a card in your hand.".to_string(),
                )
            }
        };

        state.player.used_item = Some(item);
        state.message = message.clone();
        debug!(%item, "item used");

        Ok(ItemReport { item, effect, message })
    }

    // === Helpers ===

    fn active_dealer(&self, state: &GameState) -> Result<DealerKind, GameError> {
        match (state.phase, state.dealer.profile) {
            (RoundPhase::InRound, Some(dealer)) => Ok(dealer),
            _ => Err(GameError::NoActiveHand),
        }
    }

    fn settle(&self, state: &mut GameState, dealer: DealerKind, outcome: RoundOutcome, player_value: u32) {
        let record = RoundRecord {
            room: state.room,
            dealer,
            outcome,
            player_value,
            dealer_value: state.dealer.hand.value(),
        };
        info!(
            room = record.room,
            dealer = %dealer,
            ?outcome,
            player_value,
            dealer_value = record.dealer_value,
            health = state.player.health,
            gold = state.player.gold,
            "room settled"
        );
        state.phase = RoundPhase::Settled;
        state.record(record);
    }

    fn advance_room(&self, state: &mut GameState) -> Result<DealReport, GameError> {
        state.room += 1;
        self.deal(state)
    }

    /// Reset the run if health ran out. Returns whether it did.
    fn check_game_over(&self, state: &mut GameState) -> bool {
        if !state.player.is_dead() {
            return false;
        }

        info!(room = state.room, gold = state.player.gold, "game over");
        state.player.reset(self.config.starting_health);
        state.dealer.clear();
        state.deck = Deck::shuffled(&mut state.rng);
        state.room = 1;
        state.room_event = None;
        state.reveal_hole_card = false;
        state.phase = RoundPhase::Idle;
        state.message = GAME_OVER_MESSAGE.to_string();
        true
    }
}
