//! Host command surface: parsing, dispatch, and refusals.

use rogue_blackjack::core::WELCOME_MESSAGE;
use rogue_blackjack::rules::EMPTY_DECK_MESSAGE;
use rogue_blackjack::{
    Card, Command, DealerKind, Deck, GameConfig, GameError, ItemEffect, Rank, Response, RoomEvent,
    RoundEngine, RoundPhase, Suit,
};

fn engine() -> RoundEngine {
    RoundEngine::new(GameConfig::new().without_events()).unwrap()
}

/// Test that play before the first deal is refused without touching state.
#[test]
fn test_rejects_before_deal() {
    let engine = engine();
    let mut state = engine.create_state(1);

    for command in [Command::Hit, Command::Stand, Command::UseItem("Peek".to_string())] {
        let response = engine.apply(&mut state, command);
        assert!(response.is_rejected());
        assert_eq!(response.message(), None);
    }

    assert_eq!(state.message(), WELCOME_MESSAGE);
    assert_eq!(state.phase(), RoundPhase::Idle);
}

#[test]
fn test_deal_and_hit() {
    let engine = engine();
    let mut state = engine.create_state(2);

    let dealt = engine.apply(&mut state, "deal".parse().unwrap());
    assert!(matches!(dealt, Response::Dealt(_)));
    assert_eq!(dealt.message(), Some(state.message()));

    let hit = engine.apply(&mut state, "h".parse().unwrap());
    match hit {
        Response::Hit(report) => assert_eq!(report.player_hand.len(), 3),
        other => panic!("expected a hit, got {other:?}"),
    }
}

/// Test that an empty deck is the only refusal that writes a message.
#[test]
fn test_empty_deck_message() {
    let engine = engine();
    let mut state = engine.create_state(3);
    let deck = Deck::from_top(
        [Rank::Two, Rank::Three, Rank::Ten, Rank::Seven]
            .into_iter()
            .map(|r| Card::new(r, Suit::Diamonds)),
    );
    engine.deal_from(&mut state, deck, DealerKind::BoldBetty).unwrap();

    let response = engine.apply(&mut state, Command::Hit);

    assert_eq!(response, Response::Rejected(GameError::EmptyDeck));
    assert_eq!(state.message(), EMPTY_DECK_MESSAGE);
    assert_eq!(state.player().hand.len(), 2);
}

/// Test that an item works once per room and stays in the inventory.
#[test]
fn test_item_once_per_room() {
    let engine = RoundEngine::new(GameConfig::new().with_event_chances(0.0, 1.0)).unwrap();
    let mut state = engine.create_state(4);

    let item = match engine.apply(&mut state, Command::Deal) {
        Response::Dealt(report) => match report.event {
            Some(RoomEvent::Item(item)) => item,
            other => panic!("expected an item event, got {other:?}"),
        },
        other => panic!("expected a deal, got {other:?}"),
    };

    let first = engine.apply(&mut state, Command::UseItem(item.name().to_string()));
    let message = state.message().to_string();
    let second = engine.apply(&mut state, Command::UseItem(item.name().to_string()));

    assert!(matches!(first, Response::ItemUsed(ref r) if r.item == item));
    assert!(matches!(second, Response::Rejected(GameError::InvalidItemUse(_))));
    assert_eq!(state.message(), message);
    assert!(state.player().holds(item));
}

#[test]
fn test_peek_by_name_reveals() {
    let engine = RoundEngine::new(GameConfig::new().with_event_chances(0.0, 1.0)).unwrap();
    let mut state = engine.create_state(5);

    // Deal until a Peek turns up.
    let mut found = false;
    for _ in 0..50 {
        if let Response::Dealt(report) = engine.apply(&mut state, Command::Deal) {
            if report.event == Some(RoomEvent::Item(rogue_blackjack::ItemKind::Peek)) {
                found = true;
                break;
            }
        }
    }
    assert!(found, "no Peek in 50 rooms");

    let response = engine.apply(&mut state, "use peek".parse().unwrap());
    let hole = state.dealer().hand.get(1).copied();

    match response {
        Response::ItemUsed(report) => {
            assert_eq!(Some(report.effect), hole.map(ItemEffect::HoleCardRevealed));
        }
        other => panic!("expected an item use, got {other:?}"),
    }
    assert!(state.hole_card_revealed());
    assert_eq!(engine.view(&state).dealer_value, Some(state.dealer().hand.value()));
}

#[test]
fn test_unknown_item_is_rejected() {
    let engine = engine();
    let mut state = engine.create_state(6);
    engine.apply(&mut state, Command::Deal);

    let response = engine.apply(&mut state, Command::UseItem("Lucky Coin".to_string()));

    assert!(matches!(response, Response::Rejected(GameError::InvalidItemUse(_))));
}
