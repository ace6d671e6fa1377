//! Integration tests for the Memory game engine.
//!
//! These tests drive complete games through the public surface: clicks in,
//! events out, timers pumped through a manually advanced scheduler.

use memory_core::*;
use std::sync::Arc;
use std::time::Duration;

fn artwork(n: usize) -> Arc<Asset> {
    Arc::new(Asset::new(
        format!("https://img.example/artwork-{n}.jpg"),
        Some(vec![n as u8; n + 1]),
    ))
}

fn card_back() -> Arc<Asset> {
    Arc::new(Asset::new(
        "https://img.example/card-back.png",
        Some(vec![0xCB; 64]),
    ))
}

fn new_engine(
    board_size: usize,
    asset_count: usize,
    fast_reveal_allowed: bool,
) -> GameEngine<ManualScheduler> {
    let config = GameConfig {
        board_size,
        fast_reveal_allowed,
        card_back: card_back(),
    };
    GameEngine::new(
        config,
        (0..asset_count).map(artwork).collect(),
        ManualScheduler::new(),
    )
    .expect("valid config")
}

/// Advance simulated time and deliver every due timer to the engine.
fn pump(game: &mut GameEngine<ManualScheduler>, elapsed: Duration) -> Vec<GameEvent> {
    let fired = game.scheduler_mut().advance(elapsed);
    let mut events = Vec::new();
    for handle in fired {
        events.extend(game.timer_fired(handle));
    }
    events
}

#[test]
fn test_deterministic_four_card_game() {
    // Unshuffled 4-card board over assets A and B lays out [A, B, A, B].
    let mut game = new_engine(4, 2, true);
    game.reset_ordered().unwrap();

    // First flip: A at 0.
    assert_eq!(game.select_card(0), vec![GameEvent::BoardChanged]);
    assert!(game.board()[0].is_flipped);

    // Second flip: B at 1. Mismatch goes on display.
    assert_eq!(game.select_card(1), vec![GameEvent::BoardChanged]);
    assert_eq!(game.phase(), GamePhase::TurnPending { first: 0, second: 1 });

    // Third click lands before the delay: fast-reveal clears the mismatch
    // and the click is spent, so card 2 does not flip.
    assert_eq!(game.select_card(2), vec![GameEvent::BoardChanged]);
    assert!(!game.board()[0].is_flipped);
    assert!(!game.board()[1].is_flipped);
    assert!(!game.board()[2].is_flipped);
    assert_eq!(game.phase(), GamePhase::AwaitingFirstFlip);

    // A-A match.
    game.select_card(0);
    game.select_card(2);
    assert!(game.board()[0].is_matched);
    assert!(game.board()[2].is_matched);

    // B-B match solves the board.
    game.select_card(1);
    let events = game.select_card(3);
    assert_eq!(
        events,
        vec![
            GameEvent::BoardChanged,
            GameEvent::Solved { total_seconds: 0 }
        ]
    );
    assert!(game.is_solved());
    assert_eq!(game.phase(), GamePhase::Solved);
}

#[test]
fn test_solve_time_reflects_elapsed_clock() {
    let mut game = new_engine(4, 2, true);
    game.reset_ordered().unwrap();

    game.select_card(0);
    let ticks = pump(&mut game, Duration::from_secs(7));
    assert_eq!(ticks.len(), 7);
    assert_eq!(game.seconds_elapsed(), 7);

    game.select_card(2); // A-A
    game.select_card(1);
    let events = game.select_card(3); // B-B, solved
    assert!(events.contains(&GameEvent::Solved { total_seconds: 7 }));

    // Clock stopped with the solve.
    assert_eq!(pump(&mut game, Duration::from_secs(3)), vec![]);
    assert_eq!(game.seconds_elapsed(), 7);
}

#[test]
fn test_mismatch_resolves_by_waiting_when_fast_reveal_is_off() {
    let mut game = new_engine(4, 2, false);
    game.reset_ordered().unwrap();

    game.select_card(0);
    game.select_card(1);

    // Clicks are ignored while the mismatch is up.
    assert_eq!(game.select_card(2), vec![]);
    assert_eq!(game.select_card(3), vec![]);
    assert_eq!(game.phase(), GamePhase::TurnPending { first: 0, second: 1 });

    // The one-shot fires (alongside a clock tick) and unflips the pair.
    let events = pump(&mut game, MISMATCH_DELAY);
    assert!(events.contains(&GameEvent::BoardChanged));
    assert_eq!(game.phase(), GamePhase::AwaitingFirstFlip);
    assert!(!game.board()[0].is_flipped);
    assert!(!game.board()[1].is_flipped);
}

#[test]
fn test_reset_mid_game_starts_clean() {
    let mut game = new_engine(4, 2, true);
    game.reset_ordered().unwrap();

    game.select_card(0);
    pump(&mut game, Duration::from_secs(4));
    game.select_card(1); // mismatch pending

    let events = game.reset_ordered().unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::BoardChanged,
            GameEvent::ClockChanged { seconds: 0 }
        ]
    );
    assert_eq!(game.seconds_elapsed(), 0);
    assert!(game
        .board()
        .iter()
        .all(|card| !card.is_flipped && !card.is_matched));

    // Neither the old clock nor the old unflip survives the reset.
    assert_eq!(pump(&mut game, Duration::from_secs(10)), vec![]);
}

#[test]
fn test_full_shuffled_game_to_completion() {
    let mut game = new_engine(16, 10, true);
    game.reset().unwrap();
    assert_eq!(game.board().len(), 16);

    // Play with perfect memory: find each card's partner by pair id.
    let pairs: Vec<PairId> = game.board().iter().map(|card| card.pair).collect();
    let mut solved_events = Vec::new();
    for first in 0..pairs.len() {
        if game.board()[first].is_matched {
            continue;
        }
        let partner = (0..pairs.len())
            .find(|&other| other != first && pairs[other] == pairs[first])
            .expect("every card has a partner");

        game.select_card(first);
        solved_events.extend(game.select_card(partner));
        pump(&mut game, Duration::from_millis(100));
    }

    assert!(game.is_solved());
    assert!(solved_events
        .iter()
        .any(|event| matches!(event, GameEvent::Solved { .. })));
}

#[test]
fn test_engine_recovers_after_failed_reset() {
    let mut game = new_engine(8, 4, true);
    game.reset().unwrap();

    game.set_assets(vec![artwork(0), artwork(1)]);
    assert_eq!(
        game.reset().unwrap_err(),
        GameError::InsufficientAssets {
            required: 4,
            available: 2,
        }
    );
    assert!(game.board().is_empty());
    assert_eq!(game.phase(), GamePhase::Idle);

    // Restocking the supply makes the next reset succeed.
    game.set_assets((0..4).map(artwork).collect());
    game.reset().unwrap();
    assert_eq!(game.board().len(), 8);
    assert_eq!(game.phase(), GamePhase::AwaitingFirstFlip);
}
