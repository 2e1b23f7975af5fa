//! End-to-end match scenarios driven through the public API.

use yujokenpo::{
    Choice, GameEngine, MatchResult, Outcome, RejectReason, Transition,
};

#[test]
fn test_best_of_five_sweep() {
    // Threshold is 3: three straight wins end the match.
    let mut engine = GameEngine::builder().best_of(5).seed(42).build();

    for expected_round in 1..=3 {
        match engine.play_round_against(Choice::Monster, Choice::Trap) {
            Transition::Applied { state, concluded } => {
                assert_eq!(state.round, expected_round);
                assert_eq!(state.last.unwrap().outcome, Outcome::Win);
                assert_eq!(concluded, expected_round == 3);
            }
            Transition::Rejected(_) => panic!("round {expected_round} should apply"),
        }
    }

    assert_eq!(engine.state().score.player_wins, 3);
    assert!(engine.is_concluded());
    assert_eq!(engine.result(), Some(MatchResult::PlayerWins));

    // A fourth round bounces off the concluded match.
    let extra = engine.play_round(Choice::Spell);
    assert_eq!(extra, Transition::Rejected(RejectReason::MatchConcluded));
    assert_eq!(engine.state().round, 3);
}

#[test]
fn test_concluded_state_is_frozen() {
    let mut engine = GameEngine::new(3, 42);
    engine.play_round_against(Choice::Spell, Choice::Trap); // lose
    engine.play_round_against(Choice::Spell, Choice::Trap); // lose, 0-2

    assert!(engine.is_concluded());
    let frozen = engine.state().clone();

    for choice in Choice::ALL {
        assert!(!engine.play_round(choice).is_applied());
    }

    assert_eq!(engine.state(), &frozen);
}

#[test]
fn test_change_length_protocol() {
    // Changing format is set_best_of then reset, in that order.
    let mut engine = GameEngine::new(5, 42);
    engine.play_round(Choice::Monster);
    engine.play_round(Choice::Trap);
    assert_eq!(engine.state().round, 2);

    engine.set_best_of(3);
    engine.reset();

    let state = engine.state();
    assert_eq!(state.best_of, 3);
    assert_eq!(state.round, 0);
    assert!(state.history.is_empty());
    assert_eq!(state.score.total(), 0);
    assert_eq!(state.last, None);
}

#[test]
fn test_random_match_to_conclusion() {
    let mut engine = GameEngine::builder().best_of(5).seed(7).build();

    let mut rounds = 0;
    while !engine.is_concluded() {
        // Rotate through the player's choices to hit all matchups.
        let choice = Choice::ALL[rounds % 3];
        assert!(engine.play_round(choice).is_applied());
        rounds += 1;
        assert!(rounds < 1000, "match should conclude");
    }

    let state = engine.state();
    let threshold = state.threshold();

    assert_eq!(state.round as usize, rounds);
    assert_eq!(state.history.len(), rounds);
    assert_eq!(state.score.total() as usize, rounds);

    match engine.result().expect("concluded match has a result") {
        MatchResult::PlayerWins => assert_eq!(state.score.player_wins, threshold),
        MatchResult::OpponentWins => assert_eq!(state.score.opponent_wins, threshold),
        MatchResult::Drawn => panic!("odd best-of cannot draw"),
    }

    // Exactly one side reached the threshold.
    assert!(state.score.player_wins >= threshold || state.score.opponent_wins >= threshold);
    assert!(state.score.player_wins < threshold || state.score.opponent_wins < threshold);
}

#[test]
fn test_snapshots_survive_later_rounds() {
    let mut engine = GameEngine::new(9, 42);

    engine.play_round(Choice::Monster);
    let after_one = engine.state().clone();

    engine.play_round(Choice::Trap);
    engine.play_round(Choice::Spell);

    // The earlier snapshot is a value; later play never touches it.
    assert_eq!(after_one.round, 1);
    assert_eq!(after_one.history.len(), 1);
    assert_eq!(engine.state().round, 3);
    assert_eq!(engine.state().history[0], after_one.history[0]);
}

#[test]
fn test_history_records_every_round() {
    let mut engine = GameEngine::new(7, 3);

    let plays = [Choice::Spell, Choice::Monster, Choice::Trap, Choice::Spell];
    for &choice in &plays {
        engine.play_round(choice);
    }

    let state = engine.state();
    assert_eq!(state.history.len(), plays.len());

    for (i, record) in state.history.iter().enumerate() {
        assert_eq!(record.round as usize, i + 1);
        assert_eq!(record.player, plays[i]);
        assert_eq!(record.outcome, yujokenpo::resolve(record.player, record.opponent));
    }

    assert_eq!(state.last.as_ref(), state.history.last());
}

#[test]
fn test_state_snapshot_round_trips_through_json() {
    let mut engine = GameEngine::new(5, 42);
    engine.play_round(Choice::Monster);
    engine.play_round(Choice::Spell);

    let json = serde_json::to_string(engine.state()).unwrap();
    let back: yujokenpo::MatchState = serde_json::from_str(&json).unwrap();

    assert_eq!(&back, engine.state());
}

#[test]
fn test_replay_from_rng_checkpoint() {
    let mut engine = GameEngine::new(99, 42);
    let mut rng = yujokenpo::MatchRng::new(42);

    // An external replay of the same seed sees the same opponent draws.
    for _ in 0..10 {
        let transition = engine.play_round(Choice::Monster);
        let opponent = transition.state().unwrap().last.unwrap().opponent;
        assert_eq!(opponent, rng.draw_choice());
    }
}
