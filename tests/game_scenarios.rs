use pricedle::commands::Game;
use pricedle::core::{FeedbackTier, GuessOutcome};
use pricedle::game::{GameState, MAX_ATTEMPTS, decode, encode};
use pricedle::output::share_json;
use pricedle::price::FixedPrice;
use pricedle::session::{FileStore, SessionStore, load_state, save_state};
use pricedle::{Error, GuessError};

#[test]
fn test_exact_match_is_always_green() {
    for target in [0.19, 1.0, 19.99, 99.95, 1234.5] {
        assert_eq!(FeedbackTier::classify(target, target), FeedbackTier::Green);
    }
}

#[test]
fn test_yellow_band_is_not_a_gap() {
    // relative error 0.08
    assert_eq!(FeedbackTier::classify(10.8, 10.0), FeedbackTier::Yellow);
}

#[test]
fn test_gap_resolves_to_red() {
    // relative error 0.055
    assert_eq!(FeedbackTier::classify(10.55, 10.0), FeedbackTier::Red);
}

#[test]
fn test_correct_on_first_guess() {
    let mut state = GameState::new(19.99);
    let attempt = state.apply_guess("20.00").unwrap();

    assert_eq!(attempt.outcome(), GuessOutcome::Correct);
    assert!(state.is_finished());
    assert!(state.is_solved());
    assert!(state.attempts()[0].is_some());
    assert!(state.attempts()[1..].iter().all(Option::is_none));
}

#[test]
fn test_four_low_guesses_exhaust_game() {
    let mut state = GameState::new(10.0);

    for raw in ["5.00", "6.00", "7.00", "8.00"] {
        let attempt = state.apply_guess(raw).unwrap();
        assert_eq!(attempt.outcome(), GuessOutcome::Higher);
    }

    assert_eq!(state.attempts_used(), MAX_ATTEMPTS);
    assert!(state.is_finished());
    assert!(!state.is_solved());

    let before = state.clone();
    assert_eq!(
        state.apply_guess("10.00").unwrap_err(),
        GuessError::GameAlreadyFinished
    );
    assert_eq!(state, before);
}

#[test]
fn test_round_trip_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    let mut state = GameState::new(3.49);
    state.apply_guess("2,99").unwrap();
    state.apply_guess("3.99").unwrap();

    save_state(&mut store, "player", &state).unwrap();
    assert_eq!(load_state(&store, "player", 3.49), state);
}

#[test]
fn test_corrupt_blobs_start_fresh() {
    assert_eq!(decode(Some(""), 7.5), GameState::new(7.5));
    assert_eq!(decode(Some("{garbage}"), 7.5), GameState::new(7.5));

    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.put("player", "\u{0}\u{1}binary junk").unwrap();
    assert_eq!(load_state(&store, "player", 7.5), GameState::new(7.5));
}

#[test]
fn test_blob_is_plain_json() {
    let state = GameState::new(1.5);
    let value: serde_json::Value = serde_json::from_str(&encode(&state)).unwrap();
    assert_eq!(value["finished"], false);
    assert_eq!(value["solved"], false);
}

#[test]
fn test_full_game_through_file_backed_session() {
    let dir = tempfile::tempdir().unwrap();
    let counter = dir.path().join("counter");
    let open = || {
        Game::new(
            FileStore::new(dir.path().join("sessions")),
            "alice",
            Box::new(FixedPrice::new("Butter", 2.49).unwrap()),
            &counter,
        )
    };

    // Each call opens the game afresh, like separate CLI invocations
    let mut round = open().new_round().unwrap();
    assert_eq!(round.state.attempts_used(), 0);

    let mut game = open();
    let mut round_again = game.current_round().unwrap();
    assert_eq!(round_again, round);
    game.submit(&mut round_again, "1.99").unwrap();

    let mut game = open();
    round = game.current_round().unwrap();
    assert_eq!(round.state.attempts_used(), 1);
    let attempt = game.submit(&mut round, "2,50").unwrap();
    assert_eq!(attempt.outcome(), GuessOutcome::Correct);

    let mut game = open();
    let mut finished = game.current_round().unwrap();
    assert!(finished.state.is_solved());
    assert!(matches!(
        game.submit(&mut finished, "3"),
        Err(Error::Guess(GuessError::GameAlreadyFinished))
    ));

    assert_eq!(game.play_number(), Some(1));
    let json = share_json(&finished.state, 1).unwrap();
    assert_eq!(
        json,
        r#"[{"color":"bg-orange-600","result":"Higher","counter":1},{"color":"bg-green-600","result":"Correct","counter":1}]"#
    );
}
