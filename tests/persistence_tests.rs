//! Save files and resuming games.

use citadels_engine::core::{GameConfig, PersistenceError};
use citadels_engine::events::NullSink;
use citadels_engine::game::{Game, GameBuilder};
use citadels_engine::persistence::GameSnapshot;

fn game_after_rounds(rounds: u32) -> Game {
    let mut game = GameBuilder::new()
        .player_count(5)
        .config(GameConfig::default().with_round_limit(80))
        .sink(Box::new(NullSink))
        .build(2024)
        .unwrap();
    for _ in 0..rounds {
        if game.is_over() {
            break;
        }
        game.play_round();
    }
    game
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let game = game_after_rounds(3);

    game.snapshot().save_json(&path).unwrap();
    let loaded = GameSnapshot::load_json(&path).unwrap();

    assert_eq!(loaded, game.snapshot());
    let state = loaded.restore(game.state().config.clone()).unwrap();
    assert_eq!(state.players, game.state().players);
    assert_eq!(state.draw_pile, game.state().draw_pile);
    assert_eq!(state.crown, game.state().crown);
    assert_eq!(state.round_number, game.state().round_number);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameSnapshot::load_json(dir.path().join("absent.json"));
    assert!(matches!(result, Err(PersistenceError::Io(_))));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        GameSnapshot::load_json(&path),
        Err(PersistenceError::Json(_))
    ));
}

/// Two games resumed from the same save play out identically and finish.
#[test]
fn test_resumed_games_match() {
    let snapshot = game_after_rounds(2).snapshot();
    let resume = || {
        let mut game = Game::restore(
            snapshot.clone(),
            GameConfig::default().with_round_limit(80),
            Box::new(NullSink),
        )
        .unwrap();
        let outcome = game.run();
        (outcome, game.snapshot())
    };

    let (first, end) = resume();
    assert_eq!((first.clone(), end), resume());
    assert!(first.rounds > 2);
}

/// Saving between rounds and resuming does not change how the game goes on.
#[test]
fn test_resumed_game_matches_uninterrupted_game() {
    for seed in 0..10 {
        let config = GameConfig::default().with_round_limit(80);
        let mut original = GameBuilder::new()
            .player_count(5)
            .config(config.clone())
            .sink(Box::new(NullSink))
            .build(seed)
            .unwrap();
        original.play_round();
        original.play_round();

        let snapshot = original.snapshot();
        assert!(snapshot.players.iter().all(|record| record.rng.is_some()));
        let mut resumed = Game::restore(snapshot.clone(), config, Box::new(NullSink)).unwrap();
        assert_eq!(resumed.snapshot(), snapshot);

        let expected = original.play_round();
        let actual = resumed.play_round();
        assert_eq!(actual, expected, "seed {seed}");
        assert_eq!(resumed.snapshot(), original.snapshot(), "seed {seed}");
    }
}

/// Saves written without seat generator positions still load.
#[test]
fn test_save_without_seat_generators_restores() {
    let mut json: serde_json::Value =
        serde_json::from_str(&game_after_rounds(2).snapshot().to_json().unwrap()).unwrap();
    for player in json["players"].as_array_mut().unwrap() {
        player.as_object_mut().unwrap().remove("rng");
    }
    let snapshot = GameSnapshot::from_json(&json.to_string()).unwrap();
    assert!(snapshot.players.iter().all(|record| record.rng.is_none()));

    let mut game = Game::restore(
        snapshot,
        GameConfig::default().with_round_limit(80),
        Box::new(NullSink),
    )
    .unwrap();
    game.play_round();
    assert!(game.snapshot().players.iter().all(|record| record.rng.is_some()));
}

#[test]
fn test_binary_snapshot_round_trip() {
    let snapshot = game_after_rounds(1).snapshot();
    let bytes = snapshot.to_bytes().unwrap();
    assert_eq!(GameSnapshot::from_bytes(&bytes).unwrap(), snapshot);
}
