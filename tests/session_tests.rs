use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sinkfleet::{
    play_turn, respond, Coordinate, FileSession, GameEngine, MemorySession, SessionStore, Ship,
};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sinkfleet-{}-{}", name, std::process::id()))
}

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_first_request_starts_a_game() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut session = MemorySession::new();
    assert!(!session.is_active());

    let response = play_turn(&mut session, &mut rng, None).unwrap();
    assert!(session.is_active());
    assert_eq!(response.message, None);
    assert!(!response.invalid_input);
    assert!(!response.game_over);
    assert_eq!(response.final_turns, None);
    assert_eq!(response.board.matches(" . ").count(), 100);

    let state = session.load().unwrap().unwrap();
    assert_eq!(state.turns, 0);
    assert_eq!(state.fleet_index.len(), 13);
}

#[test]
fn test_turns_persist_between_requests() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut session = MemorySession::new();
    play_turn(&mut session, &mut rng, Some("A1")).unwrap();
    play_turn(&mut session, &mut rng, Some("B2")).unwrap();
    play_turn(&mut session, &mut rng, Some("show")).unwrap();
    let state = session.load().unwrap().unwrap();
    assert_eq!(state.turns, 2);
}

#[test]
fn test_invalid_input_is_reported_not_raised() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut session = MemorySession::new();
    play_turn(&mut session, &mut rng, None).unwrap();
    let before = session.load().unwrap();

    let response = play_turn(&mut session, &mut rng, Some("K5")).unwrap();
    assert!(response.invalid_input);
    assert_eq!(response.message, None);
    assert_eq!(session.load().unwrap(), before);
}

#[test]
fn test_show_renders_hidden_grid() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut session = MemorySession::new();
    let response = play_turn(&mut session, &mut rng, Some("SHOW")).unwrap();
    assert_eq!(response.board.matches(" S ").count(), 13);
    assert_eq!(response.message, None);

    let next = play_turn(&mut session, &mut rng, None).unwrap();
    assert_eq!(next.board.matches(" S ").count(), 0);
}

#[test]
fn test_full_game_clears_session() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = MemorySession::new();
    play_turn(&mut session, &mut rng, None).unwrap();
    let targets: Vec<Coordinate> = session
        .load()
        .unwrap()
        .unwrap()
        .fleet_index
        .keys()
        .copied()
        .collect();

    let mut last = None;
    for coord in &targets {
        last = Some(play_turn(&mut session, &mut rng, Some(&coord.to_string())).unwrap());
    }
    let last = last.unwrap();
    assert!(last.game_over);
    assert_eq!(last.final_turns, Some(13));
    assert_eq!(last.message.as_deref(), Some("SHIP SUNK"));
    assert!(!session.is_active());
}

#[test]
fn test_respond_messages() {
    let mut engine =
        GameEngine::with_ships([Ship::new(4, ["A1", "A2", "A3", "A4"].map(c))]).unwrap();
    let miss = respond(&mut engine, Some("b1")).unwrap();
    assert_eq!(miss.message.as_deref(), Some("MISS AT B1"));
    let hit = respond(&mut engine, Some("a1")).unwrap();
    assert_eq!(hit.message.as_deref(), Some("HIT AT A1"));
    assert!(hit.board.contains(" X "));
    assert!(hit.board.contains(" - "));
}

#[test]
fn test_file_session_roundtrip() {
    let dir = temp_dir("roundtrip");
    let mut rng = SmallRng::seed_from_u64(6);
    let mut session = FileSession::new(&dir, "game");
    assert_eq!(session.path(), dir.join("game.json"));
    assert!(session.load().unwrap().is_none());

    play_turn(&mut session, &mut rng, Some("C3")).unwrap();
    assert!(session.path().exists());
    let text = std::fs::read_to_string(session.path()).unwrap();
    assert!(text.contains("fleet_index"));

    let mut reopened = FileSession::in_dir(&dir);
    let state = reopened.load().unwrap().unwrap();
    assert_eq!(state.turns, 1);

    reopened.clear().unwrap();
    assert!(!reopened.path().exists());
    assert!(reopened.load().unwrap().is_none());
    // clearing twice is fine
    reopened.clear().unwrap();
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_sessions_are_isolated_by_namespace() {
    let dir = temp_dir("namespaces");
    let mut rng = SmallRng::seed_from_u64(7);
    let mut alice = FileSession::new(&dir, "alice");
    let mut bob = FileSession::new(&dir, "bob");

    play_turn(&mut alice, &mut rng, Some("A1")).unwrap();
    play_turn(&mut alice, &mut rng, Some("A2")).unwrap();
    play_turn(&mut bob, &mut rng, Some("J10")).unwrap();

    assert_eq!(alice.load().unwrap().unwrap().turns, 2);
    assert_eq!(bob.load().unwrap().unwrap().turns, 1);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = temp_dir("corrupt");
    std::fs::create_dir_all(&dir).unwrap();
    let mut session = FileSession::new(&dir, "game");
    std::fs::write(session.path(), "{ not json").unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    assert!(play_turn(&mut session, &mut rng, None).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
