//! Integration test: Create -> Shop -> Battle sequence -> Report -> Restart
//!
//! Drives a session through the whole loop a player goes through and checks
//! the state handed between the stages.

use arena::character::Character;
use arena::combat::{Opponent, Winner};
use arena::core::SessionError;
use arena::items::Market;
use arena::ranking::Category;
use arena::session::{ResultLog, SequenceState, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn weak_roster() -> Vec<Opponent> {
    vec![Opponent::new("Orco", 5, 20)]
}

// =========================================================================
// Creation
// =========================================================================

#[test]
fn test_creation_policy() {
    let mut session = Session::new("");
    assert!(session.create_character("Kratos", 10, 0, 100).is_ok());
    assert_eq!(session.character.name, "Kratos");

    match session.create_character("Kratos", 11, 0, 100) {
        Err(SessionError::InvalidCreation(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("expected InvalidCreation, got {:?}", other),
    }
    assert_eq!(session.character.base_attack, 10);
}

// =========================================================================
// Shop
// =========================================================================

#[test]
fn test_discounted_purchase_debits_discounted_price() {
    let mut session = Session::new("Atreus");
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let discounted = session.open_shop(&mut rng).unwrap();

    let index = session.market.position(&discounted).unwrap();
    let price = session.market.get(index).unwrap().price;
    session.toggle_selection(index).unwrap();
    session.purchase().unwrap();

    assert_eq!(session.character.currency, 500 - price);
    assert_eq!(session.character.inventory[0].name, discounted);
}

#[test]
fn test_failed_purchase_changes_nothing() {
    let mut session = Session::new("Atreus");
    session.character.currency = 10;
    assert!(matches!(
        session.toggle_selection(0),
        Err(SessionError::InsufficientFunds { needed: 30, available: 10 })
    ));
    assert!(matches!(session.purchase(), Err(SessionError::NothingSelected)));
    assert_eq!(session.character.currency, 10);
    assert!(session.character.inventory.is_empty());
}

// =========================================================================
// Battle sequence
// =========================================================================

#[test]
fn test_full_sequence_against_default_roster() {
    let mut session = Session::new("Atreus");
    session.create_character("Atreus", 10, 0, 100).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    session.start_sequence(&mut rng);
    assert_eq!(session.queue().len(), 3);

    let mut fights = 0;
    while session.sequence_state() == SequenceState::InProgress {
        let outcome = session.fight().unwrap();
        fights += 1;
        assert_ne!(outcome.winner, Winner::Error);
    }
    assert!((1..=3).contains(&fights));
    assert_eq!(session.rounds()[0].fights.len(), fights);
    assert_eq!(session.results().len(), 1);

    let record = &session.results().records()[0];
    assert_eq!(record.name, "Atreus");
    assert_eq!(record.score, session.character.score);
    assert_eq!(record.currency, session.character.currency);
}

#[test]
fn test_queue_entries_are_independent() {
    let mut session = Session::with_parts(
        Character::with_stats("Atreus", 10, 0, 100),
        Market::new(),
        weak_roster(),
    );
    session.start_sequence(&mut ChaCha8Rng::seed_from_u64(1));
    session.fight().unwrap();

    // The first copy is beaten, the next one still has full life.
    assert_eq!(session.queue()[0].life, 0);
    assert_eq!(session.current_opponent().unwrap().life, 20);
    assert_eq!(session.roster()[0].life, 20);
}

#[test]
fn test_retreat_records_nothing() {
    let mut session = Session::with_parts(
        Character::with_stats("Atreus", 10, 0, 100),
        Market::new(),
        weak_roster(),
    );
    session.start_sequence(&mut ChaCha8Rng::seed_from_u64(1));
    session.fight().unwrap();
    session.retreat();

    assert_eq!(session.sequence_state(), SequenceState::Idle);
    assert!(session.current_opponent().is_none());
    assert!(session.results().is_empty());
}

// =========================================================================
// Report and restart
// =========================================================================

#[test]
fn test_report_and_restart() {
    let mut session = Session::with_parts(
        Character::with_stats("Atreus", 10, 0, 100),
        Market::new(),
        weak_roster(),
    );
    session.start_sequence(&mut ChaCha8Rng::seed_from_u64(9));
    while session.fight().is_ok() {}

    assert_eq!(session.character.score, 180);
    assert_eq!(session.final_category(), Category::Pro);

    let report = session.report();
    assert_eq!(report.rounds[0].fights.len(), 3);
    assert_eq!(report.pros(), vec!["Atreus"]);
    assert!(report.to_text().contains("Orco"));

    session.restart();
    assert_eq!(session.character.score, 0);
    assert_eq!(session.character.currency, 500);
    assert_eq!(session.character.life, 100);
    assert!(session.report().rounds.is_empty());
    assert_eq!(session.results().len(), 1);
}

#[test]
fn test_results_survive_a_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut session = Session::with_parts(
        Character::with_stats("Atreus", 10, 0, 100),
        Market::new(),
        weak_roster(),
    );
    session.start_sequence(&mut ChaCha8Rng::seed_from_u64(4));
    while session.fight().is_ok() {}
    session.save_results(&path).unwrap();

    let loaded = ResultLog::load(&path).unwrap();
    assert_eq!(&loaded, session.results());

    let next = Session::new("Kratos").with_results(loaded);
    assert_eq!(next.categorize()[0].category, Category::Rookie);
}
