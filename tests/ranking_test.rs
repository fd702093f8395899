//! Integration test: categorization, ordering and the end-of-game report.

use arena::character::Character;
use arena::combat::Winner;
use arena::ranking::{categorize, rank, report, Category, FightRecord, Round};
use arena::session::ResultRecord;

fn player(name: &str, score: u32) -> Character {
    let mut character = Character::with_stats(name, 5, 2, 100);
    character.score = score;
    character
}

#[test]
fn test_bootstrap_categories_and_order() {
    let players = vec![player("A", 10), player("B", 150), player("C", 80)];

    let categories: Vec<Category> = categorize(&players, &[])
        .into_iter()
        .map(|entry| entry.category)
        .collect();
    assert_eq!(
        categories,
        vec![Category::Pro, Category::Pro, Category::Rookie]
    );

    let scores: Vec<u32> = rank(&players).iter().map(|row| row.score).collect();
    assert_eq!(scores, vec![150, 80, 10]);
    // Caller's order is untouched.
    assert_eq!(players[0].name, "A");
}

#[test]
fn test_prior_history_disables_bootstrap() {
    let players = vec![player("A", 10), player("B", 100)];
    let prior = vec![ResultRecord::new("Old", 40, 0)];

    let entries = categorize(&players, &prior);
    assert_eq!(entries[0].category, Category::Rookie);
    assert_eq!(entries[1].category, Category::Pro);
}

#[test]
fn test_rank_is_stable_and_positions_are_one_based() {
    let players = vec![player("A", 50), player("B", 90), player("C", 50)];
    let rows = rank(&players);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
    assert_eq!(
        rows.iter().map(|r| r.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(rows[0].attack, 5);
    assert_eq!(rows[0].defense, 2);
}

#[test]
fn test_unnamed_players_get_positional_names() {
    let players = vec![player("", 10), player("", 20)];
    let rows = rank(&players);
    assert_eq!(rows[0].name, "Player2");
    assert_eq!(rows[1].name, "Player1");
}

#[test]
fn test_report_lists_rounds_then_rankings() {
    let rounds = vec![
        Round {
            fights: vec![FightRecord {
                player_name: "A".to_string(),
                opponent_name: "Orco".to_string(),
                winner: Winner::Player,
                points_awarded: 60,
            }],
        },
        Round::default(),
    ];
    let players = vec![player("A", 60), player("B", 120)];

    let report = report(&rounds, &players);
    assert_eq!(report.rounds.len(), 2);
    assert_eq!(report.pros(), vec!["A", "B"]);
    assert!(report.rookies().is_empty());
    assert_eq!(report.ranking[0].name, "B");

    let text = report.to_text();
    assert!(text.contains("Orco"));
    assert!(text.contains("(no fights recorded)"));
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["ranking"][0]["score"], 120);
}
