//! Round logs and the end-of-game ranking report.

use super::logic::{Category, CategoryEntry, RankingRow};
use crate::character::types::CharacterProfile;
use crate::combat::logic::Winner;
use serde::{Deserialize, Serialize};

/// One resolved fight as recorded by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRecord {
    pub player_name: String,
    pub opponent_name: String,
    pub winner: Winner,
    pub points_awarded: u32,
}

/// All fights of one battle sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub fights: Vec<FightRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub rounds: Vec<Round>,
    pub categories: Vec<CategoryEntry>,
    pub ranking: Vec<RankingRow>,
    /// Snapshots of the reported players, in input order.
    pub players: Vec<CharacterProfile>,
}

impl Report {
    fn names_in(&self, category: Category) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn pros(&self) -> Vec<&str> {
        self.names_in(Category::Pro)
    }

    pub fn rookies(&self) -> Vec<&str> {
        self.names_in(Category::Rookie)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        for (i, round) in self.rounds.iter().enumerate() {
            report.push_str(&format!("── ROUND {} ──────────────────────────────────\n", i + 1));
            if round.fights.is_empty() {
                report.push_str("  (no fights recorded)\n");
                continue;
            }
            for fight in &round.fights {
                report.push_str(&format!(
                    "  - {} vs {} -> winner: {} | +{} pts\n",
                    fight.player_name, fight.opponent_name, fight.winner, fight.points_awarded
                ));
            }
        }

        let join_or_dash = |names: Vec<&str>| {
            if names.is_empty() {
                "---".to_string()
            } else {
                names.join(", ")
            }
        };
        report.push_str("\n── CATEGORIES ────────────────────────────────\n");
        report.push_str(&format!("  PRO:    {}\n", join_or_dash(self.pros())));
        report.push_str(&format!("  ROOKIE: {}\n", join_or_dash(self.rookies())));

        report.push_str("\n── FINAL RANKING ─────────────────────────────\n");
        report.push_str("  Pos  Name             Score  Wins  Atk  Def\n");
        for row in &self.ranking {
            report.push_str(&format!(
                "  {:>3}  {:<15}  {:>5}  {:>4}  {:>3}  {:>3}\n",
                row.position, row.name, row.score, row.wins, row.attack, row.defense
            ));
        }

        // Player sheets follow the ranking order.
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_by(|&a, &b| self.players[b].score.cmp(&self.players[a].score));
        for index in order {
            let player = &self.players[index];
            let name = if player.name.is_empty() {
                format!("Player{}", index + 1)
            } else {
                player.name.clone()
            };
            let items: Vec<&str> = player
                .inventory
                .values()
                .flatten()
                .map(|item| item.name.as_str())
                .collect();
            let inventory = if items.is_empty() {
                "(empty)".to_string()
            } else {
                items.join(", ")
            };

            report.push_str("\n  ------------------------------------\n");
            report.push_str(&format!("  {}\n", name));
            report.push_str(&format!("  Life:     {}/{}\n", player.life, player.life_max));
            report.push_str(&format!("  Score:    {}\n", player.score));
            report.push_str(&format!("  Attack:   {}\n", player.attack));
            report.push_str(&format!("  Defense:  {}\n", player.defense));
            report.push_str(&format!("  Items:    {}\n", inventory));
        }

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
