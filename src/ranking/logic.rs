//! Pure ranking functions over characters and recorded fights.

use super::report::{Report, Round};
use crate::character::types::Character;
use crate::core::constants::PRO_SCORE_THRESHOLD;
use crate::session::results::ResultRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pro,
    Rookie,
}

impl Category {
    pub fn for_score(score: u32) -> Self {
        if score >= PRO_SCORE_THRESHOLD {
            Category::Pro
        } else {
            Category::Rookie
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pro => "pro",
            Category::Rookie => "rookie",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub score: u32,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    /// 1-based.
    pub position: usize,
    pub name: String,
    pub score: u32,
    pub wins: u32,
    pub attack: u32,
    pub defense: u32,
}

/// Name shown for a player, falling back to its 1-based position.
pub(crate) fn display_name(player: &Character, index: usize) -> String {
    if player.name.is_empty() {
        format!("Player{}", index + 1)
    } else {
        player.name.clone()
    }
}

/// Tags each player `pro` or `rookie`.
///
/// With no prior ranking the first player is `pro` regardless of score, so
/// an empty history always has a leader.
pub fn categorize(players: &[Character], prior: &[ResultRecord]) -> Vec<CategoryEntry> {
    let bootstrap = prior.is_empty();
    players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let category = if bootstrap && i == 0 {
                Category::Pro
            } else {
                Category::for_score(player.score)
            };
            CategoryEntry {
                name: display_name(player, i),
                score: player.score,
                category,
            }
        })
        .collect()
}

/// Orders players by score, highest first. Ties keep input order; the
/// caller's slice is not reordered.
pub fn rank(players: &[Character]) -> Vec<RankingRow> {
    let mut ordered: Vec<(usize, &Character)> = players.iter().enumerate().collect();
    ordered.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));

    ordered
        .into_iter()
        .enumerate()
        .map(|(pos, (original, player))| RankingRow {
            position: pos + 1,
            name: display_name(player, original),
            score: player.score,
            wins: player.wins,
            attack: player.total_attack(),
            defense: player.total_defense(),
        })
        .collect()
}

/// Collects the fight log of every round together with the categories and
/// the final ranking of `players`.
pub fn report(rounds: &[Round], players: &[Character]) -> Report {
    Report {
        rounds: rounds.to_vec(),
        categories: categorize(players, &[]),
        ranking: rank(players),
        players: players.iter().map(Character::profile).collect(),
    }
}
