//! Fight resolution.
//!
//! [`resolve`] runs one complete fight in a single call: it derives the
//! damage figures once, short-circuits fights the character cannot win, and
//! otherwise steps through alternating turns, spending consumables when the
//! character would fall. Character and opponent are mutated in place.

use super::types::Opponent;
use crate::character::types::Character;
use crate::core::constants::*;
use crate::core::error::CombatError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Enemy,
    Draw,
    Error,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player => "player",
            Winner::Enemy => "enemy",
            Winner::Draw => "draw",
            Winner::Error => "error",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path through the resolver produced the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionBranch {
    InvalidArgument,
    /// The character deals no damage: one enemy hit, then defeat.
    NoDamage,
    /// Even with every consumable the character falls first.
    Unwinnable,
    /// Turn-by-turn simulation ran.
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub winner: Winner,
    pub detail: String,
    pub points_awarded: u32,
    pub player_damage: u32,
    pub enemy_damage: u32,
    pub branch: ResolutionBranch,
    /// Names of consumables spent during the fight, in use order.
    pub consumed: Vec<String>,
}

impl BattleOutcome {
    fn error(err: &CombatError) -> Self {
        Self {
            winner: Winner::Error,
            detail: err.to_string(),
            points_awarded: 0,
            player_damage: 0,
            enemy_damage: 0,
            branch: ResolutionBranch::InvalidArgument,
            consumed: Vec::new(),
        }
    }
}

/// Per-hit damage of each side: `(player_damage, enemy_damage)`.
///
/// Opponents have no defense, so the player's figure is its total attack.
/// The boss multiplier applies to the enemy's figure after defense.
pub fn damage_figures(character: &Character, opponent: &Opponent) -> (u32, u32) {
    let player_damage = character.total_attack();
    let raw = opponent.attack.saturating_sub(character.total_defense());
    let enemy_damage = (raw as f64 * opponent.damage_multiplier()) as u32;
    (player_damage, enemy_damage)
}

/// Score for beating an opponent, chosen by name keyword.
pub fn award_for(opponent_name: &str) -> u32 {
    let name = opponent_name.to_lowercase();
    SCORE_AWARDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(DEFAULT_SCORE_AWARD, |(_, points)| *points)
}

/// Total life the character could recover by spending every consumable.
/// An item counts as a revive if its name says so, otherwise as a potion.
pub fn healable_total(character: &Character) -> u64 {
    character
        .inventory
        .iter()
        .map(|item| {
            if item.name_contains(REVIVE_KEYWORD) {
                REVIVE_LIFE as u64
            } else if item.name_contains(POTION_KEYWORD) {
                POTION_HEAL as u64
            } else {
                0
            }
        })
        .sum()
}

/// Hits needed to drain `life` at `damage` per hit. `None` means never.
pub fn turns_needed(life: u64, damage: u32) -> Option<u64> {
    (damage > 0).then(|| life.div_ceil(damage as u64))
}

fn validate(character: &Character, opponent: &Opponent) -> Result<(), CombatError> {
    if character.life_max == 0 {
        return Err(CombatError::InvalidArgument(format!(
            "character '{}' has no life pool",
            character.name
        )));
    }
    if character.life > character.life_max {
        return Err(CombatError::InvalidArgument(format!(
            "character '{}' has life {} above its maximum {}",
            character.name, character.life, character.life_max
        )));
    }
    let multiplier = opponent.damage_multiplier();
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(CombatError::InvalidArgument(format!(
            "opponent '{}' has an invalid damage multiplier {}",
            opponent.name, multiplier
        )));
    }
    Ok(())
}

/// Spends one consumable to keep the character standing: the first revive
/// resets life to [`REVIVE_LIFE`], failing that the first potion adds
/// [`POTION_HEAL`]. Returns the spent item's name, or `None` if nothing
/// was available.
fn rescue(character: &mut Character, life: &mut i64) -> Option<String> {
    if let Some(index) = character.find_item(REVIVE_KEYWORD) {
        let item = character.remove_item_at(index)?;
        *life = REVIVE_LIFE as i64;
        return Some(item.name);
    }
    let index = character.find_item(POTION_KEYWORD)?;
    let item = character.remove_item_at(index)?;
    *life += POTION_HEAL as i64;
    Some(item.name)
}

/// Resolves one fight, or reports why the arguments were rejected. On error
/// nothing is mutated.
pub fn try_resolve(
    character: &mut Character,
    opponent: &mut Opponent,
) -> Result<BattleOutcome, CombatError> {
    validate(character, opponent)?;

    let (player_damage, enemy_damage) = damage_figures(character, opponent);
    let mut detail = format!(
        "Player(A:{},D:{}) vs {}(A:{},D:0) => player damage={}, enemy damage={}",
        character.total_attack(),
        character.total_defense(),
        opponent.name,
        opponent.attack,
        player_damage,
        enemy_damage
    );
    let outcome = |winner, detail, points_awarded, branch, consumed| BattleOutcome {
        winner,
        detail,
        points_awarded,
        player_damage,
        enemy_damage,
        branch,
        consumed,
    };

    if player_damage == 0 {
        character.take_damage(enemy_damage);
        detail.push_str(" -- Result: ENEMY WINS (the player cannot deal damage)");
        tracing::debug!("{}", detail);
        return Ok(outcome(
            Winner::Enemy,
            detail,
            0,
            ResolutionBranch::NoDamage,
            Vec::new(),
        ));
    }

    let turns_to_kill = opponent.life.div_ceil(player_damage) as u64;
    let effective_life = character.life as u64 + healable_total(character);
    let survivable = turns_needed(effective_life, enemy_damage);
    if survivable.is_some_and(|turns| turns_to_kill > turns) {
        character.take_damage(enemy_damage);
        detail.push_str(
            " -- Result: ENEMY WINS (the player falls before landing the final blow, even using every item)",
        );
        tracing::debug!(turns_to_kill, ?survivable, "{}", detail);
        return Ok(outcome(
            Winner::Enemy,
            detail,
            0,
            ResolutionBranch::Unwinnable,
            Vec::new(),
        ));
    }

    let mut enemy_life = opponent.life as i64;
    let mut player_life = character.life as i64;
    let mut consumed = Vec::new();

    while enemy_life > 0 && player_life > 0 {
        enemy_life -= player_damage as i64;
        if enemy_life <= 0 {
            break;
        }
        player_life -= enemy_damage as i64;
        if player_life > 0 {
            continue;
        }
        match rescue(character, &mut player_life) {
            Some(name) => {
                tracing::debug!("{} used {} (life now {})", character.name, name, player_life);
                consumed.push(name);
            }
            None => break,
        }
    }

    character.set_life(player_life);
    opponent.life = enemy_life.max(0) as u32;

    let (winner, points) = if enemy_life <= 0 && player_life > 0 {
        let points = award_for(&opponent.name);
        character.add_score(points);
        character.wins += 1;
        detail.push_str(&format!(" -- Result: PLAYER WINS (+{} pts)", points));
        (Winner::Player, points)
    } else if player_life > 0 {
        // Both still standing after the loop; kept as a distinct outcome.
        detail.push_str(" -- Result: DRAW (nobody finished the fight)");
        (Winner::Draw, 0)
    } else {
        detail.push_str(" -- Result: ENEMY WINS (fell after spending consumables)");
        (Winner::Enemy, 0)
    };
    tracing::debug!(consumed = consumed.len(), "{}", detail);

    Ok(outcome(
        winner,
        detail,
        points,
        ResolutionBranch::Simulated,
        consumed,
    ))
}

/// Resolves one fight. Rejected arguments yield an outcome tagged
/// [`Winner::Error`] and leave both sides untouched.
pub fn resolve(character: &mut Character, opponent: &mut Opponent) -> BattleOutcome {
    try_resolve(character, opponent).unwrap_or_else(|err| {
        tracing::warn!("Fight rejected: {}", err);
        BattleOutcome::error(&err)
    })
}
