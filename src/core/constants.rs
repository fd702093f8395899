// Character defaults
pub const DEFAULT_CHARACTER_NAME: &str = "Atreus";
pub const DEFAULT_LIFE: u32 = 100;
pub const STARTING_FUNDS: u32 = 500;

// Character creation policy (applied by the session, not by the resolver)
pub const MIN_CREATION_LIFE: u32 = 100;
pub const CREATION_STAT_BUDGET: u32 = 110;

// Consumable rescue: name keyword and the life it restores
pub const REVIVE_KEYWORD: &str = "revivir";
pub const POTION_KEYWORD: &str = "pocion";
pub const REVIVE_LIFE: u32 = 100;
pub const POTION_HEAL: u32 = 50;

// Score awarded on a clean win, keyed by opponent name keyword.
// Checked in order; the first match wins.
pub const SCORE_AWARDS: [(&str, u32); 3] = [("orco", 60), ("demonio", 100), ("drag", 200)];
pub const DEFAULT_SCORE_AWARD: u32 = 30;

// Ranking
pub const PRO_SCORE_THRESHOLD: u32 = 100;

// Opponents
pub const DEFAULT_BOSS_MULTIPLIER: f64 = 2.0;
pub const QUEUE_SIZE: usize = 3;

// Market
pub const RANDOM_DISCOUNT_PERCENT: u32 = 20;
