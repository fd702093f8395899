//! Arena - turn-based combat resolution and ranking engine.
//!
//! A character buys gear from a market, fights a queue of opponents with
//! deterministic turn-by-turn resolution, and ends up categorized and ranked
//! by score. The [`session`] module ties it together; the pure pieces
//! (`combat`, `character`, `ranking`) can be used on their own.

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod ranking;
pub mod session;
pub mod simulator;

pub use character::{Character, CharacterProfile};
pub use combat::{resolve, try_resolve, BattleOutcome, Opponent, OpponentKind, Winner};
pub use crate::core::{CombatError, ResultLogError, SessionError};
pub use items::{Item, ItemBonus, ItemCategory, Market, Rarity};
pub use ranking::{categorize, rank, report, Category, Report};
pub use session::{ResultLog, ResultRecord, Session};
