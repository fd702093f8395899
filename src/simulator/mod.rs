//! Balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of seeded battle sequences with a fixed character build
//! and shop loadout to analyze:
//! - How often a build clears the whole queue
//! - Average score and resulting pro / rookie split
//! - Consumable usage per sequence
//! - Which opponents end the most runs
//!
//! Every run drives a real [`Session`](crate::session::Session), so
//! results match what a player would see.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, SIM_PLAYER_NAME};
