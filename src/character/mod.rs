//! The player character: identity, progress, inventory and derived stats.

pub mod stats;
pub mod types;

pub use stats::*;
pub use types::*;
