//! Ranking engine: categories, score ordering and the end-of-game report.

pub mod logic;
pub mod report;

pub use logic::*;
pub use report::*;
