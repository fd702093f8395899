//! Item types and the market catalog.

pub mod market;
pub mod types;

pub use market::*;
pub use types::*;
