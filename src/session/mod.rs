//! Session state and the persisted result log.

pub mod game;
pub mod results;

pub use game::*;
pub use results::*;
