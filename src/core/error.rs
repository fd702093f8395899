//! Error types surfaced by the combat core and the session controller.

use thiserror::Error;

/// Rejected combat inputs. Never produced for normal outcomes such as an
/// immediate loss or an unwinnable fight; those are [`crate::Winner`] values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("character creation rejected: {}", .0.join("; "))]
    InvalidCreation(Vec<String>),

    #[error("no product is selected")]
    NothingSelected,

    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u32, available: u32 },

    #[error("product index {0} is not in the catalog")]
    UnknownProduct(usize),

    #[error("no opponent is waiting; start a battle sequence first")]
    NoActiveOpponent,

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("result log error: {0}")]
    Results(#[from] ResultLogError),
}

#[derive(Error, Debug)]
pub enum ResultLogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("could not determine a data directory for the result log")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, SessionError>;
