//! Error types.
//!
//! - `RuleViolation`: an attempted move the rules reject. Never fatal; the
//!   engine reports it and leaves state untouched.
//! - `SetupError`: a game that cannot be assembled as requested.
//! - `CatalogError`: malformed district catalog rows.
//! - `PersistenceError`: save/restore failures, reported to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// A move the rules reject.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("a district named {0} is already in that city")]
    DuplicateDistrict(String),

    #[error("no card at position {index} (hand holds {len})")]
    NoSuchCard { index: usize, len: usize },

    #[error("the same card position was named twice")]
    DuplicateIndex,

    #[error("no district at position {index} in that city (city holds {len})")]
    NoSuchDistrict { index: usize, len: usize },

    #[error("{0} is not at the table")]
    NoSuchPlayer(PlayerId),

    #[error("cannot target your own seat")]
    SelfTarget,

    #[error("that city is empty")]
    EmptyCity,

    #[error("that city is complete and cannot be attacked")]
    CompletedCity,

    #[error("that city is protected by the Bishop")]
    ProtectedCity,
}

/// A game that cannot be assembled as requested.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("expected {expected} controllers, got {got}")]
    ControllerCount { expected: usize, got: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} is not a seat at this table")]
    UnknownSeat(PlayerId),
}

/// Malformed district catalog input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: unknown color {value:?}")]
    UnknownColor { line: usize, value: String },
}

/// Save or restore failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed binary save data: {0}")]
    Binary(#[from] bincode::Error),

    #[error("save refers to unknown {role} {id}")]
    UnknownPlayer { role: &'static str, id: u8 },

    #[error("player ids must run 1..N in seating order; found {found} at seat {seat}")]
    SeatOrder { seat: usize, found: u8 },

    #[error("save holds no players")]
    NoPlayers,

    #[error("saved city of player {player} holds {name} twice")]
    DuplicateDistrict { player: u8, name: String },

    #[error("saved role {0} is not a role number")]
    UnknownRole(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let err = RuleViolation::InsufficientGold { needed: 5, available: 2 };
        assert_eq!(err.to_string(), "not enough gold: need 5, have 2");

        let err = RuleViolation::NoSuchPlayer(PlayerId::new(9));
        assert_eq!(err.to_string(), "Player 9 is not at the table");
    }

    #[test]
    fn test_persistence_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PersistenceError = io.into();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
