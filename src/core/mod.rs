//! Core engine types: players, state, RNG, configuration, errors.
//!
//! Everything here is independent of how decisions are made or how events
//! are presented.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{CatalogError, PersistenceError, RuleViolation, SetupError};
pub use player::{Controller, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameEnd, GameState, RoundState};
