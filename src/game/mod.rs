//! Game setup and the round loop.
//!
//! ## Key Types
//!
//! - `GameBuilder`: seats, controllers, districts, config and seed
//! - `Game`: owns the state, the seat decision sources and the event sink
//! - `GameOutcome`: final scores, winner and why the game stopped

pub mod builder;
pub mod runner;

pub use builder::{default_decider, GameBuilder};
pub use runner::{EndReason, Game, GameOutcome, RoundReport};
