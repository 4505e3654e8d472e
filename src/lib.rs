//! # citadels-engine
//!
//! A round engine for the Citadels card game.
//!
//! ## Design Principles
//!
//! 1. **Seat-Agnostic**: The rules never ask whether a seat is a person or a
//!    program. Every seat answers through a `DecisionSource`.
//!
//! 2. **4 to 7 Players**: Every API takes the table size as context; the
//!    draft adapts its discards and the seven-player last pick.
//!
//! 3. **Configuration Over Convention**: Income amounts, build limits,
//!    bonuses and the completion threshold live in `GameConfig`.
//!
//! ## Architecture
//!
//! - **Round Loop**: draft, then roles 1 to 8 in order, then a round reset
//!   unless a completed city ended the game.
//!
//! - **Persistent Data Structures**: the draw pile is an `im` vector, so a
//!   whole `GameState` clones cheaply for snapshots and simulations.
//!
//! - **Deterministic Randomness**: one seeded ChaCha stream per game, with
//!   derived streams for automated seats.
//!
//! ## Modules
//!
//! - `core`: players, state, RNG, configuration and errors
//! - `zones`: the shared draw pile
//! - `cards`: districts, cities and catalog input
//! - `roles`: the eight roles and the draft pool
//! - `rules`: draft, turn resolution, abilities, buildings and scoring
//! - `decision`: decision sources and the player view
//! - `events`: notifications and sinks
//! - `game`: setup and the round loop
//! - `persistence`: saves and restores

pub mod core;
pub mod zones;
pub mod cards;
pub mod roles;
pub mod rules;
pub mod decision;
pub mod events;
pub mod game;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    Controller, Player, PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, GameEnd, GameState, RoundState,
    CatalogError, PersistenceError, RuleViolation, SetupError,
};

pub use crate::zones::DrawPile;

pub use crate::cards::{
    expand, parse_catalog, standard_catalog, names,
    CatalogEntry, City, Color, District,
};

pub use crate::roles::{Role, RolePool};

pub use crate::rules::{
    Deciders, RoundContext,
    DraftOutcome, TurnRecord,
    FinalScores, ScoreBreakdown,
};

pub use crate::decision::{
    AutomatedDecider, ConsoleDecider, DecisionSource, PlayerView,
    BuildChoice, IncomeChoice, MagicianAction, RoleOffer, WarlordTarget,
};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink, Query, TracingSink, WriterSink};

pub use crate::game::{EndReason, Game, GameBuilder, GameOutcome, RoundReport};

pub use crate::persistence::{GameSnapshot, PlayerRecord};
