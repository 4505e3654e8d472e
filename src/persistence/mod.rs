//! Saving and restoring games.
//!
//! Failures are returned as `PersistenceError`; an in-memory game is never
//! affected by a failed save or load.

pub mod snapshot;

pub use snapshot::{GameSnapshot, PlayerRecord};
