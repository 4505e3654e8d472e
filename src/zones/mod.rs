//! Card locations shared by the whole table.
//!
//! Hands and cities belong to players (`core::Player`); the only shared
//! location is the draw pile.

pub mod draw_pile;

pub use draw_pile::DrawPile;
