//! District cards: definitions, cities and catalog input.
//!
//! ## Key Types
//!
//! - `Color`: the five district colors
//! - `District`: a buildable card instance
//! - `City`: a player's built districts, names unique
//! - `CatalogEntry`: one printed card and its copy count

pub mod catalog;
pub mod city;
pub mod district;

pub use catalog::{expand, parse_catalog, standard_catalog, CatalogEntry};
pub use city::City;
pub use district::{names, Color, District};
