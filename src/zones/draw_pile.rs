//! The shared draw pile.
//!
//! An ordered sequence of districts. Cards are drawn from the top and
//! returned to the bottom. Drawing from an empty or short pile is not an
//! error: the caller simply receives fewer cards.
//!
//! Backed by an `im::Vector` so that capturing a snapshot is cheap.
//!
//! ```
//! use citadels_engine::cards::{Color, District};
//! use citadels_engine::zones::DrawPile;
//!
//! let mut pile = DrawPile::from_districts(vec![
//!     District::new("Temple", Color::Blue, 1, ""),
//!     District::new("Tavern", Color::Green, 1, ""),
//! ]);
//!
//! let drawn = pile.draw_many(3);
//! assert_eq!(drawn.len(), 2);
//! assert!(pile.is_empty());
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::District;
use crate::core::rng::GameRng;

/// Ordered district pile; index 0 is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawPile {
    cards: Vector<District>,
}

impl DrawPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile whose first element is the top card.
    #[must_use]
    pub fn from_districts(districts: Vec<District>) -> Self {
        Self {
            cards: districts.into_iter().collect(),
        }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn top(&self) -> Option<&District> {
        self.cards.front()
    }

    /// Draw the top card.
    pub fn draw(&mut self) -> Option<District> {
        self.cards.pop_front()
    }

    /// Draw up to `count` cards, top first.
    pub fn draw_many(&mut self, count: usize) -> Vec<District> {
        let mut drawn = Vec::with_capacity(count.min(self.cards.len()));
        while drawn.len() < count {
            match self.cards.pop_front() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        tracing::trace!(requested = count, drawn = drawn.len(), left = self.cards.len(), "draw");
        drawn
    }

    /// Put a card on the bottom.
    pub fn return_to_bottom(&mut self, district: District) {
        self.cards.push_back(district);
    }

    /// Put cards on the bottom, keeping their relative order.
    pub fn return_all_to_bottom(&mut self, districts: impl IntoIterator<Item = District>) {
        for district in districts {
            self.cards.push_back(district);
        }
    }

    /// Shuffle the whole pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<District> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.cards.iter()
    }
}
