//! District cards.
//!
//! A `District` is a value: two instances with the same fields are
//! interchangeable. For the rules, though, districts are compared by name
//! only (case-insensitive): a city may never hold two districts with the
//! same name.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// District color.
///
/// Yellow, blue, green and red feed role income. Purple marks a unique
/// district with its own rule text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Blue,
    Green,
    Red,
    Purple,
}

impl Color {
    /// Every color, in canonical order.
    pub const ALL: [Color; 5] = [
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Purple,
    ];

    /// Colors that some role collects income for.
    pub const INCOME: [Color; 4] = [Color::Yellow, Color::Blue, Color::Green, Color::Red];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized color name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or(UnknownColor(s.to_string()))
    }
}

/// Names of districts whose presence in a city changes the rules.
pub mod names {
    /// Draw three cards instead of two for card income.
    pub const OBSERVATORY: &str = "Observatory";
    /// Keep every card drawn for card income.
    pub const LIBRARY: &str = "Library";
    /// Once per turn: discard a card for 1 gold.
    pub const LABORATORY: &str = "Laboratory";
    /// Once per turn: pay 2 gold to draw 3 cards.
    pub const SMITHY: &str = "Smithy";
    /// Counts as a district of a chosen color for role income.
    pub const SCHOOL_OF_MAGIC: &str = "School of Magic";
    /// Districts in this city cost full price to destroy.
    pub const GREAT_WALL: &str = "Great Wall";
    /// Pay 1 gold to take a destroyed district back into hand.
    pub const GRAVEYARD: &str = "Graveyard";
    /// +2 points at the end of the game.
    pub const UNIVERSITY: &str = "University";
    /// +2 points at the end of the game.
    pub const DRAGON_GATE: &str = "Dragon Gate";
}

/// A buildable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct District {
    /// Printed name. Shared by every copy of the same card.
    pub name: String,

    /// Color category.
    pub color: Color,

    /// Gold to build; also its point value.
    pub cost: u32,

    /// Rule or flavour text.
    #[serde(default)]
    pub description: String,
}

impl District {
    /// Create a district.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: Color,
        cost: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            cost,
            description: description.into(),
        }
    }

    /// Purple districts carry a special rule.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.color == Color::Purple
    }

    /// Check the name, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Rule equality: same name, ignoring case.
    #[must_use]
    pub fn same_name(&self, other: &District) -> bool {
        self.is_named(&other.name)
    }

    /// Extra points at the end of the game.
    #[must_use]
    pub fn point_bonus(&self) -> u32 {
        if !self.is_unique() {
            return 0;
        }
        let lower = self.name.to_ascii_lowercase();
        if lower.contains("university") || lower.contains("dragon gate") {
            2
        } else {
            0
        }
    }

    /// Short form, e.g. `Watchtower [red1]`.
    #[must_use]
    pub fn display_short(&self) -> String {
        format!("{} [{}{}]", self.name, self.color, self.cost)
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}), cost: {}", self.name, self.color, self.cost)
    }
}
