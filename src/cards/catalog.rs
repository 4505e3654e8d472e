//! District catalog input.
//!
//! A catalog is a table of printed cards: one row per card with the number of
//! copies in the box. The game consumes the expanded multiset of instances.
//!
//! ## Text format
//!
//! Tab-separated, one header row, then `name  quantity  color  cost  [description]`.
//! Blank lines and rows with fewer than four fields are skipped.
//!
//! ```
//! use citadels_engine::cards::{expand, parse_catalog, Color};
//!
//! let text = "name\tqty\tcolor\tcost\tdescription\n\
//!             Temple\t3\tblue\t1\n\
//!             Library\t1\tPurple\t6\tKeep all cards you draw.\n";
//! let entries = parse_catalog(text).unwrap();
//! assert_eq!(entries.len(), 2);
//!
//! let pool = expand(&entries);
//! assert_eq!(pool.len(), 4);
//! assert_eq!(pool[3].color, Color::Purple);
//! ```

use serde::{Deserialize, Serialize};

use super::district::{Color, District};
use crate::core::error::CatalogError;

/// One printed card and how many copies exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub quantity: u32,
    pub color: Color,
    pub cost: u32,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32, color: Color, cost: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            color,
            cost,
            description: String::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// One district instance of this card.
    #[must_use]
    pub fn instance(&self) -> District {
        District::new(self.name.clone(), self.color, self.cost, self.description.clone())
    }
}

/// Parse tab-separated catalog text.
pub fn parse_catalog(text: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut entries = Vec::new();
    let mut skipped_header = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !skipped_header {
            skipped_header = true;
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            continue;
        }

        let quantity = parse_number(fields[1], line_no, "quantity")?;
        let color = fields[2].parse::<Color>().map_err(|_| CatalogError::UnknownColor {
            line: line_no,
            value: fields[2].to_string(),
        })?;
        let cost = parse_number(fields[3], line_no, "cost")?;
        if cost == 0 {
            return Err(CatalogError::InvalidNumber {
                line: line_no,
                field: "cost",
                value: fields[3].to_string(),
            });
        }
        let description = fields.get(4).map_or("", |s| s.trim());

        entries.push(
            CatalogEntry::new(fields[0].trim(), quantity, color, cost)
                .with_description(description),
        );
    }

    Ok(entries)
}

fn parse_number(value: &str, line: usize, field: &'static str) -> Result<u32, CatalogError> {
    value.trim().parse().map_err(|_| CatalogError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

/// Expand entries into one district per copy, in row order.
#[must_use]
pub fn expand(entries: &[CatalogEntry]) -> Vec<District> {
    entries
        .iter()
        .flat_map(|entry| (0..entry.quantity).map(move |_| entry.instance()))
        .collect()
}

/// The base-game district box.
const STANDARD: &[(&str, u32, Color, u32, &str)] = &[
    ("Tavern", 5, Color::Green, 1, ""),
    ("Market", 4, Color::Green, 2, ""),
    ("Trading Post", 3, Color::Green, 2, ""),
    ("Docks", 3, Color::Green, 3, ""),
    ("Harbor", 3, Color::Green, 4, ""),
    ("Town Hall", 2, Color::Green, 5, ""),
    ("Temple", 3, Color::Blue, 1, ""),
    ("Church", 3, Color::Blue, 2, ""),
    ("Monastery", 3, Color::Blue, 3, ""),
    ("Cathedral", 2, Color::Blue, 5, ""),
    ("Manor", 5, Color::Yellow, 3, ""),
    ("Castle", 4, Color::Yellow, 4, ""),
    ("Palace", 3, Color::Yellow, 5, ""),
    ("Watchtower", 3, Color::Red, 1, ""),
    ("Prison", 3, Color::Red, 2, ""),
    ("Battlefield", 3, Color::Red, 3, ""),
    ("Fortress", 2, Color::Red, 5, ""),
    ("Keep", 2, Color::Purple, 3, "A sturdy keep."),
    ("Laboratory", 1, Color::Purple, 5, "Once per turn, discard a card from your hand to gain 1 gold."),
    ("Smithy", 1, Color::Purple, 5, "Once per turn, pay 2 gold to draw 3 cards."),
    ("Graveyard", 1, Color::Purple, 5, "When the Warlord destroys a district, you may pay 1 gold to take it into your hand."),
    ("Observatory", 1, Color::Purple, 5, "When you draw cards for income, draw 3 instead of 2."),
    ("School of Magic", 1, Color::Purple, 6, "Counts as the color of your choice when collecting role income."),
    ("Library", 1, Color::Purple, 6, "Keep every card you draw for income."),
    ("Great Wall", 1, Color::Purple, 6, "The Warlord pays full price to destroy your districts."),
    ("University", 1, Color::Purple, 6, "Worth 8 points at the end of the game."),
    ("Dragon Gate", 1, Color::Purple, 6, "Worth 8 points at the end of the game."),
];

/// The built-in catalog used when no other is supplied.
#[must_use]
pub fn standard_catalog() -> Vec<CatalogEntry> {
    STANDARD
        .iter()
        .map(|&(name, quantity, color, cost, description)| {
            CatalogEntry::new(name, quantity, color, cost).with_description(description)
        })
        .collect()
}
