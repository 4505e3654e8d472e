//! The eight roles (characters) drafted each round.
//!
//! Roles are stateless definitions. Turn order within a round follows the
//! role number, 1 to 8. Holding a role is a per-round relation stored on
//! the player.

pub mod pool;

pub use pool::RolePool;

use serde::{Deserialize, Serialize};

use crate::cards::Color;

/// A role card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Role {
    Assassin = 1,
    Thief = 2,
    Magician = 3,
    King = 4,
    Bishop = 5,
    Merchant = 6,
    Architect = 7,
    Warlord = 8,
}

impl Role {
    /// All roles in calling order.
    pub const ALL: [Role; 8] = [
        Role::Assassin,
        Role::Thief,
        Role::Magician,
        Role::King,
        Role::Bishop,
        Role::Merchant,
        Role::Architect,
        Role::Warlord,
    ];

    /// Role number, 1 to 8.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Role for a number, `None` outside 1..=8.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Role> {
        Role::ALL.get((n as usize).wrapping_sub(1)).copied()
    }

    /// Role for a name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Role> {
        let name = name.trim();
        Role::ALL.into_iter().find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Assassin => "Assassin",
            Role::Thief => "Thief",
            Role::Magician => "Magician",
            Role::King => "King",
            Role::Bishop => "Bishop",
            Role::Merchant => "Merchant",
            Role::Architect => "Architect",
            Role::Warlord => "Warlord",
        }
    }

    /// Ability text.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Role::Assassin => "Select another character to kill. The killed character loses their turn.",
            Role::Thief => "Select another character to rob. When that character is revealed, take all their gold. Cannot rob the Assassin or a killed character.",
            Role::Magician => "May exchange your hand with another player's, or discard any number of cards and draw the same number.",
            Role::King => "Gain 1 gold for each yellow district in your city. Take the crown; you choose first next round.",
            Role::Bishop => "Gain 1 gold for each blue district in your city. The Warlord cannot destroy your districts unless you were killed.",
            Role::Merchant => "Gain 1 gold for each green district in your city. Gain 1 extra gold.",
            Role::Architect => "Draw 2 extra cards. You may build up to 3 districts this turn.",
            Role::Warlord => "Gain 1 gold for each red district in your city. May destroy one district by paying one less than its cost; completed cities are immune.",
        }
    }

    /// District color this role collects income for.
    #[must_use]
    pub const fn income_color(self) -> Option<Color> {
        match self {
            Role::King => Some(Color::Yellow),
            Role::Bishop => Some(Color::Blue),
            Role::Merchant => Some(Color::Green),
            Role::Warlord => Some(Color::Red),
            _ => None,
        }
    }

    /// Roles the Assassin may name.
    pub fn assassin_targets() -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(|r| *r != Role::Assassin)
    }

    /// Roles the Thief may name, given this round's eliminated role.
    pub fn theft_targets(eliminated: Option<Role>) -> impl Iterator<Item = Role> {
        Role::ALL
            .into_iter()
            .filter(move |r| r.number() >= 3 && Some(*r) != eliminated)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> u8 {
        role.number()
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Role::from_number(n).ok_or_else(|| format!("{n} is not a role number"))
    }
}
