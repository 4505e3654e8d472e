//! Notifications emitted by the engine.
//!
//! Events are advisory: presentation layers print them, tests inspect them,
//! and nothing in the rules reads them back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Color;
use crate::core::{PlayerId, RuleViolation};
use crate::roles::Role;

/// Which decision a rejected answer belonged to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Role,
    CardToKeep,
    MagicianAction,
    Laboratory,
    SchoolOfMagic,
    WarlordTarget,
    Build,
}

impl Query {
    /// Short description used in notices.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Query::Role => "role choice",
            Query::CardToKeep => "card to keep",
            Query::MagicianAction => "Magician action",
            Query::Laboratory => "Laboratory discard",
            Query::SchoolOfMagic => "School of Magic color",
            Query::WarlordTarget => "Warlord target",
            Query::Build => "build command",
        }
    }
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted { round: u32, crown: PlayerId },
    HiddenRoleRemoved,
    RoleDiscardedFaceUp { role: Role },
    /// The King came up for a face-up discard; the face-up draw restarts.
    KingRedrawn,
    RoleChosen { player: PlayerId },
    RoleCalled { role: Role, holder: Option<PlayerId>, eliminated: bool },
    Eliminated { role: Role },
    RobberyPlanned { thief: PlayerId, role: Role },
    Robbed { thief: PlayerId, victim: PlayerId, amount: u32 },
    GoldTaken { player: PlayerId, amount: u32 },
    CardsDrawn { player: PlayerId, count: usize },
    CardKept { player: PlayerId, district: String },
    HandsExchanged { player: PlayerId, with: PlayerId },
    CardsReplaced { player: PlayerId, count: usize },
    LaboratoryUsed { player: PlayerId, discarded: String },
    SmithyUsed { player: PlayerId, drawn: usize },
    ArchitectDrew { player: PlayerId, count: usize },
    ColorIncome { player: PlayerId, color: Color, amount: u32 },
    CrownPassed { player: PlayerId },
    MerchantBonus { player: PlayerId, amount: u32 },
    DistrictDestroyed { warlord: PlayerId, owner: PlayerId, district: String, paid: u32 },
    DistrictRecovered { player: PlayerId, district: String },
    DistrictBuilt { player: PlayerId, district: String, cost: u32 },
    CityCompleted { player: PlayerId, first: bool },
    Rejected { player: PlayerId, reason: RuleViolation },
    InvalidChoice { player: PlayerId, query: Query },
    GameOver { winner: PlayerId, score: u32 },
}

impl GameEvent {
    /// The seat this event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        use GameEvent::*;
        match self {
            RoundStarted { crown, .. } => Some(*crown),
            RoleCalled { holder, .. } => *holder,
            RobberyPlanned { thief, .. } | Robbed { thief, .. } => Some(*thief),
            DistrictDestroyed { warlord, .. } => Some(*warlord),
            GameOver { winner, .. } => Some(*winner),
            RoleChosen { player }
            | GoldTaken { player, .. }
            | CardsDrawn { player, .. }
            | CardKept { player, .. }
            | HandsExchanged { player, .. }
            | CardsReplaced { player, .. }
            | LaboratoryUsed { player, .. }
            | SmithyUsed { player, .. }
            | ArchitectDrew { player, .. }
            | ColorIncome { player, .. }
            | CrownPassed { player }
            | MerchantBonus { player, .. }
            | DistrictRecovered { player, .. }
            | DistrictBuilt { player, .. }
            | CityCompleted { player, .. }
            | Rejected { player, .. }
            | InvalidChoice { player, .. } => Some(*player),
            HiddenRoleRemoved | RoleDiscardedFaceUp { .. } | KingRedrawn | Eliminated { .. } => {
                None
            }
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GameEvent::*;
        match self {
            RoundStarted { round, crown } => {
                write!(f, "Round {round} begins; {crown} holds the crown.")
            }
            HiddenRoleRemoved => f.write_str("A mystery character was removed."),
            RoleDiscardedFaceUp { role } => write!(f, "{role} was removed."),
            KingRedrawn => {
                f.write_str("The King cannot be visibly removed, trying again...")
            }
            RoleChosen { player } => write!(f, "{player} chose a character."),
            RoleCalled { role, holder: None, .. } => {
                write!(f, "{}: No one is the {role}.", role.number())
            }
            RoleCalled { role, eliminated: true, .. } => {
                write!(f, "{}: The {role} was killed.", role.number())
            }
            RoleCalled { role, holder: Some(p), .. } => {
                write!(f, "{}: {p} is the {role}.", role.number())
            }
            Eliminated { role } => write!(f, "The Assassin kills the {role}."),
            RobberyPlanned { role, .. } => write!(f, "The Thief plans to rob the {role}."),
            Robbed { victim, amount, .. } => {
                write!(f, "The Thief stole {amount} gold from {victim}.")
            }
            GoldTaken { player, amount } => write!(f, "{player} took {amount} gold."),
            CardsDrawn { player, count } => write!(f, "{player} drew {count} card(s)."),
            CardKept { player, district } => write!(f, "{player} kept {district}."),
            HandsExchanged { player, with } => {
                write!(f, "{player} exchanged hands with {with}.")
            }
            CardsReplaced { player, count } => {
                write!(f, "{player} discarded and redrew {count} card(s).")
            }
            LaboratoryUsed { player, discarded } => {
                write!(f, "{player} discarded {discarded} for 1 gold (Laboratory).")
            }
            SmithyUsed { player, drawn } => {
                write!(f, "{player} used the Smithy and drew {drawn} card(s).")
            }
            ArchitectDrew { player, count } => {
                write!(f, "{player} drew {count} extra card(s) (Architect).")
            }
            ColorIncome { player, color, amount } => {
                write!(f, "{player} received {amount} gold from their {color} districts.")
            }
            CrownPassed { player } => write!(f, "{player} takes the crown."),
            MerchantBonus { player, amount } => {
                write!(f, "{player} gains an extra {amount} gold (Merchant).")
            }
            DistrictDestroyed { owner, district, paid, .. } => {
                write!(f, "The Warlord paid {paid} to destroy {district} in {owner}'s city.")
            }
            DistrictRecovered { player, district } => {
                write!(f, "{player} recovered {district} with the Graveyard.")
            }
            DistrictBuilt { player, district, cost } => {
                write!(f, "{player} built {district} for {cost}.")
            }
            CityCompleted { player, first: true } => {
                write!(f, "{player} completed their city first! This is the final round.")
            }
            CityCompleted { player, first: false } => {
                write!(f, "{player} completed their city.")
            }
            Rejected { player, reason } => write!(f, "{player}: {reason}."),
            InvalidChoice { player, query } => {
                write!(f, "{player}: invalid {}, please choose again.", query.describe())
            }
            GameOver { winner, score } => write!(f, "{winner} wins with {score} points!"),
        }
    }
}
