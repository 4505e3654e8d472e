//! Decision sources: who answers the engine's questions for a seat.
//!
//! Every seat is bound to one `DecisionSource` when the game is created.
//! The engine never branches on whether a seat is interactive; it asks the
//! seat's source and validates the answer. An invalid answer is reported
//! and the same question is asked again.
//!
//! ## Key Types
//!
//! - `DecisionSource`: the query trait
//! - `PlayerView`: read-only view of the table for one seat
//! - `AutomatedDecider`: built-in heuristics
//! - `ConsoleDecider`: line-based prompts for a person

pub mod automated;
pub mod console;

pub use automated::AutomatedDecider;
pub use console::ConsoleDecider;

use serde::{Deserialize, Serialize};

use crate::cards::{City, Color, District};
use crate::core::{
    GameConfig, GameRngState, GameState, Player, PlayerId, RoundState, RuleViolation,
};
use crate::roles::Role;
use crate::rules::abilities;

/// Roles offered to the seat choosing next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleOffer {
    /// Roles that may be chosen.
    pub available: Vec<Role>,

    /// Roles discarded face up this round.
    pub face_up: Vec<Role>,

    /// Last pick at a seven-player table: `available` is the one role left
    /// in the pool plus the hidden role.
    pub last_of_seven: bool,
}

impl RoleOffer {
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.available.contains(&role)
    }
}

/// Base income choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeChoice {
    Gold,
    Cards,
}

/// The Magician's optional action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagicianAction {
    /// Swap whole hands with another seat.
    Exchange(PlayerId),
    /// Discard these hand positions and draw as many.
    Discard(Vec<usize>),
    Decline,
}

/// A district the Warlord wants to destroy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarlordTarget {
    pub player: PlayerId,
    /// Position in the target's city.
    pub district: usize,
}

/// One step of the build phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildChoice {
    /// Build the hand card at this position.
    Build(usize),
    EndTurn,
}

/// Answers every question the engine asks a seat.
///
/// Implementations may return anything; the engine validates each answer.
pub trait DecisionSource {
    /// Pick a role from `offer.available`.
    fn choose_role(&mut self, view: &PlayerView<'_>, offer: &RoleOffer) -> Role;

    /// Role to kill. Anything other than roles 2 to 8 means no target.
    fn choose_assassin_target(&mut self, view: &PlayerView<'_>) -> Option<Role>;

    /// Role to rob. Anything outside 3 to 8, or `excluded`, means no target.
    fn choose_theft_target(&mut self, view: &PlayerView<'_>, excluded: Option<Role>)
        -> Option<Role>;

    fn choose_income(&mut self, view: &PlayerView<'_>) -> IncomeChoice;

    /// Position in `drawn` of the card to keep.
    fn choose_card_to_keep(&mut self, view: &PlayerView<'_>, drawn: &[District]) -> usize;

    fn choose_magician_action(&mut self, view: &PlayerView<'_>) -> MagicianAction;

    /// Hand position to discard for 1 gold, or `None` to skip the Laboratory.
    fn use_laboratory(&mut self, view: &PlayerView<'_>) -> Option<usize>;

    /// Pay for the Smithy draw?
    fn use_smithy(&mut self, view: &PlayerView<'_>) -> bool;

    /// Color the School of Magic counts as while `slot_color` income is paid.
    fn choose_school_of_magic_color(&mut self, view: &PlayerView<'_>, slot_color: Color) -> Color;

    fn choose_warlord_target(&mut self, view: &PlayerView<'_>) -> Option<WarlordTarget>;

    /// Pay 1 gold to take `destroyed` back into hand?
    fn choose_graveyard_recovery(&mut self, view: &PlayerView<'_>, destroyed: &District) -> bool;

    /// Next build step; `remaining` builds are left this turn.
    fn choose_build(&mut self, view: &PlayerView<'_>, remaining: usize) -> BuildChoice;

    /// Position of this source's private generator, if it has one to save.
    fn rng_state(&self) -> Option<GameRngState> {
        None
    }
}

impl<D: DecisionSource + ?Sized> DecisionSource for Box<D> {
    fn choose_role(&mut self, view: &PlayerView<'_>, offer: &RoleOffer) -> Role {
        (**self).choose_role(view, offer)
    }

    fn choose_assassin_target(&mut self, view: &PlayerView<'_>) -> Option<Role> {
        (**self).choose_assassin_target(view)
    }

    fn choose_theft_target(
        &mut self,
        view: &PlayerView<'_>,
        excluded: Option<Role>,
    ) -> Option<Role> {
        (**self).choose_theft_target(view, excluded)
    }

    fn choose_income(&mut self, view: &PlayerView<'_>) -> IncomeChoice {
        (**self).choose_income(view)
    }

    fn choose_card_to_keep(&mut self, view: &PlayerView<'_>, drawn: &[District]) -> usize {
        (**self).choose_card_to_keep(view, drawn)
    }

    fn choose_magician_action(&mut self, view: &PlayerView<'_>) -> MagicianAction {
        (**self).choose_magician_action(view)
    }

    fn use_laboratory(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        (**self).use_laboratory(view)
    }

    fn use_smithy(&mut self, view: &PlayerView<'_>) -> bool {
        (**self).use_smithy(view)
    }

    fn choose_school_of_magic_color(&mut self, view: &PlayerView<'_>, slot_color: Color) -> Color {
        (**self).choose_school_of_magic_color(view, slot_color)
    }

    fn choose_warlord_target(&mut self, view: &PlayerView<'_>) -> Option<WarlordTarget> {
        (**self).choose_warlord_target(view)
    }

    fn choose_graveyard_recovery(&mut self, view: &PlayerView<'_>, destroyed: &District) -> bool {
        (**self).choose_graveyard_recovery(view, destroyed)
    }

    fn choose_build(&mut self, view: &PlayerView<'_>, remaining: usize) -> BuildChoice {
        (**self).choose_build(view, remaining)
    }

    fn rng_state(&self) -> Option<GameRngState> {
        (**self).rng_state()
    }
}

/// What one seat may look at while deciding.
///
/// Own hand and gold in full; for other seats, hand size, gold, city and
/// revealed role.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    state: &'a GameState,
    seat: PlayerId,
}

impl<'a> PlayerView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState, seat: PlayerId) -> Self {
        Self { state, seat }
    }

    /// The deciding seat.
    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    /// The deciding seat's full state.
    #[must_use]
    pub fn me(&self) -> &'a Player {
        &self.state.players[self.seat]
    }

    #[must_use]
    pub fn config(&self) -> &'a GameConfig {
        &self.state.config
    }

    #[must_use]
    pub fn round(&self) -> &'a RoundState {
        &self.state.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.state.round_number
    }

    #[must_use]
    pub fn crown(&self) -> PlayerId {
        self.state.crown
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.state.draw_pile.len()
    }

    /// Every other seat, in seating order.
    pub fn others(&self) -> impl Iterator<Item = PlayerId> + 'a {
        let seat = self.seat;
        self.state.players.player_ids().filter(move |p| *p != seat)
    }

    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> Option<usize> {
        self.state.player(player).map(|p| p.hand.len())
    }

    #[must_use]
    pub fn gold(&self, player: PlayerId) -> Option<u32> {
        self.state.player(player).map(Player::gold)
    }

    #[must_use]
    pub fn city(&self, player: PlayerId) -> Option<&'a City> {
        self.state.player(player).map(|p| &p.city)
    }

    /// Gold the deciding seat would pay to destroy a district, if allowed.
    pub fn destroy_cost(&self, target: PlayerId, district: usize) -> Result<u32, RuleViolation> {
        abilities::destroy_cost(self.state, self.seat, target, district)
    }
}
