//! Round rules: the character draft, turn resolution and scoring.
//!
//! Every step works on a `RoundContext`: the mutable game state, the seat
//! decision sources and the event sink. Decisions are asked one at a time;
//! no state changes while a question is pending.
//!
//! ## Modules
//!
//! - `draft`: role discards and picks in crown order
//! - `turn`: the slot 1 to 8 loop and the per-turn step order
//! - `income`: base income and color income
//! - `abilities`: role abilities (Assassin, Thief, Magician, Architect, Warlord)
//! - `buildings`: Laboratory, Smithy and Graveyard
//! - `build`: the build phase
//! - `scoring`: final totals and the winner

pub mod abilities;
pub mod build;
pub mod buildings;
pub mod draft;
pub mod income;
pub mod scoring;
pub mod turn;

pub use draft::{face_up_count, run_draft, DraftOutcome};
pub use scoring::{score_game, score_player, FinalScores, ScoreBreakdown};
pub use turn::{resolve_turns, TurnRecord};

use crate::core::{GameState, PlayerId, PlayerMap, RuleViolation};
use crate::decision::{DecisionSource, PlayerView};
use crate::events::{EventSink, GameEvent, Query};

/// Seat decision sources, one per player.
pub type Deciders = PlayerMap<Box<dyn DecisionSource>>;

/// Everything a rule step may touch.
pub struct RoundContext<'a> {
    pub state: &'a mut GameState,
    pub deciders: &'a mut Deciders,
    pub events: &'a mut dyn EventSink,
}

impl<'a> RoundContext<'a> {
    pub fn new(
        state: &'a mut GameState,
        deciders: &'a mut Deciders,
        events: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            state,
            deciders,
            events,
        }
    }

    /// Ask `seat`'s decision source a question.
    pub fn ask<T>(
        &mut self,
        seat: PlayerId,
        query: impl FnOnce(&mut dyn DecisionSource, &PlayerView<'_>) -> T,
    ) -> T {
        let view = PlayerView::new(&*self.state, seat);
        query(self.deciders[seat].as_mut(), &view)
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.emit(event);
    }

    /// Report a move the rules refused.
    pub fn reject(&mut self, player: PlayerId, reason: RuleViolation) {
        tracing::debug!(%player, %reason, "rejected");
        self.events.emit(GameEvent::Rejected { player, reason });
    }

    /// Report an answer that was not one of the options.
    pub fn invalid(&mut self, player: PlayerId, query: Query) {
        tracing::debug!(%player, ?query, "invalid answer");
        self.events.emit(GameEvent::InvalidChoice { player, query });
    }
}
