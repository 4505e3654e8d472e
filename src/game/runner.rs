//! Playing rounds until the game ends.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, PersistenceError, PlayerId};
use crate::decision::DecisionSource;
use crate::events::{EventSink, GameEvent};
use crate::persistence::GameSnapshot;
use crate::rules::{
    resolve_turns, run_draft, score_game, Deciders, DraftOutcome, FinalScores, RoundContext,
    TurnRecord,
};

use super::builder::resumed_deciders;

/// Why the game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A city reached the completion threshold and its round finished.
    CityCompleted,
    /// The configured round limit was reached first.
    RoundLimit,
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub scores: FinalScores,
    pub winner: PlayerId,
    pub rounds: u32,
    pub reason: EndReason,
}

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub draft: DraftOutcome,
    pub turns: Vec<TurnRecord>,
}

/// A game in progress: the state, a decision source per seat and a sink.
pub struct Game {
    state: GameState,
    deciders: Deciders,
    sink: Box<dyn EventSink>,
}

impl Game {
    pub(crate) fn from_parts(state: GameState, deciders: Deciders, sink: Box<dyn EventSink>) -> Self {
        Self {
            state,
            deciders,
            sink,
        }
    }

    /// Resume a saved game with default decision sources.
    ///
    /// Automated seats pick up their saved generator positions; seats saved
    /// without one get a fresh stream derived from the saved seed.
    pub fn restore(
        snapshot: GameSnapshot,
        config: GameConfig,
        sink: Box<dyn EventSink>,
    ) -> Result<Self, PersistenceError> {
        let saved: Vec<_> = snapshot.players.iter().map(|r| r.rng.clone()).collect();
        let state = snapshot.restore(config)?;
        let deciders = resumed_deciders(&state.players, state.rng.seed(), &saved);
        Ok(Self::from_parts(state, deciders, sink))
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Replace the decision source for `seat`, returning the old one.
    pub fn set_decider(
        &mut self,
        seat: PlayerId,
        decider: Box<dyn DecisionSource>,
    ) -> Option<Box<dyn DecisionSource>> {
        let slot = self.deciders.get_mut(seat)?;
        Some(std::mem::replace(slot, decider))
    }

    /// Replace the notification sink, returning the old one.
    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) -> Box<dyn EventSink> {
        std::mem::replace(&mut self.sink, sink)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.end.is_triggered()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::capture(&self.state);
        for (record, decider) in snapshot.players.iter_mut().zip(self.deciders.values()) {
            record.rng = decider.rng_state();
        }
        snapshot
    }

    /// Draft, resolve every slot, then clear the round unless the game ended.
    pub fn play_round(&mut self) -> RoundReport {
        self.state.round_number += 1;
        let round = self.state.round_number;
        let crown = self.state.crown;
        tracing::info!(round, %crown, "round started");
        self.sink.emit(GameEvent::RoundStarted { round, crown });

        let mut ctx = RoundContext::new(&mut self.state, &mut self.deciders, self.sink.as_mut());
        let draft = run_draft(&mut ctx);
        let turns = resolve_turns(&mut ctx);

        if !self.state.end.is_triggered() {
            self.state.reset_round();
        }
        tracing::debug!(round, turns = turns.len(), "round over");
        RoundReport { round, draft, turns }
    }

    /// Play rounds until a completed round ends the game, then score it.
    pub fn run(&mut self) -> GameOutcome {
        let reason = loop {
            if self.state.end.is_triggered() {
                break EndReason::CityCompleted;
            }
            if matches!(self.state.config.round_limit, Some(limit) if self.state.round_number >= limit)
            {
                tracing::warn!(rounds = self.state.round_number, "round limit reached");
                break EndReason::RoundLimit;
            }
            self.play_round();
        };

        let scores = score_game(&self.state);
        let winner = scores.winner;
        let score = scores.winning_total();
        self.sink.emit(GameEvent::GameOver { winner, score });
        tracing::info!(%winner, score, rounds = self.state.round_number, ?reason, "game over");

        GameOutcome {
            scores,
            winner,
            rounds: self.state.round_number,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::events::NullSink;
    use crate::game::GameBuilder;

    #[test]
    fn test_round_assigns_roles_and_counts() {
        let mut game = GameBuilder::new()
            .player_count(5)
            .sink(Box::new(NullSink))
            .build(11)
            .unwrap();
        let report = game.play_round();

        assert_eq!(report.round, 1);
        assert_eq!(report.draft.picks.len(), 5);
        assert_eq!(game.state().round_number, 1);
        if !game.is_over() {
            assert!(game.state().players.values().all(|p| p.role.is_none()));
        }
    }

    #[test]
    fn test_run_ends_on_round_limit() {
        let mut game = GameBuilder::new()
            .player_count(4)
            .config(GameConfig::default().with_completion_threshold(40).with_round_limit(3))
            .sink(Box::new(NullSink))
            .build(5)
            .unwrap();
        let outcome = game.run();

        assert_eq!(outcome.reason, EndReason::RoundLimit);
        assert_eq!(outcome.rounds, 3);
        assert_eq!(outcome.scores.scores.len(), 4);
    }

    #[test]
    fn test_run_ends_when_a_city_completes() {
        let mut game = GameBuilder::new()
            .player_count(4)
            .config(GameConfig::default().with_round_limit(200))
            .sink(Box::new(NullSink))
            .build(9)
            .unwrap();
        let outcome = game.run();

        assert_eq!(outcome.reason, EndReason::CityCompleted);
        assert_eq!(outcome.winner, outcome.scores.winner);
        let first = game.state().end.first_completer().unwrap();
        assert!(game.state().is_complete(first));
        assert!(outcome.scores.score_of(first).unwrap().completion_bonus == 4);
    }

    #[test]
    fn test_set_decider_unknown_seat() {
        let mut game = GameBuilder::new().sink(Box::new(NullSink)).build(1).unwrap();
        let ai = crate::decision::AutomatedDecider::new(PlayerId::new(7), 1);
        assert!(game.set_decider(PlayerId::new(7), Box::new(ai)).is_none());
    }
}
