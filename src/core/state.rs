//! Game state.
//!
//! ## GameState
//!
//! Everything the rules mutate:
//! - Players (gold, hand, city, role) in seating order
//! - The shared draw pile
//! - The crown holder
//! - Round-scoped state, reset between rounds
//! - The sticky game-end latch
//! - The game's random generator
//!
//! Decision sources are not part of the state; the game loop owns them
//! alongside it.

use super::config::GameConfig;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::roles::Role;
use crate::zones::DrawPile;

/// Per-round outcomes of the Assassin and the Thief.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundState {
    /// Role killed by the Assassin this round.
    pub eliminated: Option<Role>,

    /// Role the Thief robs when it is called.
    pub robbed: Option<Role>,

    /// Seat holding the Thief, once it has named a target.
    pub thief: Option<PlayerId>,
}

impl RoundState {
    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check whether a role was killed this round.
    #[must_use]
    pub fn is_eliminated(&self, role: Role) -> bool {
        self.eliminated == Some(role)
    }
}

/// Sticky end-of-game state.
///
/// Once triggered it is never cleared, and the first completer is never
/// replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameEnd {
    triggered: bool,
    first_completer: Option<PlayerId>,
}

impl GameEnd {
    /// Restore a saved latch.
    #[must_use]
    pub fn from_parts(triggered: bool, first_completer: Option<PlayerId>) -> Self {
        Self {
            triggered: triggered || first_completer.is_some(),
            first_completer,
        }
    }

    /// Check whether the game ends after this round.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// The first seat whose city completed.
    #[must_use]
    pub fn first_completer(&self) -> Option<PlayerId> {
        self.first_completer
    }

    /// Record a completed city. Returns `true` if `player` became the first completer.
    pub fn latch(&mut self, player: PlayerId) -> bool {
        self.triggered = true;
        if self.first_completer.is_none() {
            self.first_completer = Some(player);
            true
        } else {
            false
        }
    }
}

/// Complete mutable game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Rule values.
    pub config: GameConfig,

    /// Seats in order.
    pub players: PlayerMap<Player>,

    /// Shared draw pile.
    pub draw_pile: DrawPile,

    /// Seat that picks a role first.
    pub crown: PlayerId,

    /// Reset between rounds.
    pub round: RoundState,

    /// Never reset.
    pub end: GameEnd,

    /// Drives every shuffle.
    pub rng: GameRng,

    /// Rounds started so far.
    pub round_number: u32,
}

impl GameState {
    /// Create a state in which no round has started.
    #[must_use]
    pub fn new(
        config: GameConfig,
        players: PlayerMap<Player>,
        draw_pile: DrawPile,
        crown: PlayerId,
        rng: GameRng,
    ) -> Self {
        Self {
            config,
            players,
            draw_pile,
            crown,
            round: RoundState::default(),
            end: GameEnd::default(),
            rng,
            round_number: 0,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a seat, or `None` for an unknown seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Seat holding a role this round.
    #[must_use]
    pub fn holder_of(&self, role: Role) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.role == Some(role))
            .map(|(id, _)| id)
    }

    /// Check whether a city has reached the completion size.
    #[must_use]
    pub fn is_complete(&self, player: PlayerId) -> bool {
        self.players
            .get(player)
            .is_some_and(|p| p.city.len() >= self.config.completion_threshold)
    }

    /// Latch the game end if `player`'s city is complete.
    ///
    /// Returns `true` if this call recorded `player` as the first completer.
    pub fn record_completion(&mut self, player: PlayerId) -> bool {
        if !self.is_complete(player) {
            return false;
        }
        let first = self.end.latch(player);
        if first {
            tracing::info!(%player, round = self.round_number, "first city completed");
        }
        first
    }

    /// Clear round-scoped state and every held role.
    ///
    /// The game-end latch is untouched.
    pub fn reset_round(&mut self) {
        self.round.reset();
        for (_, player) in self.players.iter_mut() {
            player.role = None;
        }
    }

    /// Every district in play: draw pile, hands and cities.
    pub fn all_districts(&self) -> impl Iterator<Item = &crate::cards::District> {
        self.draw_pile.iter().chain(
            self.players
                .values()
                .flat_map(|p| p.hand.iter().chain(p.city.iter())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, District};
    use crate::core::player::Controller;

    fn state(players: usize) -> GameState {
        GameState::new(
            GameConfig::default().with_completion_threshold(2),
            PlayerMap::new(players, |id| Player::new(id, Controller::Automated)),
            DrawPile::new(),
            PlayerId::new(1),
            GameRng::new(1),
        )
    }

    #[test]
    fn test_latch_is_sticky() {
        let mut end = GameEnd::default();
        assert!(end.latch(PlayerId::new(3)));
        assert!(!end.latch(PlayerId::new(1)));
        assert!(end.is_triggered());
        assert_eq!(end.first_completer(), Some(PlayerId::new(3)));
    }

    #[test]
    fn test_record_completion_needs_threshold() {
        let mut s = state(4);
        let p2 = PlayerId::new(2);
        s.players[p2]
            .city
            .add(District::new("Temple", Color::Blue, 1, ""))
            .unwrap();
        assert!(!s.record_completion(p2));
        assert!(!s.end.is_triggered());

        s.players[p2]
            .city
            .add(District::new("Tavern", Color::Green, 1, ""))
            .unwrap();
        assert!(s.record_completion(p2));
        assert_eq!(s.end.first_completer(), Some(p2));
    }

    #[test]
    fn test_reset_round_keeps_latch() {
        let mut s = state(4);
        s.round.eliminated = Some(Role::King);
        s.round.thief = Some(PlayerId::new(2));
        s.players[PlayerId::new(1)].role = Some(Role::Bishop);
        s.end.latch(PlayerId::new(4));

        s.reset_round();

        assert_eq!(s.round, RoundState::default());
        assert_eq!(s.players[PlayerId::new(1)].role, None);
        assert!(s.end.is_triggered());
        assert_eq!(s.end.first_completer(), Some(PlayerId::new(4)));
    }

    #[test]
    fn test_holder_of() {
        let mut s = state(5);
        s.players[PlayerId::new(4)].role = Some(Role::Warlord);
        assert_eq!(s.holder_of(Role::Warlord), Some(PlayerId::new(4)));
        assert_eq!(s.holder_of(Role::King), None);
    }
}
