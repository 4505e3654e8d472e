//! End-of-game scoring.
//!
//! A city scores the sum of its district costs, plus:
//! - the diversity bonus for holding all five colors,
//! - the first-completion bonus for the first completed city, or the
//!   completion bonus for any other completed city,
//! - each district's own bonus (University, Dragon Gate).
//!
//! The winner has the highest total. Ties go to the seat that held the
//! highest role number in the final round, then to the earliest seat.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::core::{GameConfig, GameState, Player, PlayerId};

/// One seat's final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub player: PlayerId,
    pub district_points: u32,
    pub diversity_bonus: u32,
    pub completion_bonus: u32,
    pub district_bonus: u32,
    pub total: u32,
}

/// Scores of every seat and the winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScores {
    /// In seating order.
    pub scores: Vec<ScoreBreakdown>,
    pub winner: PlayerId,
}

impl FinalScores {
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<&ScoreBreakdown> {
        self.scores.iter().find(|s| s.player == player)
    }

    /// The winning seat's score.
    #[must_use]
    pub fn winning_total(&self) -> u32 {
        self.score_of(self.winner).map_or(0, |s| s.total)
    }
}

/// Score one seat.
#[must_use]
pub fn score_player(
    config: &GameConfig,
    player: &Player,
    first_completer: Option<PlayerId>,
) -> ScoreBreakdown {
    let city = &player.city;
    let district_points = city.total_cost();
    let diversity_bonus = if city.has_all_colors() {
        config.diversity_bonus
    } else {
        0
    };
    let completion_bonus = if first_completer == Some(player.id) {
        config.first_completion_bonus
    } else if city.len() >= config.completion_threshold {
        config.completion_bonus
    } else {
        0
    };
    let district_bonus = city.total_bonus();

    ScoreBreakdown {
        player: player.id,
        district_points,
        diversity_bonus,
        completion_bonus,
        district_bonus,
        total: district_points + diversity_bonus + completion_bonus + district_bonus,
    }
}

/// Score every seat and pick the winner.
#[must_use]
pub fn score_game(state: &GameState) -> FinalScores {
    let first = state.end.first_completer();
    let scores: Vec<ScoreBreakdown> = state
        .players
        .values()
        .map(|p| score_player(&state.config, p, first))
        .collect();

    let winner = state
        .players
        .values()
        .zip(&scores)
        .max_by_key(|(p, s)| (s.total, p.role.map_or(0, |r| r.number()), Reverse(p.id)))
        .map_or(PlayerId::new(1), |(p, _)| p.id);

    tracing::info!(%winner, "game scored");
    FinalScores { scores, winner }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{names, Color, District};
    use crate::core::{Controller, GameRng, PlayerMap};
    use crate::roles::Role;
    use crate::zones::DrawPile;

    fn d(name: &str, color: Color, cost: u32) -> District {
        District::new(name, color, cost, "")
    }

    fn player_with(id: u8, city: Vec<District>) -> Player {
        let mut p = Player::new(PlayerId::new(id), Controller::Automated);
        for district in city {
            p.city.add(district).unwrap();
        }
        p
    }

    #[test]
    fn test_diversity_example() {
        let p = player_with(
            1,
            vec![
                d("Tavern", Color::Green, 1),
                d("Church", Color::Blue, 2),
                d("Battlefield", Color::Red, 3),
                d("Palace", Color::Yellow, 5),
                d("Keep", Color::Purple, 6),
            ],
        );
        let score = score_player(&GameConfig::default(), &p, None);
        assert_eq!(score.district_points, 17);
        assert_eq!(score.diversity_bonus, 3);
        assert_eq!(score.total, 20);
    }

    #[test]
    fn test_completion_bonuses() {
        let city: Vec<_> = (0..8).map(|i| d(&format!("D{i}"), Color::Green, 3)).collect();
        let first = player_with(1, city.clone());
        let second = player_with(2, city);
        let config = GameConfig::default();

        let first_score = score_player(&config, &first, Some(PlayerId::new(1)));
        let second_score = score_player(&config, &second, Some(PlayerId::new(1)));
        assert_eq!(first_score.total, 28);
        assert_eq!(second_score.total, 26);
    }

    #[test]
    fn test_district_bonus() {
        let p = player_with(
            1,
            vec![
                d(names::UNIVERSITY, Color::Purple, 6),
                d(names::DRAGON_GATE, Color::Purple, 6),
            ],
        );
        let score = score_player(&GameConfig::default(), &p, None);
        assert_eq!(score.district_bonus, 4);
        assert_eq!(score.total, 16);
    }

    #[test]
    fn test_tie_break_by_role_then_seat() {
        let mut players = PlayerMap::new(4, |id| player_with(id.number(), Vec::new()));
        for id in [1, 3, 4] {
            players[PlayerId::new(id)]
                .city
                .add(d("Manor", Color::Yellow, 3))
                .unwrap();
        }
        players[PlayerId::new(1)].role = Some(Role::King);
        players[PlayerId::new(3)].role = Some(Role::Warlord);
        players[PlayerId::new(4)].role = Some(Role::Assassin);

        let mut state = GameState::new(
            GameConfig::default(),
            players,
            DrawPile::new(),
            PlayerId::new(1),
            GameRng::new(0),
        );
        assert_eq!(score_game(&state).winner, PlayerId::new(3));

        state.players[PlayerId::new(3)].role = Some(Role::King);
        state.players[PlayerId::new(1)].role = Some(Role::King);
        assert_eq!(score_game(&state).winner, PlayerId::new(1));
    }
}
