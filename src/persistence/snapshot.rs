//! Saved games.
//!
//! A `GameSnapshot` holds everything needed to continue a game between
//! rounds: every seat in seating order, the draw pile in order, the crown,
//! the end-of-game latch, the round counter and the generator position.
//! Seats with an automated decision source also keep that source's
//! generator position, so a resumed game makes the same choices.
//! Relations (crown, first completer) are stored as seat ids and resolved on
//! restore; a dangling id is an error.
//!
//! ## Encodings
//!
//! - JSON (`serde_json`): human-readable save files
//! - Binary (`bincode`): compact, for in-process checkpoints
//!
//! ```
//! use citadels_engine::game::GameBuilder;
//! use citadels_engine::persistence::GameSnapshot;
//!
//! let game = GameBuilder::new().player_count(4).build(7).unwrap();
//! let snapshot = GameSnapshot::capture(game.state());
//! let json = snapshot.to_json().unwrap();
//!
//! let back = GameSnapshot::from_json(&json).unwrap();
//! assert_eq!(back, snapshot);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cards::District;
use crate::core::{
    Controller, GameConfig, GameEnd, GameRng, GameRngState, GameState, PersistenceError, Player,
    PlayerId, PlayerMap,
};
use crate::roles::Role;
use crate::zones::DrawPile;

/// One saved seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: u8,
    pub is_human: bool,
    pub gold: u32,
    /// Role number held, 0 for none.
    pub character: u8,
    pub hand: Vec<District>,
    pub city: Vec<District>,
    /// Generator position of the seat's automated decision source.
    #[serde(default)]
    pub rng: Option<GameRngState>,
}

impl PlayerRecord {
    fn capture(player: &Player) -> Self {
        Self {
            id: player.id.number(),
            is_human: player.controller.is_interactive(),
            gold: player.gold(),
            character: player.role.map_or(0, Role::number),
            hand: player.hand.clone(),
            city: player.city.iter().cloned().collect(),
            rng: None,
        }
    }

    fn restore(self) -> Result<Player, PersistenceError> {
        let controller = if self.is_human {
            Controller::Interactive
        } else {
            Controller::Automated
        };
        let mut player = Player::new(PlayerId::new(self.id), controller);
        player.add_gold(self.gold);
        player.role = match self.character {
            0 => None,
            n => Some(Role::from_number(n).ok_or(PersistenceError::UnknownRole(n))?),
        };
        player.hand = self.hand;
        for district in self.city {
            let name = district.name.clone();
            player
                .city
                .add(district)
                .map_err(|_| PersistenceError::DuplicateDistrict { player: self.id, name })?;
        }
        Ok(player)
    }
}

/// Everything needed to resume a game between rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<PlayerRecord>,
    pub deck: Vec<District>,
    pub crown: u8,
    pub first_completer: Option<u8>,
    pub game_end_triggered: bool,
    #[serde(default)]
    pub round_number: u32,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Capture a state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            players: state.players.values().map(PlayerRecord::capture).collect(),
            deck: state.draw_pile.iter().cloned().collect(),
            crown: state.crown.number(),
            first_completer: state.end.first_completer().map(PlayerId::number),
            game_end_triggered: state.end.is_triggered(),
            round_number: state.round_number,
            rng: state.rng.state(),
        }
    }

    /// Rebuild a state, checking every id.
    pub fn restore(self, config: GameConfig) -> Result<GameState, PersistenceError> {
        if self.players.is_empty() {
            return Err(PersistenceError::NoPlayers);
        }
        let mut players = Vec::with_capacity(self.players.len());
        for (seat, record) in self.players.into_iter().enumerate() {
            let expected = PlayerId::from_index(seat);
            if record.id != expected.number() {
                return Err(PersistenceError::SeatOrder { seat: seat + 1, found: record.id });
            }
            players.push(record.restore()?);
        }
        let players = PlayerMap::from_vec(players);

        let crown = PlayerId::new(self.crown);
        if !players.contains(crown) {
            return Err(PersistenceError::UnknownPlayer { role: "crown holder", id: self.crown });
        }
        let first_completer = match self.first_completer {
            Some(id) if !players.contains(PlayerId::new(id)) => {
                return Err(PersistenceError::UnknownPlayer { role: "first completer", id });
            }
            other => other.map(PlayerId::new),
        };

        let mut state = GameState::new(
            config,
            players,
            DrawPile::from_districts(self.deck),
            crown,
            GameRng::from_state(&self.rng),
        );
        state.end = GameEnd::from_parts(self.game_end_triggered, first_completer);
        state.round_number = self.round_number;

        tracing::debug!(
            players = state.player_count(),
            round = state.round_number,
            "snapshot restored"
        );
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistenceError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Write a JSON save file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "game saved");
        Ok(())
    }

    /// Read a JSON save file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let snapshot = Self::from_json(&fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), "game loaded");
        Ok(snapshot)
    }
}
