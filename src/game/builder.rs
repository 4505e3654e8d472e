//! Game setup.

use crate::cards::{expand, standard_catalog, District};
use crate::core::{
    Controller, GameConfig, GameRng, GameRngState, GameState, Player, PlayerId, PlayerMap,
    SetupError, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::decision::{AutomatedDecider, ConsoleDecider, DecisionSource};
use crate::events::{EventSink, TracingSink};
use crate::rules::Deciders;
use crate::zones::DrawPile;

use super::Game;

/// Builder for a new game.
///
/// ```
/// use citadels_engine::core::Controller;
/// use citadels_engine::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player_count(5)
///     .controllers(vec![Controller::Automated; 5])
///     .build(42)
///     .unwrap();
/// assert_eq!(game.state().player_count(), 5);
/// assert!(game.state().players.values().all(|p| p.gold() == 2 && p.hand.len() == 4));
/// ```
pub struct GameBuilder {
    player_count: usize,
    controllers: Option<Vec<Controller>>,
    districts: Option<Vec<District>>,
    config: GameConfig,
    deciders: Vec<(PlayerId, Box<dyn DecisionSource>)>,
    sink: Option<Box<dyn EventSink>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            controllers: None,
            districts: None,
            config: GameConfig::default(),
            deciders: Vec::new(),
            sink: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats at the table. Checked by `build`.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// One controller per seat, in seating order. Defaults to all automated.
    #[must_use]
    pub fn controllers(mut self, controllers: Vec<Controller>) -> Self {
        self.controllers = Some(controllers);
        self
    }

    /// District instances for the draw pile. Defaults to the standard catalog.
    #[must_use]
    pub fn districts(mut self, districts: Vec<District>) -> Self {
        self.districts = Some(districts);
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Answer `seat`'s queries with `decider` instead of the controller default.
    #[must_use]
    pub fn decider(mut self, seat: PlayerId, decider: Box<dyn DecisionSource>) -> Self {
        self.deciders.push((seat, decider));
        self
    }

    /// Receive notifications. Defaults to `TracingSink`.
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Shuffle, seat, deal and pass out the crown.
    pub fn build(self, seed: u64) -> Result<Game, SetupError> {
        let count = self.player_count;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount {
                got: count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        self.config.validate()?;

        let controllers = self
            .controllers
            .unwrap_or_else(|| vec![Controller::Automated; count]);
        if controllers.len() != count {
            return Err(SetupError::ControllerCount {
                expected: count,
                got: controllers.len(),
            });
        }

        let mut rng = GameRng::new(seed);
        let districts = self
            .districts
            .unwrap_or_else(|| expand(&standard_catalog()));
        let mut draw_pile = DrawPile::from_districts(districts);
        draw_pile.shuffle(&mut rng);

        let mut players = PlayerMap::new(count, |id| Player::new(id, controllers[id.index()]));
        for (_, player) in players.iter_mut() {
            player.add_gold(self.config.starting_gold);
            for district in draw_pile.draw_many(self.config.starting_hand_size) {
                player.add_to_hand(district);
            }
        }

        let crown = PlayerId::from_index(rng.gen_range_usize(0..count));
        let state = GameState::new(self.config, players, draw_pile, crown, rng);

        let mut overrides: Vec<Option<Box<dyn DecisionSource>>> =
            (0..count).map(|_| None).collect();
        for (seat, decider) in self.deciders {
            let slot = usize::from(seat.number())
                .checked_sub(1)
                .and_then(|index| overrides.get_mut(index))
                .ok_or(SetupError::UnknownSeat(seat))?;
            *slot = Some(decider);
        }
        let deciders = PlayerMap::from_vec(
            state
                .players
                .values()
                .zip(overrides)
                .map(|(player, custom)| {
                    custom.unwrap_or_else(|| default_decider(player.id, player.controller, seed))
                })
                .collect(),
        );

        tracing::info!(
            players = count,
            seed,
            %crown,
            draw_pile = state.draw_pile.len(),
            "game created"
        );

        let sink = self.sink.unwrap_or_else(|| Box::new(TracingSink));
        Ok(Game::from_parts(state, deciders, sink))
    }
}

/// The decision source a controller gets when none is supplied.
#[must_use]
pub fn default_decider(seat: PlayerId, controller: Controller, seed: u64) -> Box<dyn DecisionSource> {
    match controller {
        Controller::Automated => Box::new(AutomatedDecider::new(seat, seed)),
        Controller::Interactive => Box::new(ConsoleDecider::stdio()),
    }
}

/// Decision sources for a resumed game. Automated seats continue from their
/// saved generator position when one is given.
pub(crate) fn resumed_deciders(
    players: &PlayerMap<Player>,
    seed: u64,
    saved: &[Option<GameRngState>],
) -> Deciders {
    PlayerMap::from_vec(
        players
            .values()
            .map(|p| match (p.controller, saved.get(p.id.index()).and_then(Option::as_ref)) {
                (Controller::Automated, Some(rng)) => Box::new(AutomatedDecider::with_rng(
                    p.id,
                    GameRng::from_state(rng),
                )) as Box<dyn DecisionSource>,
                _ => default_decider(p.id, p.controller, seed),
            })
            .collect(),
    )
}
