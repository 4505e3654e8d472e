//! Game configuration.
//!
//! All tunable numbers of the base game live in `GameConfig`. The defaults
//! are the standard rules; tests and simulations override single values with
//! the `with_*` builders, and a JSON document may override any subset.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 4;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 7;

/// Tunable rule values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// City size that ends the game.
    pub completion_threshold: usize,

    /// Gold dealt to each seat at setup.
    pub starting_gold: u32,

    /// Districts dealt to each seat at setup.
    pub starting_hand_size: usize,

    /// Gold taken by the "gold" income choice.
    pub gold_income: u32,

    /// Cards drawn by the "cards" income choice.
    pub cards_drawn: usize,

    /// Cards drawn by the "cards" income choice with an Observatory.
    pub observatory_cards_drawn: usize,

    /// Extra cards the Architect draws.
    pub architect_extra_cards: usize,

    /// Districts the Architect may build in one turn.
    pub architect_build_limit: usize,

    /// Districts any other role may build in one turn.
    pub build_limit: usize,

    /// Gold paid to use the Smithy.
    pub smithy_cost: u32,

    /// Cards drawn by the Smithy.
    pub smithy_cards: usize,

    /// Bonus for a city with all five colors.
    pub diversity_bonus: u32,

    /// Bonus for the first city to complete.
    pub first_completion_bonus: u32,

    /// Bonus for any later completed city.
    pub completion_bonus: u32,

    /// Stop after this many rounds even if no city completed.
    ///
    /// `None` plays until completion. Used to bound automated simulations.
    pub round_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            completion_threshold: 8,
            starting_gold: 2,
            starting_hand_size: 4,
            gold_income: 2,
            cards_drawn: 2,
            observatory_cards_drawn: 3,
            architect_extra_cards: 2,
            architect_build_limit: 3,
            build_limit: 1,
            smithy_cost: 2,
            smithy_cards: 3,
            diversity_bonus: 3,
            first_completion_bonus: 4,
            completion_bonus: 2,
            round_limit: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SetupError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SetupError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are playable.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.completion_threshold == 0 {
            return Err(SetupError::InvalidConfig(
                "completion_threshold must be at least 1".into(),
            ));
        }
        if self.build_limit == 0 || self.architect_build_limit == 0 {
            return Err(SetupError::InvalidConfig("build limits must be at least 1".into()));
        }
        if self.cards_drawn == 0 || self.observatory_cards_drawn == 0 {
            return Err(SetupError::InvalidConfig("income draws must be at least 1".into()));
        }
        if self.round_limit == Some(0) {
            return Err(SetupError::InvalidConfig("round_limit must be at least 1".into()));
        }
        Ok(())
    }

    /// Set the completion threshold.
    #[must_use]
    pub fn with_completion_threshold(mut self, size: usize) -> Self {
        self.completion_threshold = size;
        self
    }

    /// Set the gold and cards dealt at setup.
    #[must_use]
    pub fn with_starting_resources(mut self, gold: u32, hand_size: usize) -> Self {
        self.starting_gold = gold;
        self.starting_hand_size = hand_size;
        self
    }

    /// Cap the number of rounds.
    #[must_use]
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = Some(rounds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.completion_threshold, 8);
        assert_eq!(config.starting_gold, 2);
        assert_eq!(config.starting_hand_size, 4);
        assert_eq!(config.architect_build_limit, 3);
        assert_eq!(config.round_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_completion_threshold(5)
            .with_starting_resources(10, 0)
            .with_round_limit(30);

        assert_eq!(config.completion_threshold, 5);
        assert_eq!(config.starting_gold, 10);
        assert_eq!(config.starting_hand_size, 0);
        assert_eq!(config.round_limit, Some(30));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "completion_threshold": 7 }"#).unwrap();
        assert_eq!(config.completion_threshold, 7);
        assert_eq!(config.smithy_cost, 2);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(GameConfig::from_json_str(r#"{ "build_limit": 0 }"#).is_err());
        assert!(GameConfig::from_json_str("not json").is_err());
    }
}
