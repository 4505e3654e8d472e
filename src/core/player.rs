//! Seats at the table and per-seat state.
//!
//! ## PlayerId
//!
//! Stable seat identifier. Seats are numbered from 1 in seating order,
//! which is also the baseline turn order.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Mutable per-seat state: gold, hand, city and the role held this round.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{City, District};
use crate::core::error::RuleViolation;
use crate::roles::Role;

/// Seat identifier, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a seat ID from its 1-based number.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Seat ID for a 0-based storage index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use citadels_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], PlayerId::new(1));
    /// assert_eq!(seats[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use citadels_engine::core::{PlayerId, PlayerMap};
///
/// let mut gold: PlayerMap<u32> = PlayerMap::with_value(4, 2);
/// gold[PlayerId::new(3)] += 5;
/// assert_eq!(gold[PlayerId::new(3)], 7);
/// assert_eq!(gold[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count < 255, "At most 254 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Build a map from values already in seating order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether a seat exists in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.0 >= 1 && player.index() < self.data.len()
    }

    /// Get a seat's data, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        if self.contains(player) {
            self.data.get(player.index())
        } else {
            None
        }
    }

    /// Get a seat's data mutably, or `None` for an unknown seat.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        if self.contains(player) {
            self.data.get_mut(player.index())
        } else {
            None
        }
    }

    /// Borrow two different seats mutably at once.
    ///
    /// Returns `None` if either seat is unknown or both are the same seat.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut T, &mut T)> {
        if a == b || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (ia, ib) = (a.index(), b.index());
        if ia < ib {
            let (left, right) = self.data.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.data.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    /// Iterate over `(PlayerId, &T)` pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }

    /// Iterate over `(PlayerId, &mut T)` pairs in seating order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId::from_index(i), v))
    }

    /// Iterate over values in seating order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all seat IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }

    /// Seats in table order starting from `first`, wrapping around.
    pub fn clockwise_from(&self, first: PlayerId) -> impl Iterator<Item = PlayerId> {
        let n = self.data.len();
        let start = first.index() % n;
        (0..n).map(move |offset| PlayerId::from_index((start + offset) % n))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Which kind of decision source answers for a seat.
///
/// Chosen once when the seat is created; persisted with the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Answers come from a person at a terminal.
    Interactive,
    /// Answers come from the built-in heuristics.
    Automated,
}

impl Controller {
    /// Check whether this seat is played by a person.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Controller::Interactive)
    }
}

/// Per-seat game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable seat ID.
    pub id: PlayerId,

    /// Decision source kind bound to this seat.
    pub controller: Controller,

    gold: u32,

    /// Districts in hand. Order matters: selection is by position.
    pub hand: Vec<District>,

    /// Built districts.
    pub city: City,

    /// Role held this round, `None` between rounds.
    pub role: Option<Role>,
}

impl Player {
    /// Create a seat with no gold, no cards and no role.
    #[must_use]
    pub fn new(id: PlayerId, controller: Controller) -> Self {
        Self {
            id,
            controller,
            gold: 0,
            hand: Vec::new(),
            city: City::new(),
            role: None,
        }
    }

    /// Current gold.
    #[must_use]
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Add gold.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Spend gold if the balance covers it.
    ///
    /// Leaves the balance untouched on failure.
    pub fn spend_gold(&mut self, amount: u32) -> Result<(), RuleViolation> {
        if amount > self.gold {
            return Err(RuleViolation::InsufficientGold {
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    /// Remove and return the whole balance.
    pub fn take_all_gold(&mut self) -> u32 {
        std::mem::take(&mut self.gold)
    }

    /// Check whether the city holds a district with this name (case-insensitive).
    #[must_use]
    pub fn has_built(&self, name: &str) -> bool {
        self.city.contains_named(name)
    }

    /// Add a district to the end of the hand.
    pub fn add_to_hand(&mut self, district: District) {
        self.hand.push(district);
    }

    /// Remove a hand card by position.
    pub fn remove_from_hand(&mut self, index: usize) -> Result<District, RuleViolation> {
        if index >= self.hand.len() {
            return Err(RuleViolation::NoSuchCard {
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Check whether the hand card at `index` could be built right now.
    pub fn check_build(&self, index: usize) -> Result<&District, RuleViolation> {
        let district = self.hand.get(index).ok_or(RuleViolation::NoSuchCard {
            index,
            len: self.hand.len(),
        })?;
        if district.cost > self.gold {
            return Err(RuleViolation::InsufficientGold {
                needed: district.cost,
                available: self.gold,
            });
        }
        if self.has_built(&district.name) {
            return Err(RuleViolation::DuplicateDistrict(district.name.clone()));
        }
        Ok(district)
    }

    /// Build the hand card at `index`: pay its cost and move it into the city.
    ///
    /// All checks happen before anything changes.
    pub fn build(&mut self, index: usize) -> Result<&District, RuleViolation> {
        let cost = self.check_build(index)?.cost;
        self.gold -= cost;
        let district = self.hand.remove(index);
        self.city.add(district)
    }

    /// One-line status for the table.
    #[must_use]
    pub fn summary(&self) -> String {
        let city: Vec<_> = self.city.iter().map(District::display_short).collect();
        format!(
            "{}{}: cards={} gold={} city={}",
            self.id,
            if self.controller.is_interactive() { " (you)" } else { "" },
            self.hand.len(),
            self.gold,
            city.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn district(name: &str, cost: u32) -> District {
        District::new(name, Color::Green, cost, "")
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p4 = PlayerId::new(4);

        assert_eq!(p1.index(), 0);
        assert_eq!(p4.index(), 3);
        assert_eq!(PlayerId::from_index(2), PlayerId::new(3));
        assert_eq!(format!("{}", p4), "Player 4");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u8> = PlayerMap::new(4, |p| p.number() * 10);

        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(4)], 40);
        assert_eq!(map.get(PlayerId::new(5)), None);
        assert_eq!(map.get(PlayerId::new(0)), None);
    }

    #[test]
    fn test_clockwise_from_wraps() {
        let map: PlayerMap<()> = PlayerMap::with_value(5, ());
        let order: Vec<_> = map.clockwise_from(PlayerId::new(4)).map(|p| p.number()).collect();
        assert_eq!(order, vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_pair_mut() {
        let mut map: PlayerMap<u32> = PlayerMap::with_value(3, 0);
        {
            let (a, b) = map.pair_mut(PlayerId::new(3), PlayerId::new(1)).unwrap();
            *a = 7;
            *b = 9;
        }
        assert_eq!(map[PlayerId::new(3)], 7);
        assert_eq!(map[PlayerId::new(1)], 9);
        assert!(map.pair_mut(PlayerId::new(2), PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_spend_gold_is_checked() {
        let mut player = Player::new(PlayerId::new(1), Controller::Automated);
        player.add_gold(3);

        assert!(player.spend_gold(5).is_err());
        assert_eq!(player.gold(), 3);

        player.spend_gold(2).unwrap();
        assert_eq!(player.gold(), 1);
    }

    #[test]
    fn test_build_moves_card_and_pays() {
        let mut player = Player::new(PlayerId::new(1), Controller::Automated);
        player.add_gold(4);
        player.add_to_hand(district("Tavern", 1));
        player.add_to_hand(district("Market", 2));

        player.build(1).unwrap();

        assert_eq!(player.gold(), 2);
        assert_eq!(player.hand.len(), 1);
        assert!(player.has_built("market"));
    }

    #[test]
    fn test_build_rejects_duplicate_name() {
        let mut player = Player::new(PlayerId::new(1), Controller::Automated);
        player.add_gold(10);
        player.add_to_hand(district("Tavern", 1));
        player.add_to_hand(district("Tavern", 1));
        player.build(0).unwrap();

        let err = player.build(0).unwrap_err();
        assert_eq!(err, RuleViolation::DuplicateDistrict("Tavern".to_string()));
        assert_eq!(player.gold(), 9);
        assert_eq!(player.hand.len(), 1);
    }

    #[test]
    fn test_build_rejects_unaffordable() {
        let mut player = Player::new(PlayerId::new(2), Controller::Interactive);
        player.add_to_hand(district("Castle", 4));

        assert!(matches!(
            player.build(0),
            Err(RuleViolation::InsufficientGold { needed: 4, available: 0 })
        ));
        assert_eq!(player.hand.len(), 1);
        assert!(player.city.is_empty());
    }

    #[test]
    fn test_summary_marks_interactive_seat() {
        let mut player = Player::new(PlayerId::new(1), Controller::Interactive);
        player.add_gold(2);
        assert_eq!(player.summary(), "Player 1 (you): cards=0 gold=2 city=");
    }
}
