//! Built districts of one player.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::district::{Color, District};
use crate::core::error::RuleViolation;

/// A player's city: districts in build order, names unique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City {
    districts: Vec<District>,
}

impl City {
    /// Create an empty city.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of built districts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    /// Check whether nothing is built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Iterate in build order.
    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.districts.iter()
    }

    /// District at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&District> {
        self.districts.get(index)
    }

    /// Check for a district with this name, ignoring case.
    #[must_use]
    pub fn contains_named(&self, name: &str) -> bool {
        self.districts.iter().any(|d| d.is_named(name))
    }

    /// Add a district. Rejects a second district with the same name.
    pub fn add(&mut self, district: District) -> Result<&District, RuleViolation> {
        if self.contains_named(&district.name) {
            return Err(RuleViolation::DuplicateDistrict(district.name));
        }
        self.districts.push(district);
        Ok(&self.districts[self.districts.len() - 1])
    }

    /// Remove the district at a position.
    pub fn remove(&mut self, index: usize) -> Result<District, RuleViolation> {
        if index >= self.districts.len() {
            return Err(RuleViolation::NoSuchDistrict {
                index,
                len: self.districts.len(),
            });
        }
        Ok(self.districts.remove(index))
    }

    /// Number of districts of a color.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.districts.iter().filter(|d| d.color == color).count()
    }

    /// District count per color present.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for district in &self.districts {
            *counts.entry(district.color).or_insert(0) += 1;
        }
        counts
    }

    /// Check for at least one district of every color.
    #[must_use]
    pub fn has_all_colors(&self) -> bool {
        let counts = self.color_counts();
        Color::ALL.iter().all(|c| counts.contains_key(c))
    }

    /// Sum of printed costs.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.districts.iter().map(|d| d.cost).sum()
    }

    /// Sum of end-game bonuses.
    #[must_use]
    pub fn total_bonus(&self) -> u32 {
        self.districts.iter().map(District::point_bonus).sum()
    }

    /// Build a city from saved districts, enforcing unique names.
    pub fn from_districts(districts: Vec<District>) -> Result<Self, RuleViolation> {
        let mut city = Self::new();
        for district in districts {
            city.add(district)?;
        }
        Ok(city)
    }
}

impl<'a> IntoIterator for &'a City {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter {
        self.districts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(name: &str, color: Color, cost: u32) -> District {
        District::new(name, color, cost, "")
    }

    #[test]
    fn test_add_rejects_same_name() {
        let mut city = City::new();
        city.add(d("Temple", Color::Blue, 1)).unwrap();

        let err = city.add(d("temple", Color::Blue, 1)).unwrap_err();
        assert_eq!(err, RuleViolation::DuplicateDistrict("temple".to_string()));
        assert_eq!(city.len(), 1);
    }

    #[test]
    fn test_color_counts() {
        let mut city = City::new();
        city.add(d("Temple", Color::Blue, 1)).unwrap();
        city.add(d("Church", Color::Blue, 2)).unwrap();
        city.add(d("Tavern", Color::Green, 1)).unwrap();

        assert_eq!(city.count_color(Color::Blue), 2);
        assert_eq!(city.count_color(Color::Red), 0);
        assert!(!city.has_all_colors());
        assert_eq!(city.total_cost(), 4);
    }

    #[test]
    fn test_has_all_colors() {
        let city = City::from_districts(vec![
            d("Manor", Color::Yellow, 3),
            d("Temple", Color::Blue, 1),
            d("Tavern", Color::Green, 1),
            d("Prison", Color::Red, 2),
            d("Keep", Color::Purple, 3),
        ])
        .unwrap();
        assert!(city.has_all_colors());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut city = City::new();
        assert_eq!(
            city.remove(0),
            Err(RuleViolation::NoSuchDistrict { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_from_districts_rejects_duplicates() {
        let result = City::from_districts(vec![
            d("Temple", Color::Blue, 1),
            d("Temple", Color::Blue, 1),
        ]);
        assert!(result.is_err());
    }
}
