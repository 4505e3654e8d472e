//! The finite role pool a draft removes from.
//!
//! Roles leave the pool by random removal (discards) or by a player's pick,
//! and may be put back and reshuffled. Order is the draw order: random
//! removal picks a uniformly random position.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Role;
use crate::core::rng::GameRng;

/// Roles still available this round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePool {
    roles: SmallVec<[Role; 8]>,
}

impl RolePool {
    /// All eight roles, in number order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            roles: Role::ALL.into_iter().collect(),
        }
    }

    /// A pool holding exactly these roles.
    #[must_use]
    pub fn from_roles(roles: &[Role]) -> Self {
        Self {
            roles: roles.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Roles in pool order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Remove a uniformly random role.
    pub fn remove_random(&mut self, rng: &mut GameRng) -> Option<Role> {
        if self.roles.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.roles.len());
        Some(self.roles.remove(index))
    }

    /// Remove the role at a pool position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Role {
        self.roles.remove(index)
    }

    /// Remove a specific role. Returns `false` if it was not in the pool.
    pub fn take(&mut self, role: Role) -> bool {
        match self.roles.iter().position(|r| *r == role) {
            Some(index) => {
                self.roles.remove(index);
                true
            }
            None => false,
        }
    }

    /// Put a role back at the end. A role already present is ignored.
    pub fn put_back(&mut self, role: Role) {
        if !self.contains(role) {
            self.roles.push(role);
        }
    }

    /// Reorder the pool randomly.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.roles);
    }
}

impl Default for RolePool {
    fn default() -> Self {
        Self::full()
    }
}
