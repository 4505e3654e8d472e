//! Built-in heuristics for computer-controlled seats.
//!
//! Simple and greedy: random roles and targets, cheap builds first, and
//! abilities used whenever they look profitable. Every answer is legal, so
//! the engine never has to re-ask an automated seat.

use std::cmp::Reverse;

use super::{
    BuildChoice, DecisionSource, IncomeChoice, MagicianAction, PlayerView, RoleOffer,
    WarlordTarget,
};
use crate::cards::{Color, District};
use crate::core::{GameRng, GameRngState, PlayerId};
use crate::roles::Role;

/// Heuristic decision source with its own random stream.
#[derive(Clone, Debug)]
pub struct AutomatedDecider {
    seat: PlayerId,
    rng: GameRng,
}

impl AutomatedDecider {
    /// Create a decider whose stream is derived from the game seed and seat.
    #[must_use]
    pub fn new(seat: PlayerId, seed: u64) -> Self {
        let rng = GameRng::new(seed).for_context(&format!("seat-{}", seat.number()));
        Self { seat, rng }
    }

    /// Create a decider with an explicit generator.
    #[must_use]
    pub fn with_rng(seat: PlayerId, rng: GameRng) -> Self {
        Self { seat, rng }
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }
}

/// Position of the first card with the lowest cost.
fn cheapest(cards: &[District]) -> Option<usize> {
    cards
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| c.cost)
        .map(|(i, _)| i)
}

/// Positions of cards whose name already appeared earlier in the hand.
fn duplicate_positions(hand: &[District]) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(i, card)| hand[..*i].iter().any(|earlier| earlier.same_name(card)))
        .map(|(i, _)| i)
        .collect()
}

impl DecisionSource for AutomatedDecider {
    fn choose_role(&mut self, _view: &PlayerView<'_>, offer: &RoleOffer) -> Role {
        self.rng
            .choose(&offer.available)
            .copied()
            .unwrap_or(Role::Assassin)
    }

    fn choose_assassin_target(&mut self, _view: &PlayerView<'_>) -> Option<Role> {
        let options: Vec<Role> = Role::assassin_targets().collect();
        self.rng.choose(&options).copied()
    }

    fn choose_theft_target(
        &mut self,
        _view: &PlayerView<'_>,
        excluded: Option<Role>,
    ) -> Option<Role> {
        let options: Vec<Role> = Role::theft_targets(excluded).collect();
        self.rng.choose(&options).copied()
    }

    fn choose_income(&mut self, view: &PlayerView<'_>) -> IncomeChoice {
        let me = view.me();
        if me.hand.is_empty()
            || me.gold() < 2
            || view.draw_pile_len() < view.config().cards_drawn
        {
            IncomeChoice::Gold
        } else {
            IncomeChoice::Cards
        }
    }

    fn choose_card_to_keep(&mut self, _view: &PlayerView<'_>, drawn: &[District]) -> usize {
        drawn
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| Reverse(c.cost))
            .map_or(0, |(i, _)| i)
    }

    fn choose_magician_action(&mut self, view: &PlayerView<'_>) -> MagicianAction {
        let mine = view.me().hand.len();
        let richest = view
            .others()
            .filter_map(|p| view.hand_size(p).map(|n| (p, n)))
            .filter(|&(_, n)| n > mine)
            .min_by_key(|&(p, n)| (Reverse(n), p));

        if let Some((target, _)) = richest {
            return MagicianAction::Exchange(target);
        }

        let duplicates = duplicate_positions(&view.me().hand);
        if duplicates.is_empty() {
            MagicianAction::Decline
        } else {
            MagicianAction::Discard(duplicates)
        }
    }

    fn use_laboratory(&mut self, view: &PlayerView<'_>) -> Option<usize> {
        let hand = &view.me().hand;
        if hand.len() >= 3 {
            cheapest(hand)
        } else {
            None
        }
    }

    fn use_smithy(&mut self, view: &PlayerView<'_>) -> bool {
        let me = view.me();
        me.gold() >= view.config().smithy_cost && me.hand.len() <= 3
    }

    fn choose_school_of_magic_color(&mut self, view: &PlayerView<'_>, slot_color: Color) -> Color {
        let city = &view.me().city;
        let mut best = slot_color;
        let mut best_count = city.count_color(slot_color);
        for color in Color::INCOME {
            let count = city.count_color(color);
            if count > best_count {
                best = color;
                best_count = count;
            }
        }
        best
    }

    fn choose_warlord_target(&mut self, view: &PlayerView<'_>) -> Option<WarlordTarget> {
        let gold = view.me().gold();

        let mut candidates: Vec<(PlayerId, usize, u32)> = view
            .others()
            .filter_map(|p| {
                let city = view.city(p)?;
                (0..city.len())
                    .filter_map(|i| view.destroy_cost(p, i).ok().map(|cost| (i, cost)))
                    .min_by_key(|&(_, cost)| cost)
                    .map(|(i, cost)| (p, i, cost))
            })
            .collect();

        candidates.sort_by_key(|&(p, _, _)| (Reverse(view.city(p).map_or(0, |c| c.len())), p));

        let &(player, district, cost) = candidates.first()?;
        (cost * 2 <= gold).then_some(WarlordTarget { player, district })
    }

    fn choose_graveyard_recovery(&mut self, view: &PlayerView<'_>, _destroyed: &District) -> bool {
        view.me().gold() >= 1
    }

    fn choose_build(&mut self, view: &PlayerView<'_>, _remaining: usize) -> BuildChoice {
        let me = view.me();
        me.hand
            .iter()
            .enumerate()
            .filter(|(i, _)| me.check_build(*i).is_ok())
            .min_by_key(|(_, c)| c.cost)
            .map_or(BuildChoice::EndTurn, |(i, _)| BuildChoice::Build(i))
    }

    fn rng_state(&self) -> Option<GameRngState> {
        Some(self.rng.state())
    }
}
