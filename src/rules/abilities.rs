//! Role abilities.
//!
//! Assassin and Thief record their targets in the round state; the robbery
//! itself is settled when the robbed role is called. The Warlord checks its
//! target with `destroy_cost` before anything is paid.

use super::{buildings, RoundContext};
use crate::cards::names;
use crate::core::{GameState, PlayerId, RuleViolation};
use crate::decision::{MagicianAction, WarlordTarget};
use crate::events::{GameEvent, Query};
use crate::roles::Role;

/// Hand the current seat's gold to the Thief if `role` is being robbed.
///
/// Returns the amount taken.
pub fn settle_theft(ctx: &mut RoundContext<'_>, player: PlayerId, role: Role) -> u32 {
    let round = ctx.state.round;
    let thief = match (round.robbed, round.thief) {
        (Some(robbed), Some(thief)) if robbed == role && thief != player => thief,
        _ => return 0,
    };

    let Some((victim, robber)) = ctx.state.players.pair_mut(player, thief) else {
        return 0;
    };
    let amount = victim.take_all_gold();
    robber.add_gold(amount);

    tracing::debug!(%thief, victim = %player, amount, "robbery settled");
    ctx.emit(GameEvent::Robbed { thief, victim: player, amount });
    amount
}

/// Ask the Assassin for a role to kill.
pub fn assassinate(ctx: &mut RoundContext<'_>, player: PlayerId) {
    match ctx.ask(player, |d, view| d.choose_assassin_target(view)) {
        Some(role) if role != Role::Assassin => {
            ctx.state.round.eliminated = Some(role);
            ctx.emit(GameEvent::Eliminated { role });
        }
        _ => tracing::debug!(%player, "assassin names no target"),
    }
}

/// Ask the Thief for a role to rob later this round.
pub fn plan_robbery(ctx: &mut RoundContext<'_>, player: PlayerId) {
    let excluded = ctx.state.round.eliminated;
    match ctx.ask(player, |d, view| d.choose_theft_target(view, excluded)) {
        Some(role) if role.number() >= 3 && Some(role) != excluded => {
            ctx.state.round.robbed = Some(role);
            ctx.state.round.thief = Some(player);
            ctx.emit(GameEvent::RobberyPlanned { thief: player, role });
        }
        _ => tracing::debug!(%player, "thief names no target"),
    }
}

/// Offer the Magician its optional action until a valid one is taken.
pub fn magician(ctx: &mut RoundContext<'_>, player: PlayerId) {
    loop {
        let result = match ctx.ask(player, |d, view| d.choose_magician_action(view)) {
            MagicianAction::Decline => return,
            MagicianAction::Exchange(target) => exchange_hands(ctx, player, target),
            MagicianAction::Discard(indices) if indices.is_empty() => return,
            MagicianAction::Discard(indices) => discard_and_redraw(ctx, player, &indices),
        };
        match result {
            Ok(()) => return,
            Err(RuleViolation::NoSuchCard { .. }) | Err(RuleViolation::DuplicateIndex) => {
                ctx.invalid(player, Query::MagicianAction)
            }
            Err(reason) => ctx.reject(player, reason),
        }
    }
}

/// Swap the whole hands of two seats.
pub fn exchange_hands(
    ctx: &mut RoundContext<'_>,
    player: PlayerId,
    target: PlayerId,
) -> Result<(), RuleViolation> {
    if player == target {
        return Err(RuleViolation::SelfTarget);
    }
    let (own, other) = ctx
        .state
        .players
        .pair_mut(player, target)
        .ok_or(RuleViolation::NoSuchPlayer(target))?;
    std::mem::swap(&mut own.hand, &mut other.hand);

    ctx.emit(GameEvent::HandsExchanged { player, with: target });
    Ok(())
}

/// Discard the cards at `indices` and draw as many.
///
/// Replacements are drawn before the discards go to the bottom of the pile.
pub fn discard_and_redraw(
    ctx: &mut RoundContext<'_>,
    player: PlayerId,
    indices: &[usize],
) -> Result<(), RuleViolation> {
    let hand_len = ctx.state.players[player].hand.len();
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    if let Some(&bad) = sorted.iter().find(|&&i| i >= hand_len) {
        return Err(RuleViolation::NoSuchCard { index: bad, len: hand_len });
    }
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(RuleViolation::DuplicateIndex);
    }

    let seat = &mut ctx.state.players[player];
    let mut discarded = Vec::with_capacity(sorted.len());
    for &index in sorted.iter().rev() {
        discarded.push(seat.remove_from_hand(index)?);
    }
    discarded.reverse();

    let replacements = ctx.state.draw_pile.draw_many(discarded.len());
    for district in replacements {
        ctx.state.players[player].add_to_hand(district);
    }
    let count = discarded.len();
    ctx.state.draw_pile.return_all_to_bottom(discarded);

    ctx.emit(GameEvent::CardsReplaced { player, count });
    Ok(())
}

/// The Architect's extra cards.
pub fn architect_draw(ctx: &mut RoundContext<'_>, player: PlayerId) {
    let drawn = ctx.state.draw_pile.draw_many(ctx.state.config.architect_extra_cards);
    let count = drawn.len();
    for district in drawn {
        ctx.state.players[player].add_to_hand(district);
    }
    ctx.emit(GameEvent::ArchitectDrew { player, count });
}

/// The King takes the crown for the next draft.
pub fn take_crown(ctx: &mut RoundContext<'_>, player: PlayerId) {
    ctx.state.crown = player;
    ctx.emit(GameEvent::CrownPassed { player });
}

/// The Merchant's flat bonus.
pub fn merchant_bonus(ctx: &mut RoundContext<'_>, player: PlayerId) {
    ctx.state.players[player].add_gold(1);
    ctx.emit(GameEvent::MerchantBonus { player, amount: 1 });
}

/// Gold `warlord` must pay to destroy `target`'s district at `district`.
///
/// Fails if the target may not be attacked or the Warlord cannot pay.
pub fn destroy_cost(
    state: &GameState,
    warlord: PlayerId,
    target: PlayerId,
    district: usize,
) -> Result<u32, RuleViolation> {
    if warlord == target {
        return Err(RuleViolation::SelfTarget);
    }
    let victim = state.player(target).ok_or(RuleViolation::NoSuchPlayer(target))?;
    let attacker = state.player(warlord).ok_or(RuleViolation::NoSuchPlayer(warlord))?;

    if victim.city.is_empty() {
        return Err(RuleViolation::EmptyCity);
    }
    if victim.city.len() >= state.config.completion_threshold {
        return Err(RuleViolation::CompletedCity);
    }
    if victim.role == Some(Role::Bishop) && !state.round.is_eliminated(Role::Bishop) {
        return Err(RuleViolation::ProtectedCity);
    }

    let card = victim.city.get(district).ok_or(RuleViolation::NoSuchDistrict {
        index: district,
        len: victim.city.len(),
    })?;
    let cost = if victim.has_built(names::GREAT_WALL) {
        card.cost
    } else {
        card.cost.saturating_sub(1)
    };

    if cost > attacker.gold() {
        return Err(RuleViolation::InsufficientGold {
            needed: cost,
            available: attacker.gold(),
        });
    }
    Ok(cost)
}

/// Offer the Warlord a destruction until it declines or one succeeds.
pub fn warlord(ctx: &mut RoundContext<'_>, player: PlayerId) {
    while let Some(target) = ctx.ask(player, |d, view| d.choose_warlord_target(view)) {
        match destroy_district(ctx, player, target) {
            Ok(()) => return,
            Err(reason) => ctx.reject(player, reason),
        }
    }
}

/// Pay for and remove one district, then offer the owner the Graveyard.
pub fn destroy_district(
    ctx: &mut RoundContext<'_>,
    warlord: PlayerId,
    target: WarlordTarget,
) -> Result<(), RuleViolation> {
    let paid = destroy_cost(ctx.state, warlord, target.player, target.district)?;
    let owner = target.player;
    let district = ctx.state.players[owner].city.remove(target.district)?;
    ctx.state.players[warlord].spend_gold(paid)?;

    ctx.emit(GameEvent::DistrictDestroyed {
        warlord,
        owner,
        district: district.name.clone(),
        paid,
    });
    buildings::graveyard(ctx, owner, district);
    Ok(())
}
