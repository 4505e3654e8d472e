//! Passive effects of purple districts, usable by any role.
//!
//! Laboratory and Smithy are each offered once per turn. The Graveyard is
//! offered to a city's owner when the Warlord destroys one of its districts.
//! Observatory, Library and School of Magic act inside income; Great Wall
//! inside the Warlord's cost.

use super::RoundContext;
use crate::cards::{names, District};
use crate::core::PlayerId;
use crate::events::{GameEvent, Query};

/// Laboratory: discard one hand card for 1 gold.
///
/// The discarded card goes to the bottom of the draw pile.
pub fn laboratory(ctx: &mut RoundContext<'_>, player: PlayerId) {
    let seat = &ctx.state.players[player];
    if !seat.has_built(names::LABORATORY) || seat.hand.is_empty() {
        return;
    }

    while let Some(index) = ctx.ask(player, |d, view| d.use_laboratory(view)) {
        match ctx.state.players[player].remove_from_hand(index) {
            Ok(card) => {
                ctx.state.players[player].add_gold(1);
                ctx.emit(GameEvent::LaboratoryUsed { player, discarded: card.name.clone() });
                ctx.state.draw_pile.return_to_bottom(card);
                return;
            }
            Err(_) => ctx.invalid(player, Query::Laboratory),
        }
    }
}

/// Smithy: pay 2 gold to draw 3 cards. Not offered without the gold.
pub fn smithy(ctx: &mut RoundContext<'_>, player: PlayerId) {
    let cost = ctx.state.config.smithy_cost;
    let seat = &ctx.state.players[player];
    if !seat.has_built(names::SMITHY) {
        return;
    }
    if seat.gold() < cost {
        tracing::debug!(%player, gold = seat.gold(), "smithy skipped, not enough gold");
        return;
    }
    if !ctx.ask(player, |d, view| d.use_smithy(view)) {
        return;
    }

    if let Err(reason) = ctx.state.players[player].spend_gold(cost) {
        ctx.reject(player, reason);
        return;
    }
    let drawn = ctx.state.draw_pile.draw_many(ctx.state.config.smithy_cards);
    let count = drawn.len();
    for district in drawn {
        ctx.state.players[player].add_to_hand(district);
    }
    ctx.emit(GameEvent::SmithyUsed { player, drawn: count });
}

/// Graveyard: the owner may pay 1 gold to take a destroyed district into hand.
///
/// A district not taken back goes to the bottom of the draw pile.
pub fn graveyard(ctx: &mut RoundContext<'_>, owner: PlayerId, destroyed: District) {
    let seat = &ctx.state.players[owner];
    let offered = seat.has_built(names::GRAVEYARD) && seat.gold() >= 1;

    if offered && ctx.ask(owner, |d, view| d.choose_graveyard_recovery(view, &destroyed)) {
        if ctx.state.players[owner].spend_gold(1).is_ok() {
            ctx.emit(GameEvent::DistrictRecovered { player: owner, district: destroyed.name.clone() });
            ctx.state.players[owner].add_to_hand(destroyed);
            return;
        }
    }
    ctx.state.draw_pile.return_to_bottom(destroyed);
}
