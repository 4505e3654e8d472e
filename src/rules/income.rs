//! Base income and color income.

use super::RoundContext;
use crate::cards::{names, Color};
use crate::core::PlayerId;
use crate::decision::IncomeChoice;
use crate::events::{GameEvent, Query};

/// Take gold or draw cards, as the seat chooses.
pub fn collect_base_income(ctx: &mut RoundContext<'_>, player: PlayerId) {
    match ctx.ask(player, |d, view| d.choose_income(view)) {
        IncomeChoice::Gold => {
            let amount = ctx.state.config.gold_income;
            ctx.state.players[player].add_gold(amount);
            ctx.emit(GameEvent::GoldTaken { player, amount });
        }
        IncomeChoice::Cards => draw_income_cards(ctx, player),
    }
}

/// Draw two cards (three with an Observatory) and keep one (all with a Library).
///
/// Unkept cards go to the bottom of the draw pile in the order drawn.
pub fn draw_income_cards(ctx: &mut RoundContext<'_>, player: PlayerId) {
    let config = &ctx.state.config;
    let count = if ctx.state.players[player].has_built(names::OBSERVATORY) {
        config.observatory_cards_drawn
    } else {
        config.cards_drawn
    };

    let mut drawn = ctx.state.draw_pile.draw_many(count);
    ctx.emit(GameEvent::CardsDrawn { player, count: drawn.len() });

    if drawn.is_empty() {
        return;
    }

    let keep_all = drawn.len() == 1 || ctx.state.players[player].has_built(names::LIBRARY);
    if keep_all {
        for district in drawn {
            ctx.emit(GameEvent::CardKept { player, district: district.name.clone() });
            ctx.state.players[player].add_to_hand(district);
        }
        return;
    }

    let index = loop {
        let choice = ctx.ask(player, |d, view| d.choose_card_to_keep(view, &drawn));
        if choice < drawn.len() {
            break choice;
        }
        ctx.invalid(player, Query::CardToKeep);
    };

    let kept = drawn.remove(index);
    ctx.emit(GameEvent::CardKept { player, district: kept.name.clone() });
    ctx.state.players[player].add_to_hand(kept);
    ctx.state.draw_pile.return_all_to_bottom(drawn);
}

/// Pay 1 gold per district of `color`; a School of Magic may count as that color.
///
/// Returns the gold paid.
pub fn collect_color_income(ctx: &mut RoundContext<'_>, player: PlayerId, color: Color) -> u32 {
    let seat = &ctx.state.players[player];
    let mut amount = seat.city.count_color(color) as u32;

    if seat.has_built(names::SCHOOL_OF_MAGIC) {
        let nominated = loop {
            let choice = ctx.ask(player, |d, view| d.choose_school_of_magic_color(view, color));
            if Color::INCOME.contains(&choice) {
                break choice;
            }
            ctx.invalid(player, Query::SchoolOfMagic);
        };
        if nominated == color {
            amount += 1;
        }
    }

    if amount > 0 {
        ctx.state.players[player].add_gold(amount);
        ctx.emit(GameEvent::ColorIncome { player, color, amount });
    }
    amount
}
