//! Turn resolution: roles are called 1 to 8.
//!
//! A called role takes a turn if a seat holds it and the Assassin did not
//! kill it. A skipped slot has no effect at all. Within a turn the steps run
//! in a fixed order:
//!
//! 1. Theft settlement, if this role is being robbed
//! 2. Assassin or Thief target
//! 3. Base income (gold or cards)
//! 4. Magician action
//! 5. Laboratory, then Smithy
//! 6. Architect draw and raised build limit
//! 7. Color income; the King takes the crown, the Merchant gains 1
//! 8. Warlord destruction
//! 9. Build phase
//!
//! The round always runs to slot 8, even after a city completes.

use super::{abilities, build, buildings, income, RoundContext};
use crate::core::PlayerId;
use crate::events::GameEvent;
use crate::roles::Role;

/// A turn that was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub role: Role,
    pub player: PlayerId,
}

/// Call every role in order and resolve the turns.
pub fn resolve_turns(ctx: &mut RoundContext<'_>) -> Vec<TurnRecord> {
    let mut turns = Vec::new();

    for role in Role::ALL {
        let holder = ctx.state.holder_of(role);
        let eliminated = ctx.state.round.is_eliminated(role);

        ctx.emit(GameEvent::RoleCalled {
            role,
            holder,
            eliminated: eliminated && holder.is_some(),
        });

        match holder {
            Some(player) if !eliminated => {
                take_turn(ctx, player, role);
                turns.push(TurnRecord { role, player });
            }
            Some(player) => {
                tracing::debug!(%player, %role, "killed, turn skipped");
            }
            None => {}
        }
    }

    turns
}

/// Resolve one seat's turn as `role`.
pub fn take_turn(ctx: &mut RoundContext<'_>, player: PlayerId, role: Role) {
    tracing::debug!(%player, %role, "turn starts");

    abilities::settle_theft(ctx, player, role);

    match role {
        Role::Assassin => abilities::assassinate(ctx, player),
        Role::Thief => abilities::plan_robbery(ctx, player),
        _ => {}
    }

    income::collect_base_income(ctx, player);

    if role == Role::Magician {
        abilities::magician(ctx, player);
    }

    buildings::laboratory(ctx, player);
    buildings::smithy(ctx, player);

    let build_limit = if role == Role::Architect {
        abilities::architect_draw(ctx, player);
        ctx.state.config.architect_build_limit
    } else {
        ctx.state.config.build_limit
    };

    if let Some(color) = role.income_color() {
        income::collect_color_income(ctx, player, color);
    }
    match role {
        Role::King => abilities::take_crown(ctx, player),
        Role::Merchant => abilities::merchant_bonus(ctx, player),
        _ => {}
    }

    if role == Role::Warlord {
        abilities::warlord(ctx, player);
    }

    build::build_phase(ctx, player, build_limit);
}
