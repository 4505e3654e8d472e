//! The character draft.
//!
//! 1. One role is removed face down (the hidden role).
//! 2. `face_up_count` more are removed face up. The King may never be shown:
//!    if it comes up, it and every face-up role drawn so far go back to the
//!    pool, the pool is reshuffled and the face-up draw starts over.
//! 3. Seats pick in crown order from what is left.
//! 4. At a seven-player table the last seat chooses between the one role
//!    left in the pool and the hidden role. If it takes the hidden role, the
//!    other becomes hidden.
//!
//! A pick that is not on offer is reported and asked again.

use super::RoundContext;
use crate::core::{GameRng, PlayerId};
use crate::decision::RoleOffer;
use crate::events::{EventSink, GameEvent, Query};
use crate::roles::{Role, RolePool};

/// Roles removed face up for a table size.
#[must_use]
pub const fn face_up_count(player_count: usize) -> usize {
    match player_count {
        4 => 2,
        5 => 1,
        _ => 0,
    }
}

/// Result of one draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftOutcome {
    /// The face-down role after any seven-player swap.
    pub hidden: Role,

    /// Roles shown and discarded.
    pub face_up: Vec<Role>,

    /// Picks in the order they were made.
    pub picks: Vec<(PlayerId, Role)>,

    /// Roles nobody took and nobody discarded.
    pub unused: Vec<Role>,
}

/// Remove the hidden and face-up roles from a full pool.
///
/// Returns the hidden role and the face-up roles in draw order.
pub fn discard_roles(
    pool: &mut RolePool,
    player_count: usize,
    rng: &mut GameRng,
    events: &mut dyn EventSink,
) -> (Role, Vec<Role>) {
    let hidden = pool.remove_at(rng.gen_range_usize(0..pool.len()));
    let wanted = face_up_count(player_count);

    let mut face_up = Vec::with_capacity(wanted);
    while face_up.len() < wanted {
        let Some(role) = pool.remove_random(rng) else {
            break;
        };
        if role == Role::King {
            pool.put_back(role);
            for shown in face_up.drain(..) {
                pool.put_back(shown);
            }
            pool.shuffle(rng);
            events.emit(GameEvent::KingRedrawn);
            tracing::debug!("king drawn face up, restarting face-up discards");
            continue;
        }
        face_up.push(role);
    }

    events.emit(GameEvent::HiddenRoleRemoved);
    for role in &face_up {
        events.emit(GameEvent::RoleDiscardedFaceUp { role: *role });
    }
    (hidden, face_up)
}

/// Run a full draft: every seat ends up holding exactly one role.
pub fn run_draft(ctx: &mut RoundContext<'_>) -> DraftOutcome {
    let player_count = ctx.state.player_count();
    for (_, player) in ctx.state.players.iter_mut() {
        player.role = None;
    }

    let mut pool = RolePool::full();
    let (mut hidden, face_up) =
        discard_roles(&mut pool, player_count, &mut ctx.state.rng, &mut *ctx.events);

    let order: Vec<PlayerId> = ctx.state.players.clockwise_from(ctx.state.crown).collect();
    let mut picks = Vec::with_capacity(order.len());

    for (i, &seat) in order.iter().enumerate() {
        let last_of_seven = player_count == 7 && i + 1 == player_count;

        let mut available = pool.roles().to_vec();
        if last_of_seven {
            available.push(hidden);
        }
        let offer = RoleOffer {
            available,
            face_up: face_up.clone(),
            last_of_seven,
        };

        let role = loop {
            let choice = ctx.ask(seat, |d, view| d.choose_role(view, &offer));
            if offer.contains(choice) {
                break choice;
            }
            ctx.invalid(seat, Query::Role);
        };

        if last_of_seven && role == hidden {
            if let Some(&left) = pool.roles().first() {
                pool.take(left);
                hidden = left;
            }
        } else {
            pool.take(role);
        }

        ctx.state.players[seat].role = Some(role);
        tracing::debug!(player = %seat, %role, "role chosen");
        ctx.emit(GameEvent::RoleChosen { player: seat });
        picks.push((seat, role));
    }

    DraftOutcome {
        hidden,
        face_up,
        picks,
        unused: pool.roles().to_vec(),
    }
}
