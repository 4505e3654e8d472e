//! The build phase.

use super::RoundContext;
use crate::core::PlayerId;
use crate::decision::BuildChoice;
use crate::events::GameEvent;

/// Let `player` build up to `limit` districts from hand.
///
/// The phase ends when the seat ends its turn, the limit is reached or the
/// hand is empty. A refused build changes nothing and the seat is asked
/// again. Returns the number of districts built.
pub fn build_phase(ctx: &mut RoundContext<'_>, player: PlayerId, limit: usize) -> usize {
    let mut built = 0;

    while built < limit && !ctx.state.players[player].hand.is_empty() {
        let remaining = limit - built;
        let index = match ctx.ask(player, |d, view| d.choose_build(view, remaining)) {
            BuildChoice::EndTurn => break,
            BuildChoice::Build(index) => index,
        };

        let (name, cost) = match ctx.state.players[player].build(index) {
            Ok(district) => (district.name.clone(), district.cost),
            Err(reason) => {
                ctx.reject(player, reason);
                continue;
            }
        };
        built += 1;
        ctx.emit(GameEvent::DistrictBuilt { player, district: name, cost });

        if ctx.state.players[player].city.len() == ctx.state.config.completion_threshold {
            let first = ctx.state.record_completion(player);
            ctx.emit(GameEvent::CityCompleted { player, first });
        }
    }

    tracing::debug!(%player, built, limit, "build phase over");
    built
}
