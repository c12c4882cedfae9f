use bevy_ecs::prelude::*;
use log::info;

use crate::components::player::{Outcome, Player};
use crate::components::worldposition::WorldPosition;
use crate::events::round::{PlayerWonEvent, RoundEndedEvent};
use crate::resources::roundconfig::RoundConfig;
use crate::resources::roundstatus::RoundEndReason;

/// Mark alive players past the finish line as winners, then end the round
/// once nobody is left alive.
///
/// Winners are never handed to the guard. Several players crossing in the
/// same frame all win.
pub fn finish_line_system(
    config: Res<RoundConfig>,
    mut players: Query<(Entity, &mut Player, &WorldPosition)>,
    mut commands: Commands,
) {
    let mut any_alive = false;
    for (entity, mut player, position) in players.iter_mut() {
        if !player.is_alive() {
            continue;
        }
        if position.pos.y >= config.finish_line {
            info!("{} has reached the doll and wins!", player.name);
            player.outcome = Outcome::Won;
            commands.trigger(PlayerWonEvent { entity });
        } else {
            any_alive = true;
        }
    }

    if !any_alive {
        commands.trigger(RoundEndedEvent {
            reason: RoundEndReason::AllResolved,
        });
    }
}
