//! Guard pursuit and retrieval.
//!
//! Every frame the guard walks at constant speed toward the nearest
//! eliminated player still on the field. Once within `pickup_distance` the
//! player is carried off to the side of the field they were already on and
//! leaves the queue for good. At most one player is picked up per frame.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::guard::Guard;
use crate::components::player::Player;
use crate::components::worldposition::WorldPosition;
use crate::events::round::PlayerRetrievedEvent;
use crate::resources::deadqueue::DeadPlayerQueue;
use crate::resources::roundconfig::RoundConfig;
use crate::resources::worldtime::WorldTime;

/// First queued player with the smallest distance to `from`.
pub fn nearest_target<'a>(
    from: &WorldPosition,
    candidates: impl Iterator<Item = (Entity, &'a WorldPosition)>,
) -> Option<(Entity, f32)> {
    let mut best: Option<(Entity, f32)> = None;
    for (entity, position) in candidates {
        let distance = from.distance_to(position);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((entity, distance));
        }
    }
    best
}

pub fn guard_pursuit_system(
    time: Res<WorldTime>,
    config: Res<RoundConfig>,
    mut dead: ResMut<DeadPlayerQueue>,
    mut guards: Query<&mut WorldPosition, (With<Guard>, Without<Player>)>,
    mut players: Query<(&mut Player, &mut WorldPosition), Without<Guard>>,
    mut commands: Commands,
) {
    if dead.is_empty() {
        return;
    }
    let Ok(mut guard_pos) = guards.single_mut() else {
        return;
    };

    let target = {
        let candidates = dead
            .iter()
            .filter_map(|entity| players.get(entity).ok().map(|(_, pos)| (entity, pos)));
        nearest_target(&guard_pos, candidates)
    };
    let Some((entity, distance)) = target else {
        return;
    };
    let Ok((mut player, mut position)) = players.get_mut(entity) else {
        return;
    };

    // Already within reach: pick up without stepping.
    if distance >= config.pickup_distance && distance > 0.0 {
        let direction = (position.pos - guard_pos.pos).normalized();
        guard_pos.pos = guard_pos.pos + direction.scale_by(config.chase_speed * time.delta);
    }

    if guard_pos.distance_to(&position) < config.pickup_distance {
        position.pos.x = if position.pos.x < 0.0 {
            -config.offfield_x
        } else {
            config.offfield_x
        };
        player.picked_up = true;
        dead.remove(entity);
        info!(
            "{} has been picked up by the guard and moved aside.",
            player.name
        );
        commands.trigger(PlayerRetrievedEvent { entity });
    }
}
