//! Player movement and red-light elimination.
//!
//! Drains the [`MoveCommand`] queue once per frame. A command for a player
//! who is no longer alive is dropped. Otherwise the player steps by
//! `player_speed` in their own frame, which is scaled with the player's
//! model; if the light is red at that moment the player is eliminated on the
//! spot.

use bevy_ecs::prelude::*;
use log::{info, trace, warn};

use crate::components::model::ModelRef;
use crate::components::orientation::Orientation;
use crate::components::player::{Outcome, Player};
use crate::components::worldposition::WorldPosition;
use crate::events::input::MoveCommand;
use crate::events::round::PlayerEliminatedEvent;
use crate::resources::deadqueue::DeadPlayerQueue;
use crate::resources::lightstate::LightState;
use crate::resources::roundconfig::RoundConfig;

/// Pitch applied to an eliminated player so the model tips over.
pub const FALLEN_PITCH: f32 = -90.0;

pub fn player_movement_system(
    mut reader: MessageReader<MoveCommand>,
    config: Res<RoundConfig>,
    light: Res<LightState>,
    mut dead: ResMut<DeadPlayerQueue>,
    mut players: Query<(
        Entity,
        &mut Player,
        &mut WorldPosition,
        &mut Orientation,
        Option<&ModelRef>,
    )>,
    mut commands: Commands,
) {
    for cmd in reader.read() {
        if !cmd.is_motion() {
            continue;
        }
        let Some((entity, mut player, mut position, mut orientation, model)) = players
            .iter_mut()
            .find(|(_, player, _, _, _)| player.id == cmd.player)
        else {
            warn!("Move command for unknown player {}", cmd.player);
            continue;
        };
        if !player.is_alive() {
            trace!("Ignoring move for {} ({:?})", player.name, player.outcome);
            continue;
        }

        let mut fb = cmd.fb as f32;
        if player.inverted_facing {
            fb = -fb;
        }
        // Steps are taken in the scaled model frame
        let step = config.player_speed * model.map_or(1.0, |m| m.scale);
        let (dx, dy) = orientation.local_to_world(cmd.lr as f32 * step, fb * step);
        position.pos.x += dx;
        position.pos.y += dy;

        if light.is_red() {
            info!("{} moved during red light! Eliminated!", player.name);
            player.outcome = Outcome::Eliminated;
            orientation.pitch = FALLEN_PITCH;
            dead.push(entity);
            commands.trigger(PlayerEliminatedEvent { entity });
        }
    }
}
