//! Round lifecycle: run condition, end-of-round and quit observers, and
//! per-frame upkeep of the movement queue.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::input::{MoveCommand, QuitRequested};
use crate::events::round::RoundEndedEvent;
use crate::resources::roundstatus::{RoundEndReason, RoundStatus};
use crate::resources::worldsignals::WorldSignals;

/// Flag in [`WorldSignals`] that stops the main loop.
pub const QUIT_FLAG: &str = "quit_game";

pub fn round_is_running(status: Res<RoundStatus>) -> bool {
    status.is_running()
}

/// Apply the first end-of-round request and ask the host loop to stop.
/// Later requests in the same or following frames are ignored.
pub fn round_end_observer(
    trigger: On<RoundEndedEvent>,
    mut status: ResMut<RoundStatus>,
    mut signals: ResMut<WorldSignals>,
) {
    let reason = trigger.event().reason;
    if status.end(reason) {
        info!("{}", reason.message());
        signals.set_flag(QUIT_FLAG);
    } else {
        debug!("Round already ended, ignoring {:?}", reason);
    }
}

pub fn quit_observer(_trigger: On<QuitRequested>, mut commands: Commands) {
    commands.trigger(RoundEndedEvent {
        reason: RoundEndReason::Quit,
    });
}

/// Advance the move-command queue so each command is read in exactly one frame.
pub fn update_move_messages(mut msgs: ResMut<Messages<MoveCommand>>) {
    msgs.update();
}
