use bevy_ecs::prelude::*;

use crate::events::round::RoundEndedEvent;
use crate::resources::roundstatus::RoundEndReason;
use crate::resources::roundtimer::RoundTimer;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Count the round down by the frame delta and publish the overlay text.
///
/// Ends the round with [`RoundEndReason::TimeUp`] on the frame the countdown
/// crosses zero.
pub fn round_timer_system(
    time: Res<WorldTime>,
    mut timer: ResMut<RoundTimer>,
    mut signals: ResMut<WorldSignals>,
    mut commands: Commands,
) {
    let expired = timer.tick(time.delta);
    signals.set_string("time_left", timer.label());
    signals.set_scalar("time_remaining", timer.remaining());
    if expired {
        commands.trigger(RoundEndedEvent {
            reason: RoundEndReason::TimeUp,
        });
    }
}
