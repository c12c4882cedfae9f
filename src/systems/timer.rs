//! Interval timer system.
//!
//! Accumulates frame time on every
//! [`IntervalTimer`](crate::components::timer::IntervalTimer) and triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) each time a period
//! elapses. Timers rewind by subtracting their period, so a 3 second timer
//! fires every 3 seconds of game time regardless of frame rate.

use bevy_ecs::prelude::*;

use crate::components::timer::IntervalTimer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

pub fn update_interval_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut IntervalTimer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if timer.duration <= 0.0 {
            continue;
        }
        timer.elapsed += world_time.delta;
        // A long frame may cover several periods.
        while timer.elapsed >= timer.duration {
            commands.trigger(TimerEvent {
                entity,
                task: timer.task.clone(),
            });
            timer.reset();
        }
    }
}
