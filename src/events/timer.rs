//! Interval timer events.
//!
//! When an [`IntervalTimer`](crate::components::timer::IntervalTimer) reaches
//! its period, a [`TimerEvent`] is triggered. Observers match on `task` to
//! decide whether the tick is theirs.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<TimerEvent>| {
//!     if trigger.event().task == "toggle_light" {
//!         // flip the light
//!     }
//! });
//! ```

use bevy_ecs::prelude::*;

/// Event emitted when an interval timer fires.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity holding the timer.
    pub entity: Entity,
    /// Task name configured on the timer.
    pub task: String,
}
