//! Repeating interval timer component.
//!
//! The [`IntervalTimer`] component counts elapsed time each frame. When the
//! accumulated time reaches `duration`, a
//! [`TimerEvent`](crate::events::timer::TimerEvent) is triggered carrying the
//! task name, and the timer rewinds by subtracting the duration so the period
//! does not drift with the frame rate.
//!
//! # Related
//!
//! - [`crate::systems::timer::update_interval_timers`] – advances timers and fires events
//! - [`crate::schedule::RoundScheduler::every`] – registers a named interval task

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct IntervalTimer {
    /// Period in seconds.
    pub duration: f32,
    /// Time accumulated since the last firing.
    pub elapsed: f32,
    /// Task name carried by the emitted event.
    pub task: String,
}

impl IntervalTimer {
    pub fn new(duration: f32, task: impl Into<String>) -> Self {
        IntervalTimer {
            duration,
            elapsed: 0.0,
            task: task.into(),
        }
    }

    /// Rewind by one period, keeping any overshoot.
    pub fn reset(&mut self) {
        self.elapsed -= self.duration;
    }
}
