use bevy_ecs::prelude::Resource;

/// Countdown for the whole round.
///
/// `remaining` never increases and never goes below zero. [`RoundTimer::tick`]
/// reports expiry exactly once, on the frame the countdown crosses zero.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RoundTimer {
    remaining: f32,
    expired: bool,
}

impl RoundTimer {
    pub fn new(seconds: f32) -> Self {
        RoundTimer {
            remaining: seconds.max(0.0),
            expired: false,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Subtract `dt` seconds. Returns `true` only on the tick that runs the
    /// countdown out; later ticks are ignored.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.expired {
            return false;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining < 0.0 {
            self.remaining = 0.0;
            self.expired = true;
            return true;
        }
        false
    }

    /// Whole seconds left, rounded down, as shown on the overlay.
    pub fn display_seconds(&self) -> u32 {
        self.remaining.floor() as u32
    }

    pub fn label(&self) -> String {
        format!("Time Left: {}", self.display_seconds())
    }
}
