//! Red/green light resource.
//!
//! The round starts on [`LightState::Red`] and strictly alternates on every
//! call to [`LightState::toggle`]. See
//! [`crate::systems::light::light_timer_observer`] for the side effects that follow
//! a toggle.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightState {
    /// Any movement eliminates the moving player.
    #[default]
    Red,
    /// Movement is allowed.
    Green,
}

impl LightState {
    /// Flip to the other light and return the new value.
    pub fn toggle(&mut self) -> LightState {
        *self = match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Red,
        };
        *self
    }

    pub fn is_red(&self) -> bool {
        matches!(self, LightState::Red)
    }
}
