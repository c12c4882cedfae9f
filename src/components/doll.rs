use bevy_ecs::prelude::Component;

use crate::resources::lightstate::LightState;

/// Marker for the doll that signals the light state by turning around.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Doll;

impl Doll {
    /// Faces the players on red, turns its back on green.
    pub fn heading_for(light: LightState) -> f32 {
        match light {
            LightState::Red => 0.0,
            LightState::Green => 180.0,
        }
    }
}
