//! Logical world-space position.
//!
//! The round works in a Z-up frame: X is lateral (cross-field), Y is the
//! forward axis running from the start line toward the doll, and Z is up.
//! The render adapter maps this frame into the renderer's Y-up frame.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        WorldPosition {
            pos: Vector3 { x, y, z },
        }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &WorldPosition) -> f32 {
        (other.pos - self.pos).length()
    }
}
