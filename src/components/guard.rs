use bevy_ecs::prelude::Component;

/// Marker for the guard that retrieves eliminated players.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Guard;
