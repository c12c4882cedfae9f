//! Round notifications.
//!
//! These events are emitted by the round systems when something a player
//! would notice happens. The observers in
//! [`crate::systems::round`] log them and end the round when asked to.

use bevy_ecs::prelude::*;

use crate::resources::lightstate::LightState;
use crate::resources::roundstatus::RoundEndReason;

/// The light just changed to `state`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightChangedEvent {
    pub state: LightState,
}

/// A player moved during red light.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEliminatedEvent {
    pub entity: Entity,
}

/// A player reached the finish line.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerWonEvent {
    pub entity: Entity,
}

/// The guard carried an eliminated player off the field.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRetrievedEvent {
    pub entity: Entity,
}

/// The round reached a terminal state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEndedEvent {
    pub reason: RoundEndReason,
}
