//! Player component and round outcome.
//!
//! A player starts [`Outcome::Alive`] and ends the round in exactly one of the
//! terminal outcomes. `picked_up` only ever becomes true for eliminated players
//! after the guard carries them off the field.
use bevy_ecs::prelude::Component;

/// Where a player stands in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Alive,
    Won,
    Eliminated,
}

#[derive(Component, Clone, Debug)]
pub struct Player {
    /// Player number, matching the input bindings (1 or 2).
    pub id: u8,
    pub name: String,
    pub outcome: Outcome,
    /// The model is turned half a revolution from its movement-forward
    /// convention, so forward/back input must be negated.
    pub inverted_facing: bool,
    pub picked_up: bool,
}

impl Player {
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            outcome: Outcome::Alive,
            inverted_facing: false,
            picked_up: false,
        }
    }

    pub fn with_inverted_facing(mut self, inverted: bool) -> Self {
        self.inverted_facing = inverted;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.outcome == Outcome::Alive
    }
}
