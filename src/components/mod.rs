//! ECS components for round entities.
//!
//! Submodules overview:
//! - [`doll`] – marker for the light-signalling doll
//! - [`guard`] – marker for the guard that retrieves eliminated players
//! - [`model`] – reference to a loaded 3D model and its scale
//! - [`orientation`] – heading/pitch of an actor and its local movement frame
//! - [`player`] – player identity, outcome and facing
//! - [`timer`] – repeating interval timer that emits task events
//! - [`worldposition`] – logical 3D position

pub mod doll;
pub mod guard;
pub mod model;
pub mod orientation;
pub mod player;
pub mod timer;
pub mod worldposition;
