//! Red Light, Green Light round library.
//!
//! This module exposes the round's ECS components, resources, systems and
//! events for use by the executable and by integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod schedule;
pub mod systems;
