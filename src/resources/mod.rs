//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread, light cues
//! - `camera3d` – the fixed camera looking down the field
//! - `deadqueue` – eliminated players the guard still has to retrieve
//! - `input` – key bindings for both players and quit
//! - `lightstate` – red/green light
//! - `modelstore` – loaded models keyed by string ids
//! - `roundconfig` – window settings and round tuning loaded from INI
//! - `roundstatus` – running/ended flag and the reason the round ended
//! - `roundtimer` – round countdown
//! - `worldsignals` – global key/value signals shared with the host loop
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera3d;
pub mod deadqueue;
pub mod input;
pub mod lightstate;
pub mod modelstore;
pub mod roundconfig;
pub mod roundstatus;
pub mod roundtimer;
pub mod worldsignals;
pub mod worldtime;
