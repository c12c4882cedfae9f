//! Round systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward commands, poll replies)
//! - [`finish`] – win detection at the finish line and all-resolved check
//! - [`guard`] – guard pursuit of eliminated players and retrieval
//! - [`input`] – read key presses and emit movement/quit messages
//! - [`light`] – red/green toggling on the interval task
//! - [`movement`] – apply movement commands, eliminate on red
//! - [`render`] – draw the field, actors and overlay using Raylib
//! - [`round`] – run condition and end-of-round observers
//! - [`roundtimer`] – round countdown and overlay text
//! - [`time`] – update simulation time and delta
//! - [`timer`] – advance interval timers and fire task events

pub mod audio;
pub mod finish;
pub mod guard;
pub mod input;
pub mod light;
pub mod movement;
pub mod render;
pub mod round;
pub mod roundtimer;
pub mod time;
pub mod timer;
