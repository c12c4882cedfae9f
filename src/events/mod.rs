//! Event types and messages used by the round.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`input`] – per-frame movement command queue and the quit request
//! - [`round`] – light changes, eliminations, wins, retrievals, round end
//! - [`timer`] – interval timer expiry
pub mod audio;
pub mod input;
pub mod round;
pub mod timer;
