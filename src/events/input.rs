//! Input messages.
//!
//! Key presses are not handled where they happen. The input adapter writes a
//! [`MoveCommand`] per directional key press into a message queue that the
//! movement system drains once per frame, in arrival order. Quitting is an
//! immediate [`QuitRequested`] event.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::*;

/// Request to move one player by one step.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    /// Player number (see [`Player::id`](crate::components::player::Player::id)).
    pub player: u8,
    /// Forward/back step, in -1..=1.
    pub fb: i8,
    /// Left/right step, in -1..=1.
    pub lr: i8,
}

impl MoveCommand {
    pub fn new(player: u8, fb: i8, lr: i8) -> Self {
        MoveCommand {
            player,
            fb: fb.clamp(-1, 1),
            lr: lr.clamp(-1, 1),
        }
    }

    /// Whether this command would displace the player at all.
    pub fn is_motion(&self) -> bool {
        self.fb != 0 || self.lr != 0
    }
}

/// The quit key was pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct QuitRequested;
