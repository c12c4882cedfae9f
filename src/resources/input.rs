//! Keyboard bindings for the round.
//!
//! Each player gets four directional keys; Escape quits. Bindings are plain
//! data so they can be inspected without opening a window. The
//! [`poll_round_input`](crate::systems::input::poll_round_input) system turns
//! pressed keys into [`MoveCommand`](crate::events::input::MoveCommand)
//! messages.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move `player` by `fb` (forward/back) and `lr` (left/right), each in -1..=1.
    Move { player: u8, fb: i8, lr: i8 },
    /// End the round immediately.
    Quit,
}

#[derive(Debug, Clone, Copy)]
/// A physical key and the action it triggers on press.
pub struct KeyBinding {
    pub key: KeyboardKey,
    pub action: InputAction,
}

/// Resource listing every key the round listens to.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub bindings: Vec<KeyBinding>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mv = |key, player, fb, lr| KeyBinding {
            key,
            action: InputAction::Move { player, fb, lr },
        };
        Self {
            bindings: vec![
                // Player 1
                mv(KeyboardKey::KEY_F, 1, 1, 0),
                mv(KeyboardKey::KEY_B, 1, -1, 0),
                mv(KeyboardKey::KEY_L, 1, 0, -1),
                mv(KeyboardKey::KEY_R, 1, 0, 1),
                // Player 2
                mv(KeyboardKey::KEY_UP, 2, 1, 0),
                mv(KeyboardKey::KEY_DOWN, 2, -1, 0),
                mv(KeyboardKey::KEY_LEFT, 2, 0, -1),
                mv(KeyboardKey::KEY_RIGHT, 2, 0, 1),
                KeyBinding {
                    key: KeyboardKey::KEY_ESCAPE,
                    action: InputAction::Quit,
                },
            ],
        }
    }
}

impl InputBindings {
    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyboardKey) -> Option<InputAction> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.action)
    }
}
