//! Input adapter.
//!
//! [`poll_round_input`] drains Raylib's queue of keys pressed this frame and
//! turns them into round messages according to
//! [`InputBindings`](crate::resources::input::InputBindings). Each press
//! produces exactly one step; holding a key does not repeat. Unbound keys
//! are ignored.
use bevy_ecs::prelude::*;

use crate::events::input::{MoveCommand, QuitRequested};
use crate::resources::input::{InputAction, InputBindings};

pub fn poll_round_input(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    bindings: Res<InputBindings>,
    mut writer: MessageWriter<MoveCommand>,
    mut commands: Commands,
) {
    while let Some(key) = rl.get_key_pressed() {
        let Some(action) = bindings.action_for(key) else {
            continue;
        };
        match action {
            InputAction::Move { player, fb, lr } => {
                writer.write(MoveCommand::new(player, fb, lr));
            }
            InputAction::Quit => commands.trigger(QuitRequested),
        }
    }
}
