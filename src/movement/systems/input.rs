//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MoveIntent, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MoveIntent, With<Player>>,
) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    let jump_down = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);

    for mut intent in &mut query {
        intent.axis = axis;
        intent.jump_down = jump_down;
    }
}
