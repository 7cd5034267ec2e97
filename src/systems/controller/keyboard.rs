use bevy::prelude::*;
use std::collections::HashSet;

use crate::resources::{Control, InputState, KeyBindings, RenderLoop};

/// Mirror the keyboard into [`InputState`].
///
/// A control is held while any key bound to it is held.
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<InputState>,
) {
    let held: HashSet<Control> = keyboard
        .get_pressed()
        .filter_map(|key| bindings.control_for(*key))
        .collect();

    for control in Control::ALL {
        if held.contains(&control) {
            if input.press(control) {
                debug!("{} pressed", control.id());
            }
        } else if input.is_pressed(control) {
            input.release(control);
        }
    }
}

pub fn pause_toggle_system(mut input: ResMut<InputState>, mut render_loop: ResMut<RenderLoop>) {
    if input.take_just_pressed(Control::PauseToggle) {
        render_loop.toggle_pause();
    }
}
