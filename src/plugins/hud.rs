use bevy::prelude::*;

use crate::plugins::{AppState, FrameSet};
use crate::systems::{spawn_hud, update_hud_system};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_hud)
            .add_systems(Update, update_hud_system.in_set(FrameSet::Report));
    }
}
