use bevy::prelude::*;

use crate::plugins::AppState;
use crate::systems::{check_textures, report_init_error, request_textures};

pub struct TextureLoadingPlugin;

impl Plugin for TextureLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, request_textures)
            .add_systems(Update, check_textures.run_if(in_state(AppState::Loading)))
            .add_systems(OnEnter(AppState::Failed), report_init_error);
    }
}
