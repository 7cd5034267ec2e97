use bevy::prelude::*;

use crate::plugins::{AppState, FrameSet};
use crate::rendering::SceneRenderer;
use crate::systems::{
    compose_frame_system, draw_frame_system, minimap_viewport_system, spawn_scene,
};

/// Main view and mini-map drawing.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneRenderer>()
            .add_systems(OnEnter(AppState::Running), spawn_scene)
            .add_systems(
                Update,
                (
                    compose_frame_system.in_set(FrameSet::Compose),
                    (minimap_viewport_system, draw_frame_system)
                        .chain()
                        .in_set(FrameSet::Draw),
                ),
            );
    }
}
