use bevy::prelude::*;

use crate::plugins::{AppState, FrameSet};
use crate::systems::{apply_stop_request, start_render_loop, teardown_on_exit, teardown_on_stop};

/// Starts the loop when the app starts running and tears the scene down
/// when it stops or the app exits.
pub struct RenderLoopPlugin;

impl Plugin for RenderLoopPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), start_render_loop)
            .add_systems(
                Update,
                apply_stop_request
                    .after(FrameSet::Report)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(OnEnter(AppState::Stopped), teardown_on_stop)
            .add_systems(Last, teardown_on_exit);
    }
}
