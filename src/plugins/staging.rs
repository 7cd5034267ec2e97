use bevy::prelude::*;

use crate::resources::RenderLoop;

/// Per-frame stages, run in order every `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FrameSet {
    Input,
    Simulate,
    Compose,
    Draw,
    Report,
}

/// Lifecycle of the application.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// Start-up failed; terminal.
    Failed,
    Stopped,
}

/// Whether simulation and drawing should run this frame.
pub fn render_loop_active(state: Res<State<AppState>>, render_loop: Res<RenderLoop>) -> bool {
    *state.get() == AppState::Running && render_loop.is_active()
}

pub struct StagingPlugin;

impl Plugin for StagingPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<RenderLoop>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Simulate,
                    FrameSet::Compose,
                    FrameSet::Draw,
                    FrameSet::Report,
                )
                    .chain(),
            )
            .configure_sets(Update, FrameSet::Input.run_if(in_state(AppState::Running)))
            .configure_sets(Update, FrameSet::Simulate.run_if(render_loop_active))
            .configure_sets(Update, FrameSet::Compose.run_if(render_loop_active))
            .configure_sets(Update, FrameSet::Draw.run_if(render_loop_active))
            .configure_sets(Update, FrameSet::Report.run_if(in_state(AppState::Running)));
    }
}
