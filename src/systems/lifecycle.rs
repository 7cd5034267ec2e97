use bevy::{ecs::system::SystemParam, prelude::*};

use crate::components::{HudText, MainCamera, MiniMapCamera, ScenePass};
use crate::plugins::AppState;
use crate::rendering::{ProgramCache, SceneRenderer};
use crate::resources::{InputState, RenderLoop, SnapshotFeed, TextureLoader};

pub fn start_render_loop(mut render_loop: ResMut<RenderLoop>) {
    render_loop.start();
}

/// Leave `Running` once the loop has been asked to stop.
pub fn apply_stop_request(render_loop: Res<RenderLoop>, mut next_state: ResMut<NextState<AppState>>) {
    if !render_loop.is_running() {
        next_state.set(AppState::Stopped);
    }
}

/// Everything released when the flight ends, however it ends.
#[derive(SystemParam)]
pub struct SceneTeardown<'w, 's> {
    commands: Commands<'w, 's>,
    owned: Query<
        'w,
        's,
        Entity,
        Or<(
            With<ScenePass>,
            With<MainCamera>,
            With<MiniMapCamera>,
            With<HudText>,
        )>,
    >,
    renderer: Option<ResMut<'w, SceneRenderer>>,
    textures: Option<Res<'w, TextureLoader>>,
    programs: Option<ResMut<'w, ProgramCache>>,
    shaders: Option<ResMut<'w, Assets<Shader>>>,
    input: ResMut<'w, InputState>,
    feed: ResMut<'w, SnapshotFeed>,
    render_loop: ResMut<'w, RenderLoop>,
}

impl SceneTeardown<'_, '_> {
    pub fn run(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.release();
        }

        if self.textures.is_some() {
            self.commands.remove_resource::<TextureLoader>();
        }
        if let (Some(programs), Some(shaders)) = (self.programs.as_mut(), self.shaders.as_mut()) {
            programs.release(shaders);
        }

        let mut despawned = 0;
        for entity in self.owned.iter() {
            self.commands.entity(entity).despawn_recursive();
            despawned += 1;
        }

        self.input.clear();
        self.feed.close();
        self.render_loop.stop();
        info!("Teardown complete, {} entities released", despawned);
    }
}

pub fn teardown_on_stop(mut teardown: SceneTeardown) {
    teardown.run();
}

pub fn teardown_on_exit(mut exit: EventReader<AppExit>, mut teardown: SceneTeardown) {
    if exit.read().next().is_some() {
        teardown.run();
    }
}
