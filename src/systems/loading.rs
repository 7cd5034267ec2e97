use bevy::{prelude::*, render::renderer::RenderDevice};

use crate::plugins::AppState;
use crate::rendering::{ProgramCache, ProgramSource};
use crate::resources::{InitError, LoadProgress, SimulationConfig, TextureLoader};
use crate::utils::SimError;

pub fn request_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SimulationConfig>,
) {
    commands.insert_resource(TextureLoader::request(&asset_server, &config.assets));
}

/// Register the three shader programs. Any failure ends start-up.
pub fn compile_programs(
    mut commands: Commands,
    mut cache: ResMut<ProgramCache>,
    mut shaders: ResMut<Assets<Shader>>,
    device: Option<Res<RenderDevice>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if device.is_none() {
        fail(
            &mut commands,
            &mut next_state,
            SimError::GpuUnavailable("no render device".to_string()),
        );
        return;
    }

    for program in ProgramSource::all() {
        if let Err(err) = cache.compile(&mut shaders, &program) {
            fail(&mut commands, &mut next_state, err);
            return;
        }
    }
    info!("Compiled {} shader programs", cache.len());
}

/// Wait for both textures, then start running.
pub fn check_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    textures: Option<Res<TextureLoader>>,
    init_error: Option<Res<InitError>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if init_error.is_some() {
        return;
    }
    let Some(textures) = textures else {
        return;
    };

    match textures.progress(&asset_server) {
        LoadProgress::Pending => {}
        LoadProgress::Ready => {
            info!("Textures loaded");
            next_state.set(AppState::Running);
        }
        failed => {
            if let Some(err) = failed.into_error() {
                fail(&mut commands, &mut next_state, err);
            }
        }
    }
}

pub fn report_init_error(init_error: Option<Res<InitError>>) {
    match init_error {
        Some(err) => error!("Initialization failed: {}", err.0),
        None => error!("Initialization failed"),
    }
}

fn fail(commands: &mut Commands, next_state: &mut NextState<AppState>, err: SimError) {
    commands.insert_resource(InitError(err));
    next_state.set(AppState::Failed);
}
