use bevy::prelude::*;
use mapflyer::{
    plugins::AppState,
    rendering::{ProgramCache, ProgramSource, MAP_SHADER_HANDLE},
    resources::{Control, InitError, InputState, SimulationConfig, TextureLoader},
    utils::SimError,
};

use crate::common::TestAppBuilder;

#[test]
fn test_nothing_runs_while_loading() {
    let mut app = TestAppBuilder::new().loading().build();
    app.run_steps(5);

    assert_eq!(app.state(), AppState::Loading);
    assert_eq!(app.session().model().ticks(), 0);
    assert!(!app.render_loop().is_running());
}

#[test]
fn test_running_starts_loop() {
    let app = TestAppBuilder::new().build();

    assert_eq!(app.state(), AppState::Running);
    assert!(app.render_loop().is_active());
    assert_eq!(app.session().model().ticks(), 1);
}

#[test]
fn test_space_toggles_pause() {
    let mut app = TestAppBuilder::new().build();

    app.press(KeyCode::Space);
    app.run_frame();
    assert!(app.render_loop().is_paused());
    let ticks = app.session().model().ticks();

    // held key does not toggle again
    app.run_steps(5);
    assert!(app.render_loop().is_paused());
    assert_eq!(app.session().model().ticks(), ticks);

    app.release(KeyCode::Space);
    app.run_frame();
    app.press(KeyCode::Space);
    app.run_frame();
    assert!(!app.render_loop().is_paused());
    // the frame that un-paused also ticked
    assert_eq!(app.session().model().ticks(), ticks + 1);
}

#[test]
fn test_stop_tears_down() {
    let mut app = TestAppBuilder::new().with_texture_loading().build();
    assert!(app.get_state::<TextureLoader>().is_some());
    app.press(KeyCode::ArrowLeft);
    app.run_steps(3);
    assert!(app
        .get_state::<InputState>()
        .is_some_and(|input| input.is_pressed(Control::TurnLeft)));

    app.render_loop_mut().stop();
    let ticks = app.session().model().ticks();
    app.run_steps(2);

    assert_eq!(app.state(), AppState::Stopped);
    assert!(app.feed_mut().is_closed());
    assert!(!app
        .get_state::<InputState>()
        .is_some_and(|input| input.is_pressed(Control::TurnLeft)));
    assert_eq!(app.session().model().ticks(), ticks);
    // the image handles go with the loader
    assert!(app.get_state::<TextureLoader>().is_none());
}

#[test]
fn test_app_exit_tears_down() {
    let mut app = TestAppBuilder::new().build();
    app.app.world_mut().send_event(AppExit::Success);
    app.run_frame();

    assert!(app.feed_mut().is_closed());
    assert!(!app.render_loop().is_running());
}

#[test]
fn test_teardown_releases_programs() {
    let mut app = TestAppBuilder::new().with_program_cache().build();
    app.app
        .world_mut()
        .resource_scope(|world, mut cache: Mut<ProgramCache>| {
            let mut shaders = world.resource_mut::<Assets<Shader>>();
            for program in ProgramSource::all() {
                assert!(cache.compile(&mut shaders, &program).is_ok());
            }
        });
    assert_eq!(app.get_state::<ProgramCache>().map(|cache| cache.len()), Some(3));

    app.render_loop_mut().stop();
    app.run_steps(2);

    assert_eq!(app.state(), AppState::Stopped);
    assert!(app.get_state::<ProgramCache>().is_some_and(|cache| cache.is_empty()));
    assert!(app
        .get_state::<Assets<Shader>>()
        .is_some_and(|shaders| shaders.get(&MAP_SHADER_HANDLE).is_none()));
}

#[test]
fn test_missing_gpu_fails_startup() {
    let mut app = TestAppBuilder::new().loading().with_shaders().build();
    app.run_steps(5);

    assert_eq!(app.state(), AppState::Failed);
    assert!(matches!(
        app.get_state::<InitError>(),
        Some(InitError(SimError::GpuUnavailable(_)))
    ));
    assert_eq!(app.session().model().ticks(), 0);
    assert!(!app.render_loop().is_running());
}

#[test]
fn test_missing_texture_fails_startup() {
    let mut config = SimulationConfig::default();
    config.assets.map_image = "missing/map.jpg".to_string();
    config.assets.aircraft_image = "missing/plane.png".to_string();
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .loading()
        .with_texture_loading()
        .build();

    app.run_until_state(2000, AppState::Failed);
    match app.get_state::<InitError>() {
        Some(InitError(SimError::AssetLoad { path, .. })) => {
            assert!(path.starts_with("missing/"), "unexpected path {}", path);
        }
        other => panic!("expected an asset error, got {:?}", other),
    }

    // failure is terminal and the loop never starts
    app.run_steps(10);
    assert_eq!(app.state(), AppState::Failed);
    assert_eq!(app.session().model().ticks(), 0);
    assert!(!app.render_loop().is_running());
}
