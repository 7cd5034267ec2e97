use approx::assert_relative_eq;
use bevy::prelude::*;
use mapflyer::components::FlightPhase;
use mapflyer::utils::constants::{GROUND_ZOOM, LANDING_SPOT, OFFSET_LIMIT, START_HEADING};

use crate::common::{
    assert_offset_within, assert_phase, assert_snapshot_matches, cruising_session,
    session_on_final_checkpoint, TestAppBuilder,
};

#[test]
fn test_takeoff_sequence() {
    let mut app = TestAppBuilder::new().build();

    let frames = app.run_until(2100, |session| session.model().ticks() >= 2000);
    assert!(frames < 2000);

    let session = app.session();
    assert_phase(session, FlightPhase::Airborne);
    let state = session.model().state();
    assert_relative_eq!(state.speed, 0.0001, epsilon = 1e-12);
    assert_relative_eq!(state.heading, START_HEADING - 1.3, epsilon = 1e-9);
    assert!(state.zoom >= 0.15 && state.zoom < 0.15 + 0.15 / 1200.0);
    assert_offset_within(state, OFFSET_LIMIT);
    assert_eq!(session.trail().len(), 2000);
}

#[test]
fn test_input_ignored_during_takeoff() {
    let mut app = TestAppBuilder::new().build();
    let heading = app.session().model().state().heading;

    app.press(KeyCode::ArrowLeft);
    app.press(KeyCode::ArrowUp);
    app.run_steps(50);

    let state = app.session().model().state();
    assert_eq!(state.heading, heading);
    assert_relative_eq!(state.speed, 51.0 * 0.0001 / 2000.0, epsilon = 1e-15);
}

#[test]
fn test_manual_turn_when_airborne() {
    let mut app = TestAppBuilder::new()
        .with_session(cruising_session())
        .build();
    let heading = app.session().model().state().heading;

    app.press(KeyCode::ArrowLeft);
    app.run_steps(10);
    app.release(KeyCode::ArrowLeft);
    app.run_steps(5);

    assert_relative_eq!(
        app.session().model().state().heading,
        heading + 10.0 * 0.008,
        epsilon = 1e-12
    );
}

#[test]
fn test_zoom_and_speed_keys() {
    let mut app = TestAppBuilder::new()
        .with_session(cruising_session())
        .build();

    app.press(KeyCode::KeyW);
    app.press(KeyCode::ArrowUp);
    app.run_steps(3);

    let state = app.session().model().state();
    assert_relative_eq!(state.zoom, 0.15 * 1.02f64.powi(3), epsilon = 1e-12);
    assert_relative_eq!(state.speed, 0.0001 + 3.0 * 0.0003 / 300.0, epsilon = 1e-12);
}

#[test]
fn test_landing_sequence() {
    let mut app = TestAppBuilder::new()
        .with_session(session_on_final_checkpoint(0.15))
        .build();

    // the only checkpoint is reached on the first tick
    assert!(app.session().waypoints().is_route_complete());
    assert_phase(app.session(), FlightPhase::Landing);

    app.run_until(400, |session| session.is_landed());
    app.run_frame();

    let session = app.session();
    let state = session.model().state();
    assert_eq!(state.zoom, GROUND_ZOOM);
    assert_eq!(state.speed, 0.0);
    assert_relative_eq!(state.offset.x, LANDING_SPOT[0] - 0.5, epsilon = 1e-3);
    assert_relative_eq!(state.offset.y, LANDING_SPOT[1] - 0.5, epsilon = 1e-3);

    assert!(app.render_loop().is_landed());
    assert!(app.render_loop().is_paused());

    // frozen once landed, pause cannot be lifted
    let ticks = app.session().model().ticks();
    app.tap(KeyCode::Space);
    app.run_steps(10);
    assert_eq!(app.session().model().ticks(), ticks);
    assert!(app.render_loop().is_paused());
}

#[test]
fn test_snapshots_reach_feed() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(9);

    let latest = app.feed_mut().drain_latest().expect("no snapshot published");
    let ticks = app.session().model().ticks();
    assert_eq!(latest.tick, ticks);
    let state = app.session().model().state().clone();
    assert_snapshot_matches(&latest, &state);
}
