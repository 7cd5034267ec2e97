use bevy::{asset::AssetPlugin, prelude::*};
use mapflyer::{
    components::{FlightModel, FlightTrail, WaypointTracker},
    rendering::{
        LineMaterial, MapMaterial, PassKind, PassMaterial, SceneRenderer, SolidColorMaterial,
    },
    resources::{FlightSession, InputSnapshot, RenderLoop, SimulationConfig},
    systems::{compose_frame_system, draw_frame_system, request_textures, spawn_scene},
};
use pretty_assertions::assert_eq;

use crate::common::cruising_session;

// Scene entities plus the compose and draw systems, without a renderer.
fn scene_app(session: FlightSession) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<Image>()
        .init_asset::<MapMaterial>()
        .init_asset::<SolidColorMaterial>()
        .init_asset::<LineMaterial>()
        .insert_resource(SimulationConfig::default())
        .insert_resource(session)
        .init_resource::<SceneRenderer>()
        .init_resource::<RenderLoop>()
        .add_systems(Startup, (request_textures, spawn_scene).chain())
        .add_systems(Update, (compose_frame_system, draw_frame_system).chain());
    app.update();
    app
}

fn flown_session() -> FlightSession {
    let mut session = cruising_session();
    for _ in 0..10 {
        session.step(&InputSnapshot::default());
    }
    session
}

fn visibility(app: &App, kind: PassKind) -> Visibility {
    let entity = app
        .world()
        .resource::<SceneRenderer>()
        .pass(kind)
        .map(|handles| handles.entity)
        .expect("pass registered");
    *app.world().get::<Visibility>(entity).expect("pass entity")
}

#[test]
fn test_every_composed_pass_is_shown() {
    let app = scene_app(flown_session());

    assert_eq!(app.world().resource::<SceneRenderer>().frame().passes().len(), 7);
    for kind in PassKind::ORDER {
        assert_eq!(visibility(&app, kind), Visibility::Inherited, "{:?}", kind);
    }
    assert_eq!(app.world().resource::<RenderLoop>().frames(), 1);
}

#[test]
fn test_missing_assets_hide_their_pass() {
    let mut app = scene_app(flown_session());

    let renderer = app.world().resource::<SceneRenderer>();
    let checkpoint_mesh = renderer
        .pass(PassKind::Checkpoint)
        .map(|handles| handles.mesh.clone())
        .expect("checkpoint pass");
    let trail_material = match renderer.pass(PassKind::Trail).map(|handles| &handles.material) {
        Some(PassMaterial::Line(handle)) => handle.clone(),
        other => panic!("unexpected trail material {:?}", other),
    };

    app.world_mut()
        .resource_mut::<Assets<Mesh>>()
        .remove(&checkpoint_mesh);
    app.world_mut()
        .resource_mut::<Assets<LineMaterial>>()
        .remove(&trail_material);
    app.update();

    assert_eq!(visibility(&app, PassKind::Checkpoint), Visibility::Hidden);
    assert_eq!(visibility(&app, PassKind::Trail), Visibility::Hidden);
    for kind in [
        PassKind::WorldMap,
        PassKind::Aircraft,
        PassKind::MiniMap,
        PassKind::MiniMapAircraft,
        PassKind::MiniMapWaypoints,
    ] {
        assert_eq!(visibility(&app, kind), Visibility::Inherited, "{:?}", kind);
    }
}

#[test]
fn test_absent_passes_are_hidden() {
    let session = FlightSession::new(
        FlightModel::default(),
        WaypointTracker::new(Vec::new()),
        FlightTrail::default(),
    );
    let app = scene_app(session);

    for kind in [PassKind::Trail, PassKind::Checkpoint, PassKind::MiniMapWaypoints] {
        assert_eq!(visibility(&app, kind), Visibility::Hidden, "{:?}", kind);
    }
    for kind in [
        PassKind::WorldMap,
        PassKind::Aircraft,
        PassKind::MiniMap,
        PassKind::MiniMapAircraft,
    ] {
        assert_eq!(visibility(&app, kind), Visibility::Inherited, "{:?}", kind);
    }
}
