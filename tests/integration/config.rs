use mapflyer::{
    components::{Checkpoint, FlightPhase},
    resources::{FlightSession, SimulationConfig},
    utils::SimError,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use crate::common::TestAppBuilder;

#[test]
fn test_custom_config_drives_session() -> Result<(), SimError> {
    let dir = TempDir::new()?;
    let path = dir.path().join("flight.yaml");

    let mut config = SimulationConfig::default();
    config.route.checkpoints = vec![Checkpoint::new(0.2, 0.2), Checkpoint::new(0.8, 0.8)];
    config.render.trail_capacity = 16;
    config.flight.takeoff.ticks = 100;
    config.flight.takeoff.zoom_start_tick = 10;
    config.flight.takeoff.turn_start_tick = 50;
    config.save(&path)?;

    let loaded = SimulationConfig::load(&path)?;
    assert_eq!(loaded, config);

    let session = FlightSession::from_config(&loaded);
    assert_eq!(session.waypoints().current(), Some(Checkpoint::new(0.8, 0.8)));
    assert_eq!(session.trail().capacity(), 16);

    let mut app = TestAppBuilder::new().with_config(loaded).build();
    app.run_steps(120);
    assert_eq!(app.session().model().phase(), FlightPhase::Airborne);
    assert_eq!(app.session().trail().len(), 16);
    Ok(())
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "route:\n  checkpoints: []\n").unwrap();

    assert!(matches!(
        SimulationConfig::load(&path),
        Err(SimError::InvalidConfig(_))
    ));

    fs::write(&path, "flight: [not, a, map]\n").unwrap();
    assert!(matches!(
        SimulationConfig::load(&path),
        Err(SimError::Serialization(_))
    ));
}
