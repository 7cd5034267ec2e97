use mapflyer::{
    components::{
        Checkpoint, FlightModel, FlightPhase, FlightState, FlightTrail, WaypointTracker,
    },
    resources::FlightSession,
};
use nalgebra::Vector2;

/// Airborne state sitting on map position `(u, v)` at the given zoom.
pub fn airborne_state_at(u: f64, v: f64, zoom: f64) -> FlightState {
    FlightState {
        heading: 0.0,
        zoom,
        offset: Vector2::new(u - 0.5, v - 0.5),
        speed: 0.0,
        phase: FlightPhase::Airborne,
        takeoff_tick: 2000,
    }
}

/// Session one checkpoint away from finishing its route, parked on it.
pub fn session_on_final_checkpoint(zoom: f64) -> FlightSession {
    let last = Checkpoint::new(0.505, 0.297);
    FlightSession::new(
        FlightModel::default().with_state(airborne_state_at(last.u, last.v, zoom)),
        WaypointTracker::new(vec![last]),
        FlightTrail::default(),
    )
}

/// Airborne session with the default route still ahead.
pub fn cruising_session() -> FlightSession {
    let mut state = airborne_state_at(0.5, 0.5, 0.15);
    state.speed = 0.0001;
    FlightSession::new(
        FlightModel::default().with_state(state),
        WaypointTracker::default(),
        FlightTrail::default(),
    )
}
