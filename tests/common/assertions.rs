use approx::assert_relative_eq;
use mapflyer::{
    components::{FlightPhase, FlightSnapshot, FlightState},
    resources::FlightSession,
};

/// Assert both offset components lie within `±limit`.
#[track_caller]
pub fn assert_offset_within(state: &FlightState, limit: f64) {
    assert!(
        state.offset.x.abs() <= limit && state.offset.y.abs() <= limit,
        "Offset ({}, {}) outside ±{}",
        state.offset.x,
        state.offset.y,
        limit
    );
}

#[track_caller]
pub fn assert_phase(session: &FlightSession, expected: FlightPhase) {
    assert_eq!(
        session.model().phase(),
        expected,
        "Unexpected phase after {} ticks",
        session.model().ticks()
    );
}

/// Assert a published snapshot describes the given state.
#[track_caller]
pub fn assert_snapshot_matches(snapshot: &FlightSnapshot, state: &FlightState) {
    assert_relative_eq!(snapshot.heading, state.heading, epsilon = 1e-12);
    assert_relative_eq!(snapshot.zoom, state.zoom, epsilon = 1e-12);
    assert_relative_eq!(snapshot.speed, state.speed, epsilon = 1e-12);
    assert_relative_eq!(snapshot.offset[0], state.offset.x, epsilon = 1e-12);
    assert_relative_eq!(snapshot.offset[1], state.offset.y, epsilon = 1e-12);
    assert_eq!(snapshot.phase, state.phase);
}
