use bevy::prelude::*;

use crate::resources::{FlightSession, InputState, RenderLoop, SnapshotFeed};

/// Advance the flight by one tick and publish the result.
pub fn simulate_flight_system(
    mut session: ResMut<FlightSession>,
    input: Res<InputState>,
    feed: Res<SnapshotFeed>,
) {
    let snapshot = session.step(&input.snapshot());
    if !feed.publish(snapshot) {
        trace!("Snapshot feed closed, dropping tick {}", snapshot.tick);
    }
}

/// Freeze the loop once the aircraft is down. Runs after the landed frame
/// has been drawn.
pub fn pause_on_landing_system(session: Res<FlightSession>, mut render_loop: ResMut<RenderLoop>) {
    if session.is_landed() && !render_loop.is_landed() {
        render_loop.pause_for_landing();
    }
}
