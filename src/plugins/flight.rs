use bevy::prelude::*;

use crate::plugins::FrameSet;
use crate::resources::{FlightSession, InputState, KeyBindings, SimulationConfig, SnapshotFeed};
use crate::systems::{
    keyboard_input_system, pause_on_landing_system, pause_toggle_system, simulate_flight_system,
};

/// Flight simulation driven by the keyboard, one tick per frame.
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SimulationConfig>() {
            app.init_resource::<SimulationConfig>();
        }
        let session = FlightSession::from_config(app.world().resource::<SimulationConfig>());

        app.insert_resource(session)
            .init_resource::<InputState>()
            .init_resource::<KeyBindings>()
            .init_resource::<SnapshotFeed>()
            .add_systems(
                Update,
                (
                    (keyboard_input_system, pause_toggle_system)
                        .chain()
                        .in_set(FrameSet::Input),
                    simulate_flight_system.in_set(FrameSet::Simulate),
                    pause_on_landing_system.in_set(FrameSet::Report),
                ),
            );
    }
}
