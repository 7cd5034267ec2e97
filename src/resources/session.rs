use bevy::prelude::*;

use super::config::SimulationConfig;
use super::input::InputSnapshot;
use super::transformations::ViewProjector;
use crate::components::{
    FlightModel, FlightPhase, FlightSnapshot, FlightTrail, PathPoint, WaypointTracker,
};

/// The whole simulated flight: aircraft model, route progress and the
/// trail flown so far.
#[derive(Resource, Debug, Clone, Default)]
pub struct FlightSession {
    model: FlightModel,
    waypoints: WaypointTracker,
    trail: FlightTrail,
}

impl FlightSession {
    pub fn new(model: FlightModel, waypoints: WaypointTracker, trail: FlightTrail) -> Self {
        Self {
            model,
            waypoints,
            trail,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            FlightModel::new(config.flight.clone()),
            WaypointTracker::with_tolerance(
                config.route.checkpoints.clone(),
                config.route.tolerance,
            ),
            FlightTrail::with_capacity(config.render.trail_capacity),
        )
    }

    /// Run one simulation tick.
    ///
    /// The model moves first, then the route is checked against the new
    /// position. A finished route starts the landing as soon as the model
    /// is airborne. The trail records every tick until the aircraft is down.
    pub fn step(&mut self, input: &InputSnapshot) -> FlightSnapshot {
        let snapshot = self.model.tick(1, input);

        self.waypoints
            .advance_if_reached(snapshot.offset[0], snapshot.offset[1]);

        if self.waypoints.is_route_complete() && self.model.phase() == FlightPhase::Airborne {
            self.model.begin_landing();
        }

        let state = self.model.state();
        if state.phase.records_trail() {
            let position = state.map_position();
            self.trail.record(PathPoint {
                u: position.x,
                v: position.y,
                speed: state.speed,
            });
        }

        self.model.snapshot()
    }

    pub fn model(&self) -> &FlightModel {
        &self.model
    }

    pub fn waypoints(&self) -> &WaypointTracker {
        &self.waypoints
    }

    pub fn trail(&self) -> &FlightTrail {
        &self.trail
    }

    pub fn projector(&self) -> ViewProjector {
        ViewProjector::from_state(self.model.state())
    }

    pub fn is_landed(&self) -> bool {
        self.model.phase() == FlightPhase::Landed
    }
}
