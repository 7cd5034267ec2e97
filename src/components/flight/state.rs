use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{FlightPhase, StartConfig};

/// Kinematic state of the simulated aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Radians; increases when turning left.
    pub heading: f64,
    /// World-to-view scale applied by the map sampling shader, always > 0.
    pub zoom: f64,
    /// Pan offset of the view centre from the middle of the map.
    pub offset: Vector2<f64>,
    /// Forward velocity in map units per tick.
    pub speed: f64,
    pub phase: FlightPhase,
    pub takeoff_tick: u32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::from_config(&StartConfig::default())
    }
}

impl FlightState {
    pub fn from_config(config: &StartConfig) -> Self {
        Self {
            heading: config.heading,
            zoom: config.zoom,
            offset: Vector2::new(config.offset[0], config.offset[1]),
            speed: config.speed,
            phase: FlightPhase::TakingOff,
            takeoff_tick: 0,
        }
    }

    /// Aircraft position in map space. The aircraft sits at the view centre,
    /// which the offset moves away from the middle of the map.
    pub fn map_position(&self) -> Vector2<f64> {
        Vector2::new(0.5 + self.offset.x, 0.5 + self.offset.y)
    }
}

/// Read-only copy of the flight state published once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub heading: f64,
    pub zoom: f64,
    pub speed: f64,
    pub phase: FlightPhase,
    pub offset: [f64; 2],
    /// Ticks simulated since the start of the flight.
    pub tick: u64,
}

impl FlightSnapshot {
    pub fn capture(state: &FlightState, tick: u64) -> Self {
        Self {
            heading: state.heading,
            zoom: state.zoom,
            speed: state.speed,
            phase: state.phase,
            offset: [state.offset.x, state.offset.y],
            tick,
        }
    }
}
