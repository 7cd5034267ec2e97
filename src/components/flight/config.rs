use serde::{Deserialize, Serialize};

use crate::utils::constants::*;

/// Tunables for the flight model. Defaults reproduce the demo flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub start: StartConfig,
    pub takeoff: TakeoffConfig,
    pub control: ControlConfig,
    pub landing: LandingConfig,
    /// Symmetric bound on each pan offset component.
    pub offset_limit: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            start: StartConfig::default(),
            takeoff: TakeoffConfig::default(),
            control: ControlConfig::default(),
            landing: LandingConfig::default(),
            offset_limit: OFFSET_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub heading: f64,
    pub zoom: f64,
    pub offset: [f64; 2],
    pub speed: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            heading: START_HEADING,
            zoom: START_ZOOM,
            offset: START_OFFSET,
            speed: 0.0,
        }
    }
}

/// Scripted takeoff ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeoffConfig {
    pub ticks: u32,
    /// Speed added over the whole ramp.
    pub speed_gain: f64,
    pub zoom_start_tick: u32,
    pub zoom_cap: f64,
    /// Number of ticks the zoom gain is spread over.
    pub zoom_steps: f64,
    pub turn_start_tick: u32,
    /// Heading change spread over the ticks after `turn_start_tick`.
    pub turn_total: f64,
}

impl Default for TakeoffConfig {
    fn default() -> Self {
        Self {
            ticks: TAKEOFF_TICKS,
            speed_gain: TAKEOFF_SPEED_GAIN,
            zoom_start_tick: TAKEOFF_ZOOM_START_TICK,
            zoom_cap: TAKEOFF_ZOOM_CAP,
            zoom_steps: TAKEOFF_ZOOM_STEPS,
            turn_start_tick: TAKEOFF_TURN_START_TICK,
            turn_total: TAKEOFF_TURN_TOTAL,
        }
    }
}

impl TakeoffConfig {
    pub fn speed_step(&self) -> f64 {
        self.speed_gain / self.ticks as f64
    }

    pub fn zoom_step(&self) -> f64 {
        self.zoom_cap / self.zoom_steps
    }

    pub fn turn_step(&self) -> f64 {
        self.turn_total / self.ticks.saturating_sub(self.turn_start_tick).max(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub turn_step: f64,
    pub speed_step: f64,
    pub max_speed: f64,
    pub min_speed: f64,
    pub zoom_factor: f64,
    /// Manual zoom limits.
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            turn_step: TURN_STEP,
            speed_step: SPEED_STEP,
            max_speed: MAX_SPEED,
            min_speed: MIN_SPEED,
            zoom_factor: ZOOM_FACTOR,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Scripted landing sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Landing spot in map space.
    pub spot: [f64; 2],
    pub rate: f64,
    pub zoom_step: f64,
    pub ground_zoom: f64,
    pub heading: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            spot: LANDING_SPOT,
            rate: LANDING_RATE,
            zoom_step: LANDING_ZOOM_STEP,
            ground_zoom: GROUND_ZOOM,
            heading: LANDING_HEADING,
        }
    }
}
