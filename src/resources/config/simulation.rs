use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{asset::AssetConfig, render::RenderConfig, route::RouteConfig};
use crate::components::FlightConfig;
use crate::utils::{Result, SimError};

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub flight: FlightConfig,
    pub route: RouteConfig,
    pub render: RenderConfig,
    pub assets: AssetConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let flight = &self.flight;
        if !(flight.start.zoom > 0.0) {
            return Err(invalid(format!("start zoom must be positive, got {}", flight.start.zoom)));
        }
        if !(flight.landing.ground_zoom > 0.0) {
            return Err(invalid("ground zoom must be positive"));
        }
        if !(flight.control.zoom_factor > 1.0) {
            return Err(invalid("zoom factor must be greater than 1"));
        }
        if !(flight.control.min_zoom > 0.0 && flight.control.min_zoom <= flight.control.max_zoom)
            || !flight.control.max_zoom.is_finite()
        {
            return Err(invalid("zoom limits must be positive, finite and ordered"));
        }
        if flight.control.min_speed > flight.control.max_speed {
            return Err(invalid("min speed exceeds max speed"));
        }
        if !(0.0..0.5).contains(&flight.offset_limit) {
            return Err(invalid(format!(
                "offset limit {} must lie in [0, 0.5)",
                flight.offset_limit
            )));
        }
        if flight.takeoff.ticks == 0 || flight.takeoff.turn_start_tick >= flight.takeoff.ticks {
            return Err(invalid("takeoff turn must start before the ramp ends"));
        }
        if self.route.checkpoints.is_empty() {
            return Err(invalid("route has no checkpoints"));
        }
        if let Some(cp) = self.route.checkpoints.iter().find(|cp| !cp.in_map_bounds()) {
            return Err(invalid(format!("checkpoint ({}, {}) is outside the map", cp.u, cp.v)));
        }
        if self.render.trail_capacity == 0 {
            return Err(invalid("trail capacity must be non-zero"));
        }
        if self.render.minimap_size == 0 {
            return Err(invalid("mini-map size must be non-zero"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> SimError {
    SimError::InvalidConfig(reason.into())
}
