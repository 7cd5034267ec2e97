use serde::{Deserialize, Serialize};

use crate::components::{default_route, Checkpoint};
use crate::utils::constants::CHECKPOINT_TOLERANCE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Route order; the last entry is flown first.
    pub checkpoints: Vec<Checkpoint>,
    /// Per-axis distance at which a checkpoint counts as reached.
    pub tolerance: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            checkpoints: default_route(),
            tolerance: CHECKPOINT_TOLERANCE,
        }
    }
}
