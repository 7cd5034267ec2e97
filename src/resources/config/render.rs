use serde::{Deserialize, Serialize};

use crate::utils::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub vsync: bool,
    /// Side of the square mini-map viewport, logical pixels.
    pub minimap_size: u32,
    pub clear_color: [f32; 3],
    pub checkpoint_size: f32,
    pub arrow_size: f32,
    pub aircraft_half_extent: f32,
    pub minimap_marker_size: f32,
    pub trail_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 800,
            vsync: true,
            minimap_size: 250,
            clear_color: [0.15, 0.15, 0.15],
            checkpoint_size: CHECKPOINT_SIZE,
            arrow_size: ARROW_SIZE,
            aircraft_half_extent: AIRCRAFT_HALF_EXTENT,
            minimap_marker_size: MINIMAP_MARKER_SIZE,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}
