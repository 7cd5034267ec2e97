use serde::{Deserialize, Serialize};

/// Image assets, relative to the bevy asset directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub map_image: String,
    pub aircraft_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            map_image: "map.jpg".to_string(),
            aircraft_image: "plane.png".to_string(),
        }
    }
}
