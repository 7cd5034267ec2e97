use bevy::asset::LoadState;
use bevy::prelude::*;

use super::config::AssetConfig;
use crate::utils::SimError;

/// Where the texture loads stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadProgress {
    Pending,
    Ready,
    Failed { path: String, reason: String },
}

impl LoadProgress {
    pub fn of(path: &str, state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => LoadProgress::Ready,
            LoadState::Failed(err) => LoadProgress::Failed {
                path: path.to_string(),
                reason: err.to_string(),
            },
            LoadState::NotLoaded | LoadState::Loading => LoadProgress::Pending,
        }
    }

    /// A failure wins over pending, pending wins over ready.
    pub fn combine(self, other: LoadProgress) -> LoadProgress {
        match (self, other) {
            (failed @ LoadProgress::Failed { .. }, _) | (_, failed @ LoadProgress::Failed { .. }) => {
                failed
            }
            (LoadProgress::Pending, _) | (_, LoadProgress::Pending) => LoadProgress::Pending,
            (LoadProgress::Ready, LoadProgress::Ready) => LoadProgress::Ready,
        }
    }

    pub fn into_error(self) -> Option<SimError> {
        match self {
            LoadProgress::Failed { path, reason } => Some(SimError::AssetLoad { path, reason }),
            _ => None,
        }
    }
}

/// Handles for the map and aircraft images, requested once at startup.
#[derive(Resource, Debug, Clone)]
pub struct TextureLoader {
    pub map: Handle<Image>,
    pub aircraft: Handle<Image>,
    config: AssetConfig,
}

impl TextureLoader {
    pub fn request(asset_server: &AssetServer, config: &AssetConfig) -> Self {
        info!(
            "Loading textures '{}' and '{}'",
            config.map_image, config.aircraft_image
        );
        Self {
            map: asset_server.load(config.map_image.clone()),
            aircraft: asset_server.load(config.aircraft_image.clone()),
            config: config.clone(),
        }
    }

    pub fn progress(&self, asset_server: &AssetServer) -> LoadProgress {
        let map = LoadProgress::of(&self.config.map_image, &asset_server.load_state(self.map.id()));
        let aircraft = LoadProgress::of(
            &self.config.aircraft_image,
            &asset_server.load_state(self.aircraft.id()),
        );
        map.combine(aircraft)
    }
}

/// First error raised while starting up; rendering never begins once set.
#[derive(Resource, Debug)]
pub struct InitError(pub SimError);
