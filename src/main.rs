use bevy::{prelude::*, window::WindowResolution};
use std::env;

use mapflyer::{plugins::MapFlyerPlugins, resources::SimulationConfig};

fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config '{}': {}", path, err);
                std::process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    let render = &config.render;
    let window = Window {
        title: "Map Flyer".to_string(),
        resolution: WindowResolution::new(render.screen_width as f32, render.screen_height as f32),
        resizable: false,
        present_mode: if render.vsync {
            bevy::window::PresentMode::AutoVsync
        } else {
            bevy::window::PresentMode::AutoNoVsync
        },
        ..default()
    };

    App::new()
        .insert_resource(config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(MapFlyerPlugins)
        .run();
}
