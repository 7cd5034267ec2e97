mod draw;
mod setup;

pub use draw::{compose_frame_system, draw_frame_system, minimap_viewport_system, PassAssets};
pub use setup::{layer_for, spawn_scene, MAIN_LAYER, MINIMAP_LAYER};
