mod controller;
mod flight;
mod hud;
mod lifecycle;
mod loading;
mod render;

pub use controller::{keyboard_input_system, pause_toggle_system};
pub use flight::{pause_on_landing_system, simulate_flight_system};
pub use hud::{spawn_hud, update_hud_system};
pub use lifecycle::{
    apply_stop_request, start_render_loop, teardown_on_exit, teardown_on_stop, SceneTeardown,
};
pub use loading::{check_textures, compile_programs, report_init_error, request_textures};
pub use render::{
    compose_frame_system, draw_frame_system, layer_for, minimap_viewport_system, spawn_scene,
    PassAssets, MAIN_LAYER, MINIMAP_LAYER,
};
