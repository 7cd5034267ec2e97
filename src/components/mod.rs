pub mod flight;
mod render;
mod trail;
mod waypoints;

pub use flight::{
    ControlConfig, FlightConfig, FlightModel, FlightPhase, FlightSnapshot, FlightState,
    LandingConfig, StartConfig, TakeoffConfig,
};
pub use render::{HudText, MainCamera, MiniMapCamera, ScenePass};
pub use trail::{speed_color, FlightTrail, PathPoint};
pub use waypoints::{default_route, Checkpoint, WaypointTracker};
