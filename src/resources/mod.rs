mod assets;
pub mod config;
mod hud;
mod input;
mod render_loop;
mod session;
mod transformations;

pub use assets::{InitError, LoadProgress, TextureLoader};
pub use config::{AssetConfig, RenderConfig, RouteConfig, SimulationConfig};
pub use hud::{CompassPoint, HudReadout, SnapshotFeed};
pub use input::{Control, InputSnapshot, InputState, KeyBindings};
pub use render_loop::RenderLoop;
pub use session::FlightSession;
pub use transformations::{
    in_viewport, AffineCoefficients, MiniMapProjector, ViewProjector, ViewTransform,
};
