pub mod asset;
pub mod render;
pub mod route;
pub mod simulation;

pub use asset::AssetConfig;
pub use render::RenderConfig;
pub use route::RouteConfig;
pub use simulation::SimulationConfig;
