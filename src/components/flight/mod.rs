mod config;
mod model;
mod phase;
mod state;

pub use config::{ControlConfig, FlightConfig, LandingConfig, StartConfig, TakeoffConfig};
pub use model::FlightModel;
pub use phase::FlightPhase;
pub use state::{FlightSnapshot, FlightState};
