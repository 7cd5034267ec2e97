#[path = "../common/mod.rs"]
mod common;

mod config;
mod draw;
mod flight_scenarios;
mod lifecycle;
