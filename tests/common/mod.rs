#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{assert_offset_within, assert_phase, assert_snapshot_matches};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
