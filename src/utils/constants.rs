use std::f64::consts::PI;

// Takeoff ramp
pub const TAKEOFF_TICKS: u32 = 2000;
pub const TAKEOFF_SPEED_GAIN: f64 = 0.0001; // total speed gained over the ramp
pub const TAKEOFF_ZOOM_START_TICK: u32 = 800;
pub const TAKEOFF_ZOOM_CAP: f64 = 0.15;
pub const TAKEOFF_ZOOM_STEPS: f64 = 1200.0;
pub const TAKEOFF_TURN_START_TICK: u32 = 1000;
pub const TAKEOFF_TURN_TOTAL: f64 = 1.3; // total heading change after the turn starts

// Manual control
pub const TURN_STEP: f64 = 0.008; // rad/tick
pub const SPEED_STEP: f64 = 0.0003 / 300.0;
pub const MAX_SPEED: f64 = 0.0003 * 5.0;
pub const MIN_SPEED: f64 = 0.000005;
pub const ZOOM_FACTOR: f64 = 1.02;
pub const MIN_ZOOM: f64 = 0.001;
pub const MAX_ZOOM: f64 = 4.0;

// Landing sequence
pub const LANDING_SPOT: [f64; 2] = [0.501, 0.3025]; // map space
pub const LANDING_RATE: f64 = 0.02;
pub const LANDING_ZOOM_STEP: f64 = 0.0005;
pub const GROUND_ZOOM: f64 = 0.009;
pub const LANDING_HEADING: f64 = 3.0 * PI / 2.0;

// Map bounds for the pan offset
pub const OFFSET_LIMIT: f64 = 0.494;

// Waypoint proximity, per axis, map space
pub const CHECKPOINT_TOLERANCE: f64 = 0.01;

// Start state of the demo flight
pub const START_HEADING: f64 = 2.23;
pub const START_ZOOM: f64 = GROUND_ZOOM;
pub const START_OFFSET: [f64; 2] = [0.229, 0.31117];

// Trail gradient stops (speed) and their colors
pub const SPEED_STOPS: [f64; 4] = [0.0, 0.0003, 0.0009, 0.0012];
pub const SPEED_COLORS: [[f32; 3]; 4] = [
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
];
pub const DEFAULT_TRAIL_CAPACITY: usize = 20_000;

// Overlay geometry, view space
pub const AIRCRAFT_HALF_EXTENT: f32 = 0.1;
pub const CHECKPOINT_SIZE: f32 = 0.04;
pub const ARROW_SIZE: f32 = 0.05;
pub const MINIMAP_MARKER_SIZE: f32 = 0.05;
pub const ARROW_EPSILON: f64 = 0.00001;
