use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::utils::constants::{DEFAULT_TRAIL_CAPACITY, SPEED_COLORS, SPEED_STOPS};

/// One trail sample: map-space position and the speed flown there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub u: f64,
    pub v: f64,
    pub speed: f64,
}

/// Bounded history of where the aircraft has been. The oldest sample is
/// evicted once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct FlightTrail {
    points: VecDeque<PathPoint>,
    capacity: usize,
}

impl Default for FlightTrail {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TRAIL_CAPACITY)
    }
}

impl FlightTrail {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn record(&mut self, point: PathPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Trail color for a given speed: blue, green, yellow, red at the speed
/// stops, linearly interpolated in between and clamped outside.
pub fn speed_color(speed: f64) -> [f32; 4] {
    if speed <= SPEED_STOPS[0] {
        return with_alpha(SPEED_COLORS[0]);
    }

    for i in 1..SPEED_STOPS.len() {
        if speed <= SPEED_STOPS[i] {
            let t = ((speed - SPEED_STOPS[i - 1]) / (SPEED_STOPS[i] - SPEED_STOPS[i - 1])) as f32;
            let (from, to) = (SPEED_COLORS[i - 1], SPEED_COLORS[i]);
            return [
                from[0] * (1.0 - t) + to[0] * t,
                from[1] * (1.0 - t) + to[1] * t,
                from[2] * (1.0 - t) + to[2] * t,
                1.0,
            ];
        }
    }

    with_alpha(SPEED_COLORS[SPEED_COLORS.len() - 1])
}

fn with_alpha(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}
