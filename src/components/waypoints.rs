use bevy::log::info;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::constants::CHECKPOINT_TOLERANCE;

/// Immutable target location in map space, `u, v ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub u: f64,
    pub v: f64,
}

impl Checkpoint {
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.u, self.v)
    }

    /// Both axes must be strictly within `tolerance` of `position`.
    pub fn is_reached_from(&self, position: Vector2<f64>, tolerance: f64) -> bool {
        (self.u - position.x).abs() < tolerance && (self.v - position.y).abs() < tolerance
    }

    pub fn in_map_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.u) && (0.0..=1.0).contains(&self.v)
    }
}

/// The demo route in route order. Consumption pops from the end, so
/// `(0.5, 0.9)` is the first target and `(0.505, 0.297)` the last.
pub fn default_route() -> Vec<Checkpoint> {
    vec![
        Checkpoint::new(0.505, 0.297),
        Checkpoint::new(0.417, 0.291),
        Checkpoint::new(0.318, 0.292),
        Checkpoint::new(0.3, 0.4),
        Checkpoint::new(0.417, 0.542),
        Checkpoint::new(0.355, 0.735),
        Checkpoint::new(0.289, 0.816),
        Checkpoint::new(0.285, 0.928),
        Checkpoint::new(0.335, 0.936),
        Checkpoint::new(0.5, 0.9),
    ]
}

/// Owns the route and the cursor onto the current checkpoint.
///
/// The route itself is never mutated: both the main view and the mini-map
/// read it, while `remaining` counts the entries that have not been popped
/// into `current` yet.
#[derive(Debug, Clone)]
pub struct WaypointTracker {
    route: Vec<Checkpoint>,
    remaining: usize,
    current: Option<usize>,
    complete: bool,
    tolerance: f64,
}

impl Default for WaypointTracker {
    fn default() -> Self {
        Self::new(default_route())
    }
}

impl WaypointTracker {
    pub fn new(route: Vec<Checkpoint>) -> Self {
        Self::with_tolerance(route, CHECKPOINT_TOLERANCE)
    }

    pub fn with_tolerance(route: Vec<Checkpoint>, tolerance: f64) -> Self {
        let remaining = route.len();
        let mut tracker = Self {
            route,
            remaining,
            current: None,
            complete: false,
            tolerance,
        };
        tracker.pop_next();
        tracker
    }

    /// Pop the next checkpoint when the aircraft, at map position
    /// `(0.5 + offset_x, 0.5 + offset_y)`, is close enough to the current one.
    /// Returns whether the current checkpoint changed.
    pub fn advance_if_reached(&mut self, offset_x: f64, offset_y: f64) -> bool {
        let Some(current) = self.current() else {
            return false;
        };

        let position = Vector2::new(0.5 + offset_x, 0.5 + offset_y);
        if !current.is_reached_from(position, self.tolerance) {
            return false;
        }

        info!("Reached checkpoint ({:.3}, {:.3})", current.u, current.v);
        self.pop_next();
        true
    }

    pub fn is_route_complete(&self) -> bool {
        self.complete
    }

    pub fn current(&self) -> Option<Checkpoint> {
        self.current.map(|index| self.route[index])
    }

    /// Every waypoint on the route, visited or not.
    pub fn route(&self) -> &[Checkpoint] {
        &self.route
    }

    /// Checkpoints still queued behind the current one.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn pop_next(&mut self) {
        if self.remaining == 0 {
            if !self.complete {
                info!("Route complete");
            }
            self.current = None;
            self.complete = true;
        } else {
            self.remaining -= 1;
            self.current = Some(self.remaining);
        }
    }
}
