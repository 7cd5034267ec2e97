use nalgebra::{Rotation2, Vector2};
use std::f64::consts::{PI, TAU};

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Signed correction that turns `current` onto `target` the short way.
///
/// The raw difference is reduced into `[0, 2π)` and then folded into
/// `(-π, π]`, so the magnitude never exceeds π.
pub fn shortest_angle_correction(current: f64, target: f64) -> f64 {
    let delta = (target - current).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Move `value` a fraction `rate` of the way towards `target`.
#[inline]
pub fn approach(value: f64, target: f64, rate: f64) -> f64 {
    value + (target - value) * rate
}

/// Rotate a 2D point about the origin.
#[inline]
pub fn rotate(point: Vector2<f64>, angle: f64) -> Vector2<f64> {
    Rotation2::new(angle) * point
}
