use nalgebra::Vector2;

use super::traits::ViewTransform;
use crate::components::FlightState;
use crate::utils::{rotate, Result, SimError};

/// Affine map `view → map` written as
/// `u = A·x + B·y + C`, `v = D·x + E·y + F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineCoefficients {
    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }
}

/// Main view camera: the same rotation, zoom and pan the map sampling
/// shader applies, plus its inverse for placing overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjector {
    pub heading: f64,
    pub zoom: f64,
    pub offset: Vector2<f64>,
}

impl ViewProjector {
    pub fn new(heading: f64, zoom: f64, offset: Vector2<f64>) -> Self {
        Self {
            heading,
            zoom,
            offset,
        }
    }

    pub fn from_state(state: &FlightState) -> Self {
        Self::new(state.heading, state.zoom, state.offset)
    }

    /// Map position sampled at texture coordinate `tc ∈ [0, 1]²`.
    pub fn texcoord_to_map(&self, tc: Vector2<f64>) -> Vector2<f64> {
        let centred = tc - Vector2::new(0.5, 0.5);
        let rotated = rotate(centred, self.heading) * self.zoom;
        rotated + Vector2::new(0.5, 0.5) + self.offset
    }

    /// View position to map position.
    pub fn forward(&self, view: Vector2<f64>) -> Vector2<f64> {
        self.texcoord_to_map((view + Vector2::new(1.0, 1.0)) / 2.0)
    }

    /// Coefficients of [`Self::forward`], recovered from the images of
    /// three texture corners.
    pub fn coefficients(&self) -> AffineCoefficients {
        let v00 = self.texcoord_to_map(Vector2::new(0.0, 0.0));
        let v10 = self.texcoord_to_map(Vector2::new(1.0, 0.0));
        let v01 = self.texcoord_to_map(Vector2::new(0.0, 1.0));

        let a = (v10.x - v00.x) / 2.0;
        let b = (v01.x - v00.x) / 2.0;
        let d = (v10.y - v00.y) / 2.0;
        let e = (v01.y - v00.y) / 2.0;
        AffineCoefficients {
            a,
            b,
            c: v00.x + a + b,
            d,
            e,
            f: v00.y + d + e,
        }
    }
}

impl ViewTransform for ViewProjector {
    fn world_to_view(&self, u: f64, v: f64) -> Result<Vector2<f64>> {
        let AffineCoefficients { a, b, c, d, e, f } = self.coefficients();
        let delta = a * e - b * d;
        if delta == 0.0 || !delta.is_finite() {
            return Err(SimError::DegenerateProjection(delta));
        }

        Ok(Vector2::new(
            (e * (u - c) - b * (v - f)) / delta,
            (-d * (u - c) + a * (v - f)) / delta,
        ))
    }
}

/// Whether a projected point lies inside the viewport.
pub fn in_viewport(view: &Vector2<f64>) -> bool {
    (-1.0..=1.0).contains(&view.x) && (-1.0..=1.0).contains(&view.y)
}

/// Mini-map camera: the whole map, unrotated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MiniMapProjector;

impl MiniMapProjector {
    pub fn project(&self, u: f64, v: f64) -> Vector2<f64> {
        Vector2::new(2.0 * u - 1.0, 2.0 * v - 1.0)
    }
}

impl ViewTransform for MiniMapProjector {
    fn world_to_view(&self, u: f64, v: f64) -> Result<Vector2<f64>> {
        Ok(self.project(u, v))
    }
}
