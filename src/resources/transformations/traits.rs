use nalgebra::Vector2;

use crate::utils::Result;

/// Projection from map space (`u, v ∈ [0, 1]`) into a viewport's
/// normalized coordinates (`[-1, 1]²` when visible).
pub trait ViewTransform {
    fn world_to_view(&self, u: f64, v: f64) -> Result<Vector2<f64>>;
}
