mod projection;
mod traits;

pub use projection::{in_viewport, AffineCoefficients, MiniMapProjector, ViewProjector};
pub use traits::ViewTransform;
