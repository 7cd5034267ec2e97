mod geometry;
mod materials;
mod programs;
mod renderer;
mod types;

pub use geometry::{edge_arrow, heading_marker, square, textured_quad};
pub use materials::{linear, LineMaterial, MapMaterial, MapParams, SolidColorMaterial};
pub use programs::{
    ProgramCache, ProgramSource, COLOR_SHADER_HANDLE, LINE_SHADER_HANDLE, MAP_SHADER_HANDLE,
};
pub use renderer::{
    PassHandles, PassMaterial, SceneRenderer, ARROW_COLOR, CHECKPOINT_COLOR, MARKER_COLOR,
};
pub use types::{DrawPass, Frame, MapUniforms, PassKind, PassTarget, Primitive, TextureSlot};
