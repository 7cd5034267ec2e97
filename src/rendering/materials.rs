use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
    sprite::{AlphaMode2d, Material2d},
};

use super::programs::{COLOR_SHADER_HANDLE, LINE_SHADER_HANDLE, MAP_SHADER_HANDLE};
use super::types::MapUniforms;

#[derive(Debug, Clone, Copy, Default, ShaderType)]
pub struct MapParams {
    pub angle: f32,
    pub scale: f32,
    pub offset: Vec2,
    pub grayscale: u32,
}

impl From<MapUniforms> for MapParams {
    fn from(uniforms: MapUniforms) -> Self {
        Self {
            angle: uniforms.angle,
            scale: uniforms.scale,
            offset: Vec2::from(uniforms.offset),
            grayscale: uniforms.grayscale as u32,
        }
    }
}

/// Samples a texture through the rotate/zoom/pan transform of the map view.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct MapMaterial {
    #[uniform(0)]
    pub params: MapParams,

    #[texture(1)]
    #[sampler(2)]
    pub texture: Handle<Image>,
}

impl Material2d for MapMaterial {
    fn vertex_shader() -> ShaderRef {
        MAP_SHADER_HANDLE.into()
    }

    fn fragment_shader() -> ShaderRef {
        MAP_SHADER_HANDLE.into()
    }

    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SolidColorMaterial {
    #[uniform(0)]
    pub color: LinearRgba,
}

impl Material2d for SolidColorMaterial {
    fn vertex_shader() -> ShaderRef {
        COLOR_SHADER_HANDLE.into()
    }

    fn fragment_shader() -> ShaderRef {
        COLOR_SHADER_HANDLE.into()
    }

    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

/// Per-vertex colored lines; `tint` multiplies the vertex color.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct LineMaterial {
    #[uniform(0)]
    pub tint: LinearRgba,
}

impl Default for LineMaterial {
    fn default() -> Self {
        Self {
            tint: LinearRgba::WHITE,
        }
    }
}

impl Material2d for LineMaterial {
    fn vertex_shader() -> ShaderRef {
        LINE_SHADER_HANDLE.into()
    }

    fn fragment_shader() -> ShaderRef {
        LINE_SHADER_HANDLE.into()
    }

    fn alpha_mode(&self) -> AlphaMode2d {
        AlphaMode2d::Blend
    }
}

/// Colors are authored in sRGB; shaders work in linear space.
pub fn linear(color: [f32; 4]) -> LinearRgba {
    Color::srgba(color[0], color[1], color[2], color[3]).to_linear()
}
