use bevy::{
    ecs::system::SystemParam,
    prelude::*,
    render::camera::Viewport,
    window::PrimaryWindow,
};

use crate::components::{MainCamera, MiniMapCamera, ScenePass};
use crate::rendering::{
    linear, textured_quad, DrawPass, LineMaterial, MapMaterial, MapParams, PassHandles,
    PassKind, PassMaterial, Primitive, SceneRenderer, SolidColorMaterial, TextureSlot,
};
use crate::resources::{FlightSession, RenderLoop, SimulationConfig, TextureLoader};

pub fn compose_frame_system(
    session: Res<FlightSession>,
    config: Res<SimulationConfig>,
    mut renderer: ResMut<SceneRenderer>,
) {
    renderer.set_frame(SceneRenderer::compose(&session, &config.render));
}

/// Mesh and material storage the passes write into.
#[derive(SystemParam)]
pub struct PassAssets<'w> {
    meshes: ResMut<'w, Assets<Mesh>>,
    map_materials: ResMut<'w, Assets<MapMaterial>>,
    solid_materials: ResMut<'w, Assets<SolidColorMaterial>>,
    line_materials: ResMut<'w, Assets<LineMaterial>>,
}

impl PassAssets<'_> {
    /// Write one pass into its mesh and material. Returns `false` when the
    /// pass cannot be drawn this frame.
    fn apply(&mut self, pass: &DrawPass, handles: &PassHandles, textures: &TextureLoader) -> bool {
        let Some(mesh) = self.meshes.get_mut(&handles.mesh) else {
            trace!("{:?} mesh not ready", pass.kind);
            return false;
        };

        match (&pass.primitive, &handles.material) {
            (
                Primitive::TexturedQuad {
                    texture,
                    uniforms,
                    half_extent,
                },
                PassMaterial::Map(handle),
            ) => {
                let Some(material) = self.map_materials.get_mut(handle) else {
                    trace!("{:?} material not ready", pass.kind);
                    return false;
                };
                let (positions, uvs) = textured_quad(*half_extent);
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
                mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
                material.params = MapParams::from(*uniforms);
                let texture = match texture {
                    TextureSlot::Map => &textures.map,
                    TextureSlot::Aircraft => &textures.aircraft,
                };
                if material.texture != *texture {
                    material.texture = texture.clone();
                }
            }
            (Primitive::Triangles { vertices, color }, PassMaterial::Solid(handle)) => {
                let Some(material) = self.solid_materials.get_mut(handle) else {
                    trace!("{:?} material not ready", pass.kind);
                    return false;
                };
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, to_positions(vertices));
                material.color = linear(*color);
            }
            (Primitive::LineStrip { vertices, colors }, PassMaterial::Line(handle)) => {
                if self.line_materials.get(handle).is_none() {
                    trace!("{:?} material not ready", pass.kind);
                    return false;
                }
                let colors: Vec<[f32; 4]> = colors
                    .iter()
                    .map(|color| {
                        let c = linear(*color);
                        [c.red, c.green, c.blue, c.alpha]
                    })
                    .collect();
                mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, to_positions(vertices));
                mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
            }
            _ => {
                warn!("{:?} pass does not match its material", pass.kind);
                return false;
            }
        }
        true
    }
}

fn to_positions(vertices: &[[f32; 2]]) -> Vec<[f32; 3]> {
    vertices.iter().map(|[x, y]| [*x, *y, 0.0]).collect()
}

/// Apply the composed frame: show and update the passes it contains, hide
/// the rest.
pub fn draw_frame_system(
    renderer: Res<SceneRenderer>,
    textures: Res<TextureLoader>,
    mut assets: PassAssets,
    mut passes: Query<&mut Visibility, With<ScenePass>>,
    mut main_camera: Query<&mut Camera, With<MainCamera>>,
    mut render_loop: ResMut<RenderLoop>,
) {
    let frame = renderer.frame();

    for kind in PassKind::ORDER {
        let Some(handles) = renderer.pass(kind) else {
            continue;
        };
        let Ok(mut visibility) = passes.get_mut(handles.entity) else {
            continue;
        };

        let drawn = frame
            .get(kind)
            .is_some_and(|pass| assets.apply(pass, handles, &textures));
        visibility.set_if_neq(if drawn {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }

    let [r, g, b] = frame.clear_color;
    let clear = Color::srgb(r, g, b);
    for mut camera in main_camera.iter_mut() {
        if !matches!(camera.clear_color, ClearColorConfig::Custom(current) if current == clear) {
            camera.clear_color = ClearColorConfig::Custom(clear);
        }
    }

    render_loop.count_frame();
}

/// Keep the mini-map camera pinned to the bottom-left corner of the window.
pub fn minimap_viewport_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<SimulationConfig>,
    mut cameras: Query<&mut Camera, With<MiniMapCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (width, height) = (window.physical_width(), window.physical_height());
    if width == 0 || height == 0 {
        return;
    }

    let size = (config.render.minimap_size as f32 * window.scale_factor()).round() as u32;
    let size = size.clamp(1, width.min(height));
    let position = UVec2::new(0, height - size);

    for mut camera in cameras.iter_mut() {
        let current = camera
            .viewport
            .as_ref()
            .map(|viewport| (viewport.physical_position, viewport.physical_size));
        if current != Some((position, UVec2::splat(size))) {
            camera.viewport = Some(Viewport {
                physical_position: position,
                physical_size: UVec2::splat(size),
                ..default()
            });
        }
    }
}
