use bevy::{
    prelude::*,
    render::{
        mesh::PrimitiveTopology,
        render_asset::RenderAssetUsages,
        view::{NoFrustumCulling, RenderLayers},
    },
};

use crate::components::{MainCamera, MiniMapCamera, ScenePass};
use crate::rendering::{
    textured_quad, LineMaterial, MapMaterial, MapParams, PassHandles, PassKind, PassMaterial,
    PassTarget, SceneRenderer, SolidColorMaterial,
};
use crate::resources::{SimulationConfig, TextureLoader};

pub const MAIN_LAYER: usize = 0;
pub const MINIMAP_LAYER: usize = 1;

pub fn layer_for(target: PassTarget) -> RenderLayers {
    match target {
        PassTarget::Main => RenderLayers::layer(MAIN_LAYER),
        PassTarget::MiniMap => RenderLayers::layer(MINIMAP_LAYER),
    }
}

/// Spawn both cameras and one hidden entity per pass.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut map_materials: ResMut<Assets<MapMaterial>>,
    mut solid_materials: ResMut<Assets<SolidColorMaterial>>,
    mut line_materials: ResMut<Assets<LineMaterial>>,
    mut renderer: ResMut<SceneRenderer>,
    textures: Res<TextureLoader>,
    config: Res<SimulationConfig>,
) {
    if renderer.has_passes() {
        warn!("Scene already spawned");
        return;
    }

    let [r, g, b] = config.render.clear_color;
    commands.spawn((
        Camera2d,
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::srgb(r, g, b)),
            ..default()
        },
        layer_for(PassTarget::Main),
        MainCamera,
        bevy::ui::IsDefaultUiCamera,
    ));
    // viewport is placed by the mini-map viewport system once the window is known
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        layer_for(PassTarget::MiniMap),
        MiniMapCamera,
    ));

    for kind in PassKind::ORDER {
        let (mesh, material) = match kind {
            PassKind::WorldMap | PassKind::Aircraft | PassKind::MiniMap => {
                let texture = match kind {
                    PassKind::Aircraft => textures.aircraft.clone(),
                    _ => textures.map.clone(),
                };
                let material = map_materials.add(MapMaterial {
                    params: MapParams::default(),
                    texture,
                });
                (quad_mesh(), PassMaterial::Map(material))
            }
            PassKind::Trail => {
                let mut mesh = placeholder_mesh(PrimitiveTopology::LineStrip, 2);
                mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vec![[1.0f32; 4]; 2]);
                (mesh, PassMaterial::Line(line_materials.add(LineMaterial::default())))
            }
            PassKind::Checkpoint | PassKind::MiniMapAircraft | PassKind::MiniMapWaypoints => {
                let material = solid_materials.add(SolidColorMaterial {
                    color: LinearRgba::NONE,
                });
                (
                    placeholder_mesh(PrimitiveTopology::TriangleList, 3),
                    PassMaterial::Solid(material),
                )
            }
        };

        let mesh = meshes.add(mesh);
        let mut entity = commands.spawn((
            ScenePass(kind),
            Mesh2d(mesh.clone()),
            Transform::from_xyz(0.0, 0.0, kind.depth()),
            Visibility::Hidden,
            NoFrustumCulling,
            layer_for(kind.target()),
            Name::new(format!("{:?} pass", kind)),
        ));
        match &material {
            PassMaterial::Map(handle) => entity.insert(MeshMaterial2d(handle.clone())),
            PassMaterial::Solid(handle) => entity.insert(MeshMaterial2d(handle.clone())),
            PassMaterial::Line(handle) => entity.insert(MeshMaterial2d(handle.clone())),
        };

        renderer.register(
            kind,
            PassHandles {
                entity: entity.id(),
                mesh,
                material,
            },
        );
    }
    info!("Spawned {} scene passes", PassKind::ORDER.len());
}

fn quad_mesh() -> Mesh {
    let (positions, uvs) = textured_quad(1.0);
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
}

/// Collapsed geometry standing in until the first frame is applied.
fn placeholder_mesh(topology: PrimitiveTopology, vertices: usize) -> Mesh {
    Mesh::new(topology, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0f32; 3]; vertices])
}
