use bevy::prelude::*;
use std::collections::HashMap;

use super::geometry::{edge_arrow, heading_marker, square};
use super::materials::{LineMaterial, MapMaterial, SolidColorMaterial};
use super::types::{DrawPass, Frame, MapUniforms, PassKind, Primitive, TextureSlot};
use crate::components::speed_color;
use crate::resources::{in_viewport, FlightSession, MiniMapProjector, RenderConfig, ViewTransform};
use crate::utils::Result;

pub const CHECKPOINT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const ARROW_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.5, 0.0, 1.0];

#[derive(Debug, Clone)]
pub enum PassMaterial {
    Map(Handle<MapMaterial>),
    Solid(Handle<SolidColorMaterial>),
    Line(Handle<LineMaterial>),
}

/// GPU side of one pass: the entity drawing it and the assets it owns.
#[derive(Debug, Clone)]
pub struct PassHandles {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub material: PassMaterial,
}

/// Builds the frame from the flight session and keeps one entity per pass
/// to draw it with.
#[derive(Resource, Debug, Default)]
pub struct SceneRenderer {
    frame: Frame,
    passes: HashMap<PassKind, PassHandles>,
}

impl SceneRenderer {
    /// Describe everything to draw for the current state of `session`.
    pub fn compose(session: &FlightSession, config: &RenderConfig) -> Frame {
        let mut frame = Frame::new(config.clear_color);
        let state = session.model().state();
        let projector = session.projector();

        frame.push(DrawPass::new(
            PassKind::WorldMap,
            Primitive::TexturedQuad {
                texture: TextureSlot::Map,
                uniforms: MapUniforms {
                    angle: state.heading as f32,
                    scale: state.zoom as f32,
                    offset: [state.offset.x as f32, state.offset.y as f32],
                    grayscale: false,
                },
                half_extent: 1.0,
            },
        ));

        let trail = session.trail();
        if trail.len() >= 2 {
            let projected: Result<Vec<[f32; 2]>> = trail
                .iter()
                .map(|point| {
                    projector
                        .world_to_view(point.u, point.v)
                        .map(|view| [view.x as f32, view.y as f32])
                })
                .collect();
            match projected {
                Ok(vertices) => frame.push(DrawPass::new(
                    PassKind::Trail,
                    Primitive::LineStrip {
                        vertices,
                        colors: trail.iter().map(|point| speed_color(point.speed)).collect(),
                    },
                )),
                Err(err) => debug!("Skipping trail: {}", err),
            }
        }

        frame.push(DrawPass::new(
            PassKind::Aircraft,
            Primitive::TexturedQuad {
                texture: TextureSlot::Aircraft,
                uniforms: MapUniforms::identity(false),
                half_extent: config.aircraft_half_extent,
            },
        ));

        if let Some(checkpoint) = session.waypoints().current() {
            match projector.world_to_view(checkpoint.u, checkpoint.v) {
                Ok(view) if in_viewport(&view) => frame.push(DrawPass::new(
                    PassKind::Checkpoint,
                    Primitive::Triangles {
                        vertices: square([view.x as f32, view.y as f32], config.checkpoint_size),
                        color: CHECKPOINT_COLOR,
                    },
                )),
                Ok(view) => {
                    if let Some(vertices) = edge_arrow(view, config.arrow_size) {
                        frame.push(DrawPass::new(
                            PassKind::Checkpoint,
                            Primitive::Triangles {
                                vertices,
                                color: ARROW_COLOR,
                            },
                        ));
                    }
                }
                Err(err) => debug!("Skipping checkpoint marker: {}", err),
            }
        }

        frame.push(DrawPass::new(
            PassKind::MiniMap,
            Primitive::TexturedQuad {
                texture: TextureSlot::Map,
                uniforms: MapUniforms::identity(true),
                half_extent: 1.0,
            },
        ));

        let position = state.map_position();
        frame.push(DrawPass::new(
            PassKind::MiniMapAircraft,
            Primitive::Triangles {
                vertices: heading_marker(
                    MiniMapProjector.project(position.x, position.y),
                    state.heading,
                    config.minimap_marker_size,
                ),
                color: MARKER_COLOR,
            },
        ));

        let waypoints = session
            .waypoints()
            .route()
            .iter()
            .flat_map(|checkpoint| {
                let view = MiniMapProjector.project(checkpoint.u, checkpoint.v);
                square([view.x as f32, view.y as f32], config.checkpoint_size)
            })
            .collect::<Vec<_>>();
        if !waypoints.is_empty() {
            frame.push(DrawPass::new(
                PassKind::MiniMapWaypoints,
                Primitive::Triangles {
                    vertices: waypoints,
                    color: CHECKPOINT_COLOR,
                },
            ));
        }

        frame
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    pub fn register(&mut self, kind: PassKind, handles: PassHandles) {
        self.passes.insert(kind, handles);
    }

    pub fn pass(&self, kind: PassKind) -> Option<&PassHandles> {
        self.passes.get(&kind)
    }

    pub fn has_passes(&self) -> bool {
        !self.passes.is_empty()
    }

    /// Forget every pass and hand back the entities to despawn. Dropping the
    /// strong handles releases their meshes and materials.
    pub fn release(&mut self) -> Vec<Entity> {
        self.frame = Frame::default();
        self.passes.drain().map(|(_, handles)| handles.entity).collect()
    }
}
