use bevy::{prelude::*, sprite::Material2dPlugin};

use crate::rendering::{LineMaterial, MapMaterial, ProgramCache, SolidColorMaterial};
use crate::systems::compile_programs;

/// The three shader programs and the materials drawing with them.
pub struct ShaderPlugin;

impl Plugin for ShaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgramCache>()
            .add_plugins((
                Material2dPlugin::<MapMaterial>::default(),
                Material2dPlugin::<SolidColorMaterial>::default(),
                Material2dPlugin::<LineMaterial>::default(),
            ))
            .add_systems(Startup, compile_programs);
    }
}
