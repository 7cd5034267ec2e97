mod assets;
mod flight;
mod hud;
mod render_loop;
mod scene;
mod shaders;
mod staging;

pub use assets::TextureLoadingPlugin;
pub use flight::FlightPlugin;
pub use hud::HudPlugin;
pub use render_loop::RenderLoopPlugin;
pub use scene::ScenePlugin;
pub use shaders::ShaderPlugin;
pub use staging::{render_loop_active, AppState, FrameSet, StagingPlugin};

use bevy::app::{PluginGroup, PluginGroupBuilder};

/// Everything the flight demo needs on top of bevy's `DefaultPlugins`.
pub struct MapFlyerPlugins;

impl PluginGroup for MapFlyerPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(StagingPlugin)
            .add(FlightPlugin)
            .add(RenderLoopPlugin)
            .add(ShaderPlugin)
            .add(TextureLoadingPlugin)
            .add(ScenePlugin)
            .add(HudPlugin)
    }
}
