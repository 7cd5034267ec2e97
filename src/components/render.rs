use bevy::prelude::*;

use crate::rendering::PassKind;

/// Entity drawing one pass of the scene.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePass(pub PassKind);

#[derive(Component, Debug, Default)]
pub struct MainCamera;

#[derive(Component, Debug, Default)]
pub struct MiniMapCamera;

#[derive(Component, Debug, Default)]
pub struct HudText;
