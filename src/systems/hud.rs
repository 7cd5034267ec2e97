use bevy::prelude::*;

use crate::components::HudText;
use crate::resources::{HudReadout, SnapshotFeed};

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Waiting for telemetry"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));
}

/// Show the newest snapshot published since the last frame.
pub fn update_hud_system(mut feed: ResMut<SnapshotFeed>, mut texts: Query<&mut Text, With<HudText>>) {
    let Some(snapshot) = feed.drain_latest() else {
        return;
    };
    let readout = HudReadout::from_snapshot(&snapshot).to_string();

    for mut text in texts.iter_mut() {
        if text.0 != readout {
            text.0.clone_from(&readout);
        }
    }
}
