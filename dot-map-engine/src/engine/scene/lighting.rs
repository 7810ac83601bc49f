use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
};

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(DIRECTIONAL_LIGHT_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
