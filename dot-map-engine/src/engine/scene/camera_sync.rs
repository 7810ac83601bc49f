use bevy::prelude::*;

use crate::engine::camera::MapCamera;
use crate::engine::context::DotMapContext;

#[derive(Component)]
pub struct MainCamera;

pub fn spawn_map_camera(commands: &mut Commands, camera: &MapCamera) {
    commands.spawn((
        Camera3d::default(),
        camera.transform(),
        Projection::Perspective(camera.perspective()),
        MainCamera,
    ));
}

pub fn sync_map_camera(
    context: Res<DotMapContext>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<MainCamera>>,
) {
    if !context.is_changed() {
        return;
    }
    let camera = context.camera();
    for (mut transform, mut projection) in &mut cameras {
        let target = camera.transform();
        if *transform != target {
            *transform = target;
        }
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.fov = camera.fov_y;
            perspective.near = camera.near;
            perspective.far = camera.far;
        } else {
            *projection = Projection::Perspective(camera.perspective());
        }
    }
}
