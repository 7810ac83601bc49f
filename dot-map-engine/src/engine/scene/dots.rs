use std::collections::HashMap;

use bevy::prelude::*;
use constants::map_layout::DOT_RESOLUTION;

use crate::engine::surface::DotInstances;

#[cfg(test)]
#[path = "dots_test.rs"]
mod dots_test;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotMarker(pub usize);

/// Shared marker mesh plus one material per distinct colour.
#[derive(Resource, Default)]
pub struct DotMeshCache {
    mesh: Option<(Handle<Mesh>, f32, f32)>,
    materials: HashMap<[u8; 4], Handle<StandardMaterial>>,
}

impl DotMeshCache {
    fn mesh_for(&mut self, meshes: &mut Assets<Mesh>, radius: f32, height: f32) -> Handle<Mesh> {
        if let Some((handle, cached_radius, cached_height)) = &self.mesh {
            if *cached_radius == radius && *cached_height == height {
                return handle.clone();
            }
        }
        let handle = meshes.add(marker_mesh(radius, height));
        self.mesh = Some((handle.clone(), radius, height));
        handle
    }

    fn material_for(
        &mut self,
        materials: &mut Assets<StandardMaterial>,
        color: Color,
    ) -> Handle<StandardMaterial> {
        self.materials
            .entry(color.to_srgba().to_u8_array())
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: color,
                    metallic: 0.1,
                    perceptual_roughness: 0.4,
                    ..default()
                })
            })
            .clone()
    }
}

/// Flat-shaded cylinder with its base at the origin.
fn marker_mesh(radius: f32, height: f32) -> Mesh {
    Cylinder::new(radius, height)
        .mesh()
        .resolution(DOT_RESOLUTION)
        .build()
        .with_duplicated_vertices()
        .with_computed_flat_normals()
        .translated_by(Vec3::Y * height * 0.5)
}

/// Respawn markers when the instance set changes, otherwise copy positions.
pub fn sync_dot_entities(
    mut commands: Commands,
    mut instances: ResMut<DotInstances>,
    mut cache: ResMut<DotMeshCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut markers: Query<(Entity, &DotMarker, &mut Transform)>,
) {
    if instances.instances_dirty {
        for (entity, _, _) in &markers {
            commands.entity(entity).despawn();
        }

        let mesh = cache.mesh_for(&mut meshes, instances.marker_radius, instances.marker_height);
        for (index, (position, color)) in instances
            .positions
            .iter()
            .zip(&instances.colors)
            .enumerate()
        {
            let material = cache.material_for(&mut materials, *color);
            commands.spawn((
                DotMarker(index),
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(*position),
            ));
        }
        debug!("Spawned {} dot markers", instances.len());

        instances.instances_dirty = false;
        instances.transforms_dirty = false;
        return;
    }

    if !instances.transforms_dirty {
        return;
    }
    for (_, marker, mut transform) in &mut markers {
        if let Some(position) = instances.positions.get(marker.0) {
            if transform.translation != *position {
                transform.translation = *position;
            }
        }
    }
    instances.transforms_dirty = false;
}
