use bevy::prelude::*;
use constants::map_layout::{DOT_HEIGHT, DOT_RADIUS};

use super::{InstanceHit, RenderSurface};
use crate::engine::interaction::ray::ray_aabb_hit_t;

#[cfg(test)]
#[path = "instances_test.rs"]
mod instances_test;

/// Per-dot marker transforms and colours.
///
/// Each marker is a vertical cylinder whose base sits at its position.
/// Picking tests the cylinder's bounding box.
#[derive(Resource, Debug, Clone)]
pub struct DotInstances {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Color>,
    pub marker_radius: f32,
    pub marker_height: f32,
    /// Set when positions changed since the host last mirrored them.
    pub transforms_dirty: bool,
    /// Set when the instance set or colours changed.
    pub instances_dirty: bool,
}

impl Default for DotInstances {
    fn default() -> Self {
        Self::new(DOT_RADIUS, DOT_HEIGHT)
    }
}

impl DotInstances {
    pub fn new(marker_radius: f32, marker_height: f32) -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            marker_radius,
            marker_height,
            transforms_dirty: false,
            instances_dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds of the marker at `index`.
    pub fn marker_bounds(&self, index: usize) -> Option<(Vec3, Vec3)> {
        let base = *self.positions.get(index)?;
        let half = Vec3::new(self.marker_radius, 0.0, self.marker_radius);
        Some((
            base - half,
            base + half + Vec3::Y * self.marker_height,
        ))
    }
}

impl RenderSurface for DotInstances {
    fn create_instances(&mut self, count: usize) {
        self.positions.clear();
        self.positions.resize(count, Vec3::ZERO);
        self.colors.clear();
        self.colors.resize(count, Color::WHITE);
        self.instances_dirty = true;
        self.transforms_dirty = true;
    }

    fn set_instance_transform(&mut self, index: usize, position: Vec3) {
        if let Some(slot) = self.positions.get_mut(index) {
            if *slot != position {
                *slot = position;
                self.transforms_dirty = true;
            }
        }
    }

    fn set_instance_color(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
            self.instances_dirty = true;
        }
    }

    fn intersect_ray(&self, ray: Ray3d) -> Vec<InstanceHit> {
        let direction = ray.direction.as_vec3();
        let mut hits: Vec<InstanceHit> = (0..self.positions.len())
            .filter_map(|index| {
                let (min, max) = self.marker_bounds(index)?;
                let distance = ray_aabb_hit_t(ray.origin, direction, min, max)?;
                Some(InstanceHit {
                    instance_index: index,
                    point: ray.get_point(distance),
                    distance,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
