use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION,
};

use super::projection::{ScreenPoint, ViewportRect, project_to_screen};

/// Right-handed, Y-up perspective camera looking at `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_START_POSITION),
            target: Vec3::ZERO,
            fov_y: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl MapCamera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Match the lens to a resized viewport.
    pub fn set_viewport(&mut self, viewport: &ViewportRect) {
        if viewport.width > 0.0 && viewport.height > 0.0 {
            self.aspect_ratio = viewport.width / viewport.height;
        }
    }

    /// Ray from the eye through a point given in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray3d> {
        let inverse = self.view_projection().inverse();
        let far_point = inverse.project_point3(ndc.extend(1.0));
        let direction = Dir3::new(far_point - self.eye).ok()?;
        Some(Ray3d::new(self.eye, direction))
    }

    pub fn project(&self, world: Vec3, viewport: &ViewportRect) -> ScreenPoint {
        project_to_screen(world, self.view_projection(), viewport)
    }

    /// Bevy transform placing a camera entity at this eye.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye).looking_at(self.target, Vec3::Y)
    }

    pub fn perspective(&self) -> PerspectiveProjection {
        PerspectiveProjection {
            fov: self.fov_y,
            aspect_ratio: self.aspect_ratio,
            near: self.near,
            far: self.far,
        }
    }
}
