use std::f32::consts::TAU;

use bevy::prelude::*;
use constants::render_settings::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};

use super::map_camera::MapCamera;

#[cfg(test)]
#[path = "orbit_camera_test.rs"]
mod orbit_camera_test;

/// Orbit controls around a fixed target, no panning.
///
/// Pointer drags and wheel steps accumulate into pending deltas; each
/// `update` applies a `damping` share of them, so motion eases out over
/// several frames.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Angle from +Y.
    pub polar: f32,
    /// Angle around +Y, measured from +Z.
    pub azimuth: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pending_polar: f32,
    pending_azimuth: f32,
    pending_scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(&MapCamera::default())
    }
}

impl OrbitCamera {
    /// Orbit state matching the camera's current eye and target.
    pub fn looking_from(camera: &MapCamera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pending_polar: 0.0,
            pending_azimuth: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    ///
    /// A drag across the full viewport height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.pending_azimuth -= TAU * delta.x / height * self.rotate_speed;
        self.pending_polar -= TAU * delta.y / height * self.rotate_speed;
    }

    /// Queue a zoom step. Positive `wheel_y` (scrolling up) moves closer.
    pub fn zoom(&mut self, wheel_y: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        if wheel_y > 0.0 {
            self.pending_scale *= step;
        } else if wheel_y < 0.0 {
            self.pending_scale /= step;
        }
    }

    /// Apply one frame of damped motion and write the eye into `camera`.
    ///
    /// Returns whether the eye moved.
    pub fn update(&mut self, camera: &mut MapCamera) -> bool {
        self.azimuth += self.pending_azimuth * self.damping;
        self.polar = (self.polar + self.pending_polar * self.damping)
            .clamp(self.min_polar, self.max_polar);
        self.radius =
            (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        self.pending_azimuth *= 1.0 - self.damping;
        self.pending_polar *= 1.0 - self.damping;
        self.pending_scale = 1.0;

        let eye = self.eye();
        let moved = eye.distance_squared(camera.eye) > f32::EPSILON * f32::EPSILON
            || camera.target != self.target;
        camera.eye = eye;
        camera.target = self.target;
        moved
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(
                sin_polar * sin_azimuth,
                cos_polar,
                sin_polar * cos_azimuth,
            ) * self.radius
    }
}
