use bevy::prelude::*;
use constants::map_layout::{BRIGHTNESS_THRESHOLD, OPACITY_THRESHOLD};

use super::pixel_source::PixelSource;
use crate::engine::error::DecodeError;

#[cfg(test)]
#[path = "image_sampler_test.rs"]
mod image_sampler_test;

/// One dot of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    /// Rest position on the ground plane (`y == 0`).
    pub world_position: Vec3,
    /// Source pixel mapped into `[0, 1] x [0, 1]`, `v` growing downward.
    pub uv: Vec2,
    /// Animated vertical offset, written only by the lift animator.
    pub current_lift: f32,
}

impl SampledPoint {
    /// Rest position raised by the current lift.
    pub fn lifted_position(&self) -> Vec3 {
        self.world_position + Vec3::Y * self.current_lift
    }
}

/// Output of one sampling pass over an image.
#[derive(Debug, Clone, Default)]
pub struct SampledMap {
    /// Row-major in the source image.
    pub points: Vec<SampledPoint>,
    /// `image_width / image_height`.
    pub aspect_ratio: f32,
    pub map_width_units: f32,
    pub map_height_units: f32,
}

impl SampledMap {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Half extents of the map on the ground plane, `(x, z)`.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.map_width_units, self.map_height_units) * 0.5
    }
}

/// Opaque and darker than near-white.
pub fn keeps_pixel([r, g, b, a]: [u8; 4]) -> bool {
    let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
    a > OPACITY_THRESHOLD && brightness < BRIGHTNESS_THRESHOLD
}

/// Sample every `step_pixels`-th pixel of every `step_pixels`-th row.
pub fn sample_image(
    source: &impl PixelSource,
    step_pixels: u32,
    map_width_units: f32,
) -> Result<SampledMap, DecodeError> {
    if step_pixels == 0 {
        return Err(DecodeError::InvalidSampleStep);
    }
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage);
    }

    let aspect_ratio = width as f32 / height as f32;
    let map_height_units = map_width_units / aspect_ratio;

    let columns = width.div_ceil(step_pixels) as usize;
    let rows = height.div_ceil(step_pixels) as usize;
    let mut points = Vec::with_capacity(columns * rows);

    for y in (0..height).step_by(step_pixels as usize) {
        for x in (0..width).step_by(step_pixels as usize) {
            if !keeps_pixel(source.rgba(x, y)) {
                continue;
            }

            let u = normalized(x, width);
            let v = normalized(y, height);
            let world_x = (u - 0.5) * map_width_units;
            let world_z = (0.5 - v) * map_height_units;

            points.push(SampledPoint {
                world_position: Vec3::new(world_x, 0.0, world_z),
                uv: Vec2::new(u, v),
                current_lift: 0.0,
            });
        }
    }
    points.shrink_to_fit();

    if points.is_empty() {
        warn!("Sampling {width}x{height} image at step {step_pixels} produced no dots");
    } else {
        info!(
            "Sampled {} dots from {width}x{height} image (step {step_pixels}, map {map_width_units:.2} x {map_height_units:.2})",
            points.len()
        );
    }

    Ok(SampledMap {
        points,
        aspect_ratio,
        map_width_units,
        map_height_units,
    })
}

// A single pixel span has no extent; pin it to 0 rather than dividing by zero.
fn normalized(coord: u32, extent: u32) -> f32 {
    if extent <= 1 {
        0.0
    } else {
        coord as f32 / (extent - 1) as f32
    }
}
