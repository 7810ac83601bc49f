use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::sampling::SampledPoint;

#[cfg(test)]
#[path = "proximity_test.rs"]
mod proximity_test;

/// Shape of the lift bump that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftSettings {
    /// Lift directly under the pointer.
    pub lift_height: f32,
    /// Planar distance at which the lift reaches zero.
    pub influence_radius: f32,
    /// Fraction of the gap to the target closed per tick, in `(0, 1]`.
    pub lift_damping: f32,
}

/// Lift a dot at `rest` should settle to for the given hover point.
///
/// Distance ignores the vertical axis. Linear falloff from `lift_height`
/// at zero distance to 0 at `influence_radius` and beyond.
pub fn target_lift(rest: Vec3, hover: Option<Vec3>, settings: &LiftSettings) -> f32 {
    let Some(hover) = hover else {
        return 0.0;
    };
    let distance = Vec2::new(rest.x, rest.z).distance(Vec2::new(hover.x, hover.z));
    if distance < settings.influence_radius {
        settings.lift_height * (1.0 - distance / settings.influence_radius)
    } else {
        0.0
    }
}

/// Advance every dot's lift one step toward its target.
///
/// Runs for all dots each frame, including those with a zero target, so
/// raised dots settle back once the pointer leaves.
pub fn tick_lift(points: &mut [SampledPoint], hover: Option<Vec3>, settings: &LiftSettings) {
    for point in points.iter_mut() {
        let target = target_lift(point.world_position, hover, settings);
        point.current_lift += (target - point.current_lift) * settings.lift_damping;
    }
}
