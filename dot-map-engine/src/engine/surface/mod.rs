//! Collaborator seams between the engine and whatever draws it.
//!
//! The engine only talks to the renderer through [`RenderSurface`] and to
//! the tooltip UI through [`TooltipSurface`]. [`DotInstances`] and
//! [`TooltipOverlay`] are the in-memory implementations the Bevy host
//! mirrors onto entities and UI nodes each frame.

pub mod instances;
pub mod tooltip;

use bevy::prelude::*;

pub use instances::DotInstances;
pub use tooltip::TooltipOverlay;

/// One marker hit by a pointer ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceHit {
    pub instance_index: usize,
    /// World-space point where the ray enters the marker.
    pub point: Vec3,
    /// Distance along the ray.
    pub distance: f32,
}

/// Instanced marker renderer.
pub trait RenderSurface {
    /// Drop existing instances and allocate `count` new ones at the origin.
    fn create_instances(&mut self, count: usize);

    fn set_instance_transform(&mut self, index: usize, position: Vec3);

    fn set_instance_color(&mut self, index: usize, color: Color);

    /// Markers hit by `ray`, nearest first.
    fn intersect_ray(&self, ray: Ray3d) -> Vec<InstanceHit>;
}

/// Single floating tooltip.
pub trait TooltipSurface {
    fn show_tooltip(&mut self, title: &str, body: &str, x: f32, y: f32);

    /// Move a visible tooltip without touching its text.
    fn move_tooltip(&mut self, x: f32, y: f32);

    fn hide_tooltip(&mut self);
}
