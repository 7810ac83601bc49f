use bevy::prelude::*;

use super::pointer::{PointerEvent, PointerState};
use super::ray::ground_plane_hit;
use crate::engine::camera::{MapCamera, ViewportRect};
use crate::engine::hotspots::{HotspotBinding, HotspotRecord};
use crate::engine::sampling::SampledPoint;
use crate::engine::surface::{RenderSurface, TooltipSurface};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Owns pointer state and drives the single hotspot tooltip.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    pointer: PointerState,
    viewport: ViewportRect,
    ground_half_extents: Vec2,
}

impl InteractionController {
    pub fn new(viewport: ViewportRect) -> Self {
        Self {
            viewport,
            ..default()
        }
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn viewport(&self) -> &ViewportRect {
        &self.viewport
    }

    pub fn hover_world(&self) -> Option<Vec3> {
        self.pointer.hover_world
    }

    pub fn active_hotspot(&self) -> Option<&str> {
        self.pointer.active_hotspot.as_deref()
    }

    /// Size of the pickable ground rectangle, centred on the origin.
    pub fn set_ground_extents(&mut self, half_extents: Vec2) {
        self.ground_half_extents = half_extents;
    }

    /// Forget hover, press and tooltip state. Viewport and ground size stay.
    pub fn clear(&mut self) {
        self.pointer = PointerState::default();
    }

    /// Track the pointer and recompute the hover point on the ground.
    ///
    /// Returns the client-space movement since the previous event, zero for
    /// the first event after the pointer (re)enters.
    pub fn on_pointer_move(&mut self, event: &PointerEvent, camera: &MapCamera) -> Vec2 {
        let previous = self.pointer.tracking.then_some(self.pointer.client);
        self.update_pointer(event);
        self.pointer.hover_world = camera
            .ray_from_ndc(self.pointer.ndc)
            .and_then(|ray| ground_plane_hit(ray, self.ground_half_extents));
        previous.map_or(Vec2::ZERO, |previous| self.pointer.client - previous)
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        self.update_pointer(event);
        self.pointer.is_pressed = true;
    }

    /// Release: hit-test the markers and show or hide the tooltip.
    pub fn on_pointer_up(
        &mut self,
        event: &PointerEvent,
        camera: &MapCamera,
        points: &[SampledPoint],
        binding: &HotspotBinding,
        surface: &impl RenderSurface,
        tooltip: &mut impl TooltipSurface,
    ) {
        self.pointer.is_pressed = false;
        self.on_pointer_move(event, camera);

        let hit = camera
            .ray_from_ndc(self.pointer.ndc)
            .and_then(|ray| surface.intersect_ray(ray).into_iter().next());

        match hit.and_then(|hit| {
            binding
                .hotspot_at(hit.instance_index)
                .map(|record| (hit.instance_index, record))
        }) {
            Some((point_index, record)) => {
                self.show_hotspot(point_index, record, camera, points, tooltip);
            }
            None => self.hide_tooltip(tooltip),
        }
    }

    /// Pointer left the surface: hover ends and any drag is dropped.
    pub fn on_pointer_leave(&mut self) {
        self.pointer.hover_world = None;
        self.pointer.is_pressed = false;
        self.pointer.tracking = false;
    }

    /// New viewport: refit the camera lens and re-anchor the tooltip.
    pub fn on_resize(
        &mut self,
        viewport: ViewportRect,
        camera: &mut MapCamera,
        points: &[SampledPoint],
        binding: &HotspotBinding,
        tooltip: &mut impl TooltipSurface,
    ) {
        self.viewport = viewport;
        camera.set_viewport(&viewport);
        self.update_tooltip_position(camera, points, binding, tooltip);
    }

    /// Re-project the active hotspot's dot, lift included.
    ///
    /// Called every frame: both the lift and the camera move.
    pub fn update_tooltip_position(
        &self,
        camera: &MapCamera,
        points: &[SampledPoint],
        binding: &HotspotBinding,
        tooltip: &mut impl TooltipSurface,
    ) {
        let Some(id) = self.pointer.active_hotspot.as_deref() else {
            return;
        };
        let Some(point) = binding.point_for(id).and_then(|index| points.get(index)) else {
            return;
        };
        let screen = camera.project(point.lifted_position(), &self.viewport);
        tooltip.move_tooltip(screen.x, screen.y);
    }

    pub fn hide_tooltip(&mut self, tooltip: &mut impl TooltipSurface) {
        self.pointer.active_hotspot = None;
        tooltip.hide_tooltip();
    }

    fn show_hotspot(
        &mut self,
        point_index: usize,
        record: &HotspotRecord,
        camera: &MapCamera,
        points: &[SampledPoint],
        tooltip: &mut impl TooltipSurface,
    ) {
        let Some(point) = points.get(point_index) else {
            return self.hide_tooltip(tooltip);
        };
        let screen = camera.project(point.lifted_position(), &self.viewport);
        self.pointer.active_hotspot = Some(record.id.clone());
        tooltip.show_tooltip(&record.label, &record.description, screen.x, screen.y);
    }

    fn update_pointer(&mut self, event: &PointerEvent) {
        self.pointer.client = event.client_position();
        self.pointer.tracking = true;
        self.pointer.ndc = self.viewport.to_ndc(self.pointer.client);
    }
}
