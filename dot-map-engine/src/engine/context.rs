use bevy::prelude::*;

use crate::engine::animation::tick_lift;
use crate::engine::camera::{MapCamera, OrbitCamera, ViewportRect};
use crate::engine::config::DotMapConfig;
use crate::engine::error::DotMapError;
use crate::engine::hotspots::{HotspotBinding, HotspotRecord, bind_hotspots};
use crate::engine::interaction::{InteractionController, PointerMessage};
use crate::engine::sampling::{PixelSource, SampledMap, SampledPoint, sample_image};
use crate::engine::surface::{RenderSurface, TooltipSurface};

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

/// Everything the map owns between image loads.
///
/// Lifecycle: [`init`](Self::init) when an image is ready (and again on
/// reload), [`reset`](Self::reset) to drop the current map, and
/// [`dispose`](Self::dispose) at shutdown. Pointer messages and frames are
/// ignored until a map has been sampled.
#[derive(Resource, Debug, Clone)]
pub struct DotMapContext {
    config: DotMapConfig,
    camera: MapCamera,
    orbit: OrbitCamera,
    map: Option<SampledMap>,
    binding: HotspotBinding,
    interaction: InteractionController,
}

impl DotMapContext {
    pub fn new(config: DotMapConfig, viewport: ViewportRect) -> Self {
        let mut camera = MapCamera::default();
        camera.set_viewport(&viewport);
        Self {
            config,
            orbit: OrbitCamera::looking_from(&camera),
            camera,
            map: None,
            binding: HotspotBinding::default(),
            interaction: InteractionController::new(viewport),
        }
    }

    pub fn config(&self) -> &DotMapConfig {
        &self.config
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    pub fn map(&self) -> Option<&SampledMap> {
        self.map.as_ref()
    }

    pub fn points(&self) -> &[SampledPoint] {
        self.map
            .as_ref()
            .map(|map| map.points.as_slice())
            .unwrap_or_default()
    }

    pub fn binding(&self) -> &HotspotBinding {
        &self.binding
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn is_ready(&self) -> bool {
        self.map.is_some()
    }

    /// Replace the config used by the next [`init`](Self::init).
    pub fn set_config(&mut self, config: DotMapConfig) {
        self.config = config;
    }

    /// Sample `source`, bind `hotspots` and rebuild the marker instances.
    ///
    /// The new map and binding are computed before anything is replaced;
    /// on error the previous map, if any, stays in place.
    pub fn init(
        &mut self,
        source: &impl PixelSource,
        hotspots: &[HotspotRecord],
        surface: &mut impl RenderSurface,
        tooltip: &mut impl TooltipSurface,
    ) -> Result<(), DotMapError> {
        self.config.validate()?;
        let map = sample_image(source, self.config.sample_step, self.config.map_width_units)?;
        let binding = bind_hotspots(&map.points, hotspots);

        self.interaction.hide_tooltip(tooltip);
        self.interaction.clear();
        self.interaction.set_ground_extents(map.half_extents());
        self.populate_instances(&map, &binding, surface);

        info!(
            "Dot map ready: {} dots, {} of {} hotspots bound",
            map.points.len(),
            binding.len(),
            hotspots.len()
        );
        self.map = Some(map);
        self.binding = binding;
        Ok(())
    }

    /// Drop the current map, binding and pointer state.
    pub fn reset(&mut self, tooltip: &mut impl TooltipSurface) {
        self.interaction.hide_tooltip(tooltip);
        self.interaction.clear();
        self.interaction.set_ground_extents(Vec2::ZERO);
        self.map = None;
        self.binding = HotspotBinding::default();
    }

    /// Tear down: clear state and release every marker instance.
    pub fn dispose(mut self, surface: &mut impl RenderSurface, tooltip: &mut impl TooltipSurface) {
        self.reset(tooltip);
        surface.create_instances(0);
        info!("Dot map disposed");
    }

    /// Apply one pointer or resize message.
    pub fn handle(
        &mut self,
        message: PointerMessage,
        surface: &impl RenderSurface,
        tooltip: &mut impl TooltipSurface,
    ) {
        if let PointerMessage::Resize(viewport) = message {
            self.interaction.on_resize(
                viewport,
                &mut self.camera,
                self.map
                    .as_ref()
                    .map(|map| map.points.as_slice())
                    .unwrap_or_default(),
                &self.binding,
                tooltip,
            );
            return;
        }

        let Some(map) = self.map.as_ref() else {
            return;
        };

        match message {
            PointerMessage::Move(event) => {
                let delta = self.interaction.on_pointer_move(&event, &self.camera);
                if self.interaction.pointer().is_pressed {
                    self.orbit
                        .rotate_by_pixels(delta, self.interaction.viewport().height);
                }
            }
            PointerMessage::Down(event) => self.interaction.on_pointer_down(&event),
            PointerMessage::Up(event) => self.interaction.on_pointer_up(
                &event,
                &self.camera,
                &map.points,
                &self.binding,
                surface,
                tooltip,
            ),
            PointerMessage::Leave => self.interaction.on_pointer_leave(),
            PointerMessage::Wheel(steps) => self.orbit.zoom(steps),
            PointerMessage::Resize(_) => {}
        }
    }

    /// One animation tick: orbit, lift, marker transforms, tooltip anchor.
    ///
    /// Allocation-free.
    pub fn frame(&mut self, surface: &mut impl RenderSurface, tooltip: &mut impl TooltipSurface) {
        let Some(map) = self.map.as_mut() else {
            return;
        };

        self.orbit.update(&mut self.camera);

        tick_lift(
            &mut map.points,
            self.interaction.hover_world(),
            &self.config.lift,
        );
        for (index, point) in map.points.iter().enumerate() {
            surface.set_instance_transform(index, point.lifted_position());
        }

        self.interaction
            .update_tooltip_position(&self.camera, &map.points, &self.binding, tooltip);
    }

    fn populate_instances(
        &self,
        map: &SampledMap,
        binding: &HotspotBinding,
        surface: &mut impl RenderSurface,
    ) {
        let base_color = self.config.base_color();
        let hotspot_color = self.config.hotspot_base_color();

        surface.create_instances(map.points.len());
        for (index, point) in map.points.iter().enumerate() {
            surface.set_instance_transform(index, point.lifted_position());
            let color = binding
                .hotspot_at(index)
                .map_or(base_color, |record| record.marker_color(hotspot_color));
            surface.set_instance_color(index, color);
        }
    }
}
