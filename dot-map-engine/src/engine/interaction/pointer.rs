use bevy::prelude::*;

use crate::engine::camera::ViewportRect;

/// Client-space pointer payload. Mouse and touch both reduce to this.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerEvent {
    pub client_x: Option<f32>,
    pub client_y: Option<f32>,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            client_x: Some(x),
            client_y: Some(y),
        }
    }

    /// Client position, with missing coordinates read as 0.
    pub fn client_position(&self) -> Vec2 {
        if self.client_x.is_none() || self.client_y.is_none() {
            debug!("Pointer event without coordinates, using 0 for missing axes");
        }
        Vec2::new(self.client_x.unwrap_or(0.0), self.client_y.unwrap_or(0.0))
    }
}

/// Input delivered to the engine, processed in arrival order.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerMessage {
    Move(PointerEvent),
    Down(PointerEvent),
    Up(PointerEvent),
    Leave,
    /// Wheel steps, positive when scrolling up.
    Wheel(f32),
    Resize(ViewportRect),
}

/// Everything the engine knows about the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    /// Last client position, used for drag deltas.
    pub client: Vec2,
    /// `client` holds a position seen since the pointer last entered.
    pub tracking: bool,
    /// Ground point under the pointer; `None` off the map.
    pub hover_world: Option<Vec3>,
    pub is_pressed: bool,
    /// Hotspot whose tooltip is showing.
    pub active_hotspot: Option<String>,
}
