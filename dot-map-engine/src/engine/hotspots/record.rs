use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::config::parse_hex_color;

/// A named point of interest in normalized map coordinates.
///
/// `u = (longitude + 180) / 360` and `v = (90 - latitude) / 180` for an
/// equirectangular source map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub u: f32,
    pub v: f32,
}

impl HotspotRecord {
    pub fn uv(&self) -> Vec2 {
        Vec2::new(self.u, self.v)
    }

    /// Marker colour for this hotspot, or `fallback` when absent or unparsable.
    pub fn marker_color(&self, fallback: Color) -> Color {
        self.color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(fallback)
    }
}
