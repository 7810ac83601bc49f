use bevy::prelude::*;
use constants::{animation, map_layout, render_settings};
use serde::{Deserialize, Serialize};

use crate::engine::animation::proximity::LiftSettings;
use crate::engine::error::DotMapError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime settings for sampling, markers, lift animation and colours.
///
/// Fields missing from the manifest's `config` object fall back to the
/// workspace `constants` crate.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotMapConfig {
    pub map_width_units: f32,
    pub sample_step: u32,
    pub dot_radius: f32,
    pub dot_height: f32,
    pub lift: LiftSettings,
    pub base_color: String,
    pub hotspot_base_color: String,
    pub background_color: String,
}

impl Default for DotMapConfig {
    fn default() -> Self {
        Self {
            map_width_units: map_layout::MAP_WIDTH_UNITS,
            sample_step: map_layout::SAMPLE_STEP,
            dot_radius: map_layout::DOT_RADIUS,
            dot_height: map_layout::DOT_HEIGHT,
            lift: LiftSettings::default(),
            base_color: hex_string(render_settings::BASE_COLOR),
            hotspot_base_color: hex_string(render_settings::HOTSPOT_BASE_COLOR),
            background_color: hex_string(render_settings::BACKGROUND_COLOR),
        }
    }
}

impl Default for LiftSettings {
    fn default() -> Self {
        Self {
            lift_height: animation::LIFT_HEIGHT,
            influence_radius: animation::INFLUENCE_RADIUS,
            lift_damping: animation::LIFT_DAMPING,
        }
    }
}

impl DotMapConfig {
    /// Reject values the sampler and animator cannot work with.
    pub fn validate(&self) -> Result<(), DotMapError> {
        if self.sample_step == 0 {
            return Err(DotMapError::InvalidConfig(
                "sample_step must be at least 1".into(),
            ));
        }
        if !(self.map_width_units > 0.0) {
            return Err(DotMapError::InvalidConfig(format!(
                "map_width_units must be positive, got {}",
                self.map_width_units
            )));
        }
        if !(self.lift.influence_radius > 0.0) {
            return Err(DotMapError::InvalidConfig(format!(
                "influence_radius must be positive, got {}",
                self.lift.influence_radius
            )));
        }
        if !(self.lift.lift_damping > 0.0 && self.lift.lift_damping <= 1.0) {
            return Err(DotMapError::InvalidConfig(format!(
                "lift_damping must be in (0, 1], got {}",
                self.lift.lift_damping
            )));
        }
        Ok(())
    }

    pub fn base_color(&self) -> Color {
        parse_hex_color(&self.base_color).unwrap_or(color_from_u32(render_settings::BASE_COLOR))
    }

    pub fn hotspot_base_color(&self) -> Color {
        parse_hex_color(&self.hotspot_base_color)
            .unwrap_or(color_from_u32(render_settings::HOTSPOT_BASE_COLOR))
    }

    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background_color)
            .unwrap_or(color_from_u32(render_settings::BACKGROUND_COLOR))
    }
}

/// Parse `#rrggbb` / `rrggbb` (and the short forms Bevy accepts).
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    Srgba::hex(hex.trim()).ok().map(Color::from)
}

pub fn color_from_u32(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

fn hex_string(rgb: u32) -> String {
    format!("#{rgb:06x}")
}
