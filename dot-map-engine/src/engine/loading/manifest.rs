use std::collections::HashSet;

use bevy::prelude::*;
use constants::path::{DEFAULT_MAP_IMAGE, RELATIVE_MAP_PATH};
use serde::{Deserialize, Serialize};

use crate::engine::config::DotMapConfig;
use crate::engine::hotspots::HotspotRecord;

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

/// Map manifest as a Bevy asset. Mirrors the JSON structure.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct MapManifest {
    /// Image file, relative to the manifest directory.
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub config: DotMapConfig,
    /// Ordered; binding walks this list front to back.
    #[serde(default)]
    pub hotspots: Vec<HotspotRecord>,
}

fn default_image() -> String {
    DEFAULT_MAP_IMAGE.to_string()
}

impl MapManifest {
    /// Asset path of the map image.
    pub fn image_path(&self) -> String {
        format!("{}/{}", RELATIVE_MAP_PATH, self.image)
    }

    /// Ids that appear more than once, in first-repeat order.
    pub fn duplicate_hotspot_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.hotspots {
            if !seen.insert(record.id.as_str()) && !duplicates.contains(&record.id.as_str()) {
                duplicates.push(record.id.as_str());
            }
        }
        duplicates
    }
}
