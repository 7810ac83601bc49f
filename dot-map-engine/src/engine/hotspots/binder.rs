use std::collections::HashMap;

use bevy::prelude::*;

use super::record::HotspotRecord;
use crate::engine::sampling::SampledPoint;

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

/// Lookup tables between dot indices and hotspot records.
///
/// Built once per sampled image and replaced wholesale on reload.
#[derive(Debug, Clone, Default)]
pub struct HotspotBinding {
    records: Vec<HotspotRecord>,
    // dot index -> index into `records`
    by_point: HashMap<usize, usize>,
    // hotspot id -> dot index
    by_id: HashMap<String, usize>,
    unresolved: Vec<String>,
}

impl HotspotBinding {
    /// Hotspot owning the dot at `point_index`, if any.
    pub fn hotspot_at(&self, point_index: usize) -> Option<&HotspotRecord> {
        self.by_point
            .get(&point_index)
            .map(|&record| &self.records[record])
    }

    /// Dot index a hotspot id was bound to.
    pub fn point_for(&self, hotspot_id: &str) -> Option<usize> {
        self.by_id.get(hotspot_id).copied()
    }

    pub fn record(&self, hotspot_id: &str) -> Option<&HotspotRecord> {
        self.records.iter().find(|record| record.id == hotspot_id)
    }

    /// Ids dropped because no dot was available.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// `(dot index, hotspot)` pairs in the forward table, ordered by dot index.
    pub fn bound_points(&self) -> Vec<(usize, &HotspotRecord)> {
        let mut bound: Vec<_> = self
            .by_point
            .iter()
            .map(|(&point, &record)| (point, &self.records[record]))
            .collect();
        bound.sort_by_key(|(point, _)| *point);
        bound
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Bind each hotspot, in list order, to its nearest dot in UV space.
///
/// Linear scan with squared distance; the first dot at the minimum wins.
/// A later hotspot sharing a dot with an earlier one takes over the dot's
/// forward entry, while both ids keep their reverse entries.
pub fn bind_hotspots(points: &[SampledPoint], hotspots: &[HotspotRecord]) -> HotspotBinding {
    let mut binding = HotspotBinding {
        records: hotspots.to_vec(),
        ..default()
    };

    for (record_index, hotspot) in hotspots.iter().enumerate() {
        let Some(point_index) = nearest_point(points, hotspot.uv()) else {
            binding.unresolved.push(hotspot.id.clone());
            continue;
        };

        if let Some(previous) = binding.by_point.insert(point_index, record_index) {
            debug!(
                "Hotspot '{}' shares dot {point_index} with '{}'",
                hotspot.id, hotspots[previous].id
            );
        }
        binding.by_id.insert(hotspot.id.clone(), point_index);
    }

    if !binding.unresolved.is_empty() {
        warn!(
            "{} hotspot(s) could not be bound to a dot: {:?}",
            binding.unresolved.len(),
            binding.unresolved
        );
    }

    binding
}

fn nearest_point(points: &[SampledPoint], uv: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.iter().enumerate() {
        let dist_sq = point.uv.distance_squared(uv);
        if best.is_none_or(|(_, best_dist)| dist_sq < best_dist) {
            best = Some((index, dist_sq));
        }
    }
    best.map(|(index, _)| index)
}
