//! Hotspot records and their binding to sampled dots.

/// Nearest-dot search and the forward/reverse lookup tables.
pub mod binder;

/// Hotspot metadata as authored in the map manifest.
pub mod record;

pub use binder::{HotspotBinding, bind_hotspots};
pub use record::HotspotRecord;
