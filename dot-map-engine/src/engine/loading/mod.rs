//! Manifest and image loading through the Bevy asset server.
//!
//! Flow: `start_loading` requests the manifest, `load_manifest_system`
//! applies its config and requests the map image, and
//! `create_dot_map_when_ready` samples the image into the context. Edits
//! to either asset on disk are picked up while running.

/// The JSON map manifest asset.
pub mod manifest;

/// Loading systems and the hot-reload watcher.
pub mod manifest_loader;

/// Flags the state transitions wait on.
pub mod progress;
