//! Bevy-side mirrors of the engine state.
//!
//! The engine writes into in-memory surfaces; these systems copy them onto
//! entities, the main camera and UI nodes.

/// Main camera spawn and per-frame sync from the engine camera.
pub mod camera_sync;

/// Marker entities mirrored from `DotInstances`.
///
/// One cylinder entity per dot with a shared mesh and per-colour materials.
pub mod dots;

/// Ambient and directional lights.
pub mod lighting;

/// Tooltip UI node mirrored from `TooltipOverlay`.
pub mod tooltip_ui;
