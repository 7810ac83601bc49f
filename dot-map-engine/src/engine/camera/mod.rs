//! Camera state, orbit controls and world → screen projection.
//!
//! The engine keeps its own perspective camera (`MapCamera`) so that pointer
//! rays and tooltip placement do not depend on a running renderer. The host
//! copies it onto the Bevy camera every frame.

/// Perspective camera: eye, target, lens, and NDC ray construction.
pub mod map_camera;

/// Damped orbit controls with distance and polar-angle limits.
pub mod orbit_camera;

/// Viewport rectangle and the NDC → pixel mapping used by tooltips.
pub mod projection;

pub use map_camera::MapCamera;
pub use orbit_camera::OrbitCamera;
pub use projection::{ScreenPoint, ViewportRect, project_to_screen};
