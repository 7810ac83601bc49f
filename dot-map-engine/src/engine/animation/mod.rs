//! Per-frame pointer proximity lift.

/// Linear falloff target and first-order approach toward it.
pub mod proximity;

pub use proximity::{LiftSettings, target_lift, tick_lift};
