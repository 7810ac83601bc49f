//! Pointer handling: hover ray, press/release hit testing and the tooltip.

/// Hover tracking, hit testing and tooltip placement.
pub mod controller;

/// Pointer messages and the state derived from them.
pub mod pointer;

/// Ray tests against marker bounds and the finite ground plane.
pub mod ray;

pub use controller::InteractionController;
pub use pointer::{PointerEvent, PointerMessage, PointerState};
