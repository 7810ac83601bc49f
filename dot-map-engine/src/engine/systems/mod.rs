//! Runtime systems that drive the engine from the Bevy schedule.
//!
//! Window input becomes `PointerMessage`s, which are handed to the
//! context in arrival order; the frame system advances animation once per
//! frame.

/// Per-frame tick and teardown on exit.
pub mod frame;

/// Window event translation and pointer message dispatch.
///
/// Mouse and touch both reduce to client-space pointer events.
pub mod input;
