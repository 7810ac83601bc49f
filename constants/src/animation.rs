/// Maximum lift in world units, reached directly under the pointer.
pub const LIFT_HEIGHT: f32 = 0.35;

/// Planar radius around the pointer where dots are affected.
pub const INFLUENCE_RADIUS: f32 = 1.2;

/// Fraction of the remaining gap to the target lift closed each tick.
pub const LIFT_DAMPING: f32 = 0.18;
