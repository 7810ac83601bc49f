/// Width of the whole map in world units. Height follows from the image aspect ratio.
pub const MAP_WIDTH_UNITS: f32 = 15.0;

/// Pixel stride used when sampling the source image (higher = fewer dots).
pub const SAMPLE_STEP: u32 = 10;

/// Pixels with alpha at or below this value count as background.
pub const OPACITY_THRESHOLD: u8 = 40;

/// Pixels whose mean RGB is at or above this value count as background.
pub const BRIGHTNESS_THRESHOLD: f32 = 245.0;

/// Marker cylinder radius in world units.
pub const DOT_RADIUS: f32 = 0.04;

/// Marker cylinder height in world units. The base sits on the ground plane.
pub const DOT_HEIGHT: f32 = 0.14;

/// Radial segments of the marker cylinder mesh.
pub const DOT_RESOLUTION: u32 = 12;
