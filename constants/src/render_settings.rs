/// Colour of ordinary dots (`#86c9d1`).
pub const BASE_COLOR: u32 = 0x86c9d1;

/// Colour of hotspot dots whose record carries no usable colour (`#b8b8b8`).
pub const HOTSPOT_BASE_COLOR: u32 = 0xb8b8b8;

/// Clear colour behind the map (`#f5fbfe`).
pub const BACKGROUND_COLOR: u32 = 0xf5fbfe;

pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 6.0, 16.0];

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.06;
pub const ORBIT_MIN_DISTANCE: f32 = 8.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::FRAC_PI_4;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.1;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

pub const AMBIENT_BRIGHTNESS: f32 = 850.0;
pub const DIRECTIONAL_ILLUMINANCE: f32 = 9_000.0;
pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [4.0, 10.0, 6.0];

pub const TOOLTIP_FONT_SIZE: f32 = 14.0;
pub const TOOLTIP_TITLE_FONT_SIZE: f32 = 16.0;
pub const TOOLTIP_MAX_WIDTH: f32 = 280.0;
