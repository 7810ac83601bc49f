use bevy::prelude::*;

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

/// Drawing surface rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl ViewportRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// Client pixel position → NDC, Y up.
    pub fn to_ndc(&self, client: Vec2) -> Vec2 {
        let width = self.width.max(f32::EPSILON);
        let height = self.height.max(f32::EPSILON);
        Vec2::new(
            (client.x - self.left) / width * 2.0 - 1.0,
            -((client.y - self.top) / height) * 2.0 + 1.0,
        )
    }
}

/// Position in screen pixels, Y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl From<ScreenPoint> for Vec2 {
    fn from(point: ScreenPoint) -> Self {
        Vec2::new(point.x, point.y)
    }
}

/// Project a world position into viewport pixels.
///
/// Results are only valid for the camera and viewport passed in; callers
/// re-project whenever either changes.
pub fn project_to_screen(world: Vec3, view_projection: Mat4, viewport: &ViewportRect) -> ScreenPoint {
    let ndc = view_projection.project_point3(world);
    ScreenPoint {
        x: (ndc.x * 0.5 + 0.5) * viewport.width + viewport.left,
        y: (-ndc.y * 0.5 + 0.5) * viewport.height + viewport.top,
    }
}
