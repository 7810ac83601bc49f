use bevy::prelude::*;

use super::TooltipSurface;

/// Tooltip text and anchor, mirrored onto a UI node by the host.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TooltipOverlay {
    pub visible: bool,
    pub title: String,
    pub body: String,
    /// Anchor in screen pixels.
    pub position: Vec2,
}

impl TooltipSurface for TooltipOverlay {
    fn show_tooltip(&mut self, title: &str, body: &str, x: f32, y: f32) {
        self.title.clear();
        self.title.push_str(title);
        self.body.clear();
        self.body.push_str(body);
        self.position = Vec2::new(x, y);
        self.visible = true;
    }

    fn move_tooltip(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    fn hide_tooltip(&mut self) {
        self.visible = false;
    }
}
