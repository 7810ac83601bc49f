use bevy::input::ButtonState;
use bevy::input::mouse::MouseButton;
use bevy::input::touch::TouchPhase;
use bevy::prelude::*;
use bevy::window::WindowEvent;

use crate::engine::camera::ViewportRect;
use crate::engine::context::DotMapContext;
use crate::engine::interaction::{PointerEvent, PointerMessage};
use crate::engine::surface::{DotInstances, TooltipOverlay};

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Cursor position for button events, which carry none.
#[derive(Resource, Debug, PartialEq)]
pub struct CursorTracker {
    pub last: Option<Vec2>,
    /// Cleared on `CursorLeft`; buttons released outside the window are dropped.
    pub inside: bool,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self {
            last: None,
            inside: true,
        }
    }
}

impl CursorTracker {
    fn pointer(&self) -> PointerEvent {
        match self.last {
            Some(position) => PointerEvent::at(position.x, position.y),
            None => PointerEvent::default(),
        }
    }

    fn track(&mut self, position: Vec2) {
        self.last = Some(position);
        self.inside = true;
    }
}

/// Translate one window event into zero or more pointer messages.
pub fn translate_window_event(
    event: &WindowEvent,
    cursor: &mut CursorTracker,
    mut emit: impl FnMut(PointerMessage),
) {
    match event {
        WindowEvent::CursorMoved(moved) => {
            cursor.track(moved.position);
            emit(PointerMessage::Move(PointerEvent::at(
                moved.position.x,
                moved.position.y,
            )));
        }
        WindowEvent::CursorEntered(_) => cursor.inside = true,
        WindowEvent::MouseButtonInput(input) if input.button == MouseButton::Left => {
            if !cursor.inside {
                return;
            }
            let pointer = cursor.pointer();
            match input.state {
                ButtonState::Pressed => emit(PointerMessage::Down(pointer)),
                ButtonState::Released => emit(PointerMessage::Up(pointer)),
            }
        }
        WindowEvent::MouseWheel(wheel) => {
            if wheel.y != 0.0 {
                emit(PointerMessage::Wheel(wheel.y));
            }
        }
        WindowEvent::TouchInput(touch) => {
            let pointer = PointerEvent::at(touch.position.x, touch.position.y);
            match touch.phase {
                TouchPhase::Started => {
                    cursor.track(touch.position);
                    emit(PointerMessage::Move(pointer));
                    emit(PointerMessage::Down(pointer));
                }
                TouchPhase::Moved => {
                    cursor.track(touch.position);
                    emit(PointerMessage::Move(pointer));
                }
                TouchPhase::Ended => emit(PointerMessage::Up(pointer)),
                TouchPhase::Canceled => emit(PointerMessage::Leave),
            }
        }
        WindowEvent::CursorLeft(_) => {
            cursor.last = None;
            cursor.inside = false;
            emit(PointerMessage::Leave);
        }
        WindowEvent::WindowResized(resized) => emit(PointerMessage::Resize(ViewportRect::new(
            0.0,
            0.0,
            resized.width,
            resized.height,
        ))),
        _ => {}
    }
}

pub fn forward_window_events(
    mut window_events: EventReader<WindowEvent>,
    mut tracker: ResMut<CursorTracker>,
    mut pointer_messages: EventWriter<PointerMessage>,
) {
    for event in window_events.read() {
        translate_window_event(event, &mut tracker, |message| {
            pointer_messages.write(message);
        });
    }
}

pub fn dispatch_pointer_messages(
    mut messages: EventReader<PointerMessage>,
    mut context: ResMut<DotMapContext>,
    instances: Res<DotInstances>,
    mut tooltip: ResMut<TooltipOverlay>,
) {
    for message in messages.read() {
        context.handle(*message, &*instances, &mut *tooltip);
    }
}
