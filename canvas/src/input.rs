//! Input model: pointer buttons and the drag-to-pan gesture state.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. The map has a single gesture: dragging empty map area pans the
//! camera. Marker clicks are resolved by the engine before a drag can start.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Camera, Point};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `PointerEvent.button` code. Back/forward buttons map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Anchor captured when a pan drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Screen-space pointer position at pointer-down.
    pub anchor_screen: Point,
    /// Camera pan at pointer-down.
    pub anchor_pan: Point,
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the map by dragging empty space.
    Panning(DragState),
}

impl InputState {
    /// Start a pan drag anchored at `screen` and the camera's current pan.
    ///
    /// Replaces any drag already in progress.
    pub fn begin_drag(&mut self, screen: Point, camera: &Camera) {
        *self = Self::Panning(DragState { anchor_screen: screen, anchor_pan: camera.pan() });
    }

    /// Move the camera so the anchor follows the pointer.
    ///
    /// Returns `false` (and leaves the camera alone) when no drag is active.
    pub fn update_drag(&self, screen: Point, camera: &mut Camera) -> bool {
        let Self::Panning(drag) = self else {
            return false;
        };
        camera.set_pan(Point::new(
            drag.anchor_pan.x + (screen.x - drag.anchor_screen.x),
            drag.anchor_pan.y + (screen.y - drag.anchor_screen.y),
        ));
        true
    }

    /// Stop dragging. Idempotent; returns whether a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Panning(_))
    }
}
