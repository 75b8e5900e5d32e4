//! Normalized pointer events delivered by the host, and the cursor
//! affordance reported back to it.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in the canvas's local coordinate space.
///
/// Once the controller holds capture the host keeps delivering moves and the
/// release even when the pointer leaves the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
        /// Whether the left button is held.
        left_pressed: bool,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    /// The host revoked pointer capture (focus change, window lost, ...).
    CaptureLost,
}

impl PointerEvent {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position, .. }
            | PointerEvent::Up { position, .. } => Some(*position),
            PointerEvent::CaptureLost => None,
        }
    }
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    /// Arrow.
    #[default]
    Default,
    /// Draw tool armed.
    Crosshair,
    /// Over a selected shape, or moving one.
    Move,
    /// Over a top-left or bottom-right handle.
    ResizeNwse,
    /// Over a top-right or bottom-left handle.
    ResizeNesw,
}
