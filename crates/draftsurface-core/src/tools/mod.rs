//! Tool selection for the design surface.

use crate::input::CursorIcon;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    /// Pick, move and resize shapes.
    #[default]
    Select,
    /// Drag out a new frame.
    Rectangle,
}

impl ToolKind {
    /// Whether a press with this tool starts a drawing gesture.
    pub fn draws(self) -> bool {
        matches!(self, ToolKind::Rectangle)
    }

    /// Cursor shown while the tool is active and nothing more specific
    /// applies.
    pub fn cursor(self) -> CursorIcon {
        match self {
            ToolKind::Select => CursorIcon::Default,
            ToolKind::Rectangle => CursorIcon::Crosshair,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Rectangle => "Rectangle",
        }
    }
}
