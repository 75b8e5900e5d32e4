//! Page dimensions, stored in pixels and read or written in a unit.

use crate::units::Unit;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// The drawable page. Switching units never changes the stored pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub width_px: f64,
    pub height_px: f64,
}

impl Page {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self { width_px, height_px }
    }

    /// Page extent in pixels.
    pub fn size_px(&self) -> Size {
        Size::new(self.width_px, self.height_px)
    }

    pub fn width(&self, unit: Unit) -> f64 {
        unit.from_px(self.width_px)
    }

    pub fn height(&self, unit: Unit) -> f64 {
        unit.from_px(self.height_px)
    }

    pub fn set_width(&mut self, unit: Unit, value: f64) {
        self.width_px = unit.to_px(value);
    }

    pub fn set_height(&mut self, unit: Unit, value: f64) {
        self.height_px = unit.to_px(value);
    }
}
