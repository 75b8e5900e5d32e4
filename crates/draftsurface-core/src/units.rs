//! Conversion between device pixels and physical measurement units.
//!
//! Page sizing and ruler ticks both go through these functions, so there is
//! exactly one definition of what an inch or a centimeter is on screen.

use serde::{Deserialize, Serialize};

/// Device-independent pixels per inch.
pub const PX_PER_INCH: f64 = 96.0;
/// Device-independent pixels per centimeter (96 / 2.54).
pub const PX_PER_CM: f64 = 37.7952755905512;

/// Convert pixels to inches.
pub fn px_to_inch(px: f64) -> f64 {
    px / PX_PER_INCH
}

/// Convert inches to pixels.
pub fn inch_to_px(inch: f64) -> f64 {
    inch * PX_PER_INCH
}

/// Convert pixels to centimeters.
pub fn px_to_cm(px: f64) -> f64 {
    px / PX_PER_CM
}

/// Convert centimeters to pixels.
pub fn cm_to_px(cm: f64) -> f64 {
    cm * PX_PER_CM
}

/// Measurement unit used to display and enter page and ruler values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Inch,
    Centimeter,
}

impl Unit {
    /// Size of one unit in pixels.
    pub fn pixel_size(self) -> f64 {
        self.to_px(1.0)
    }

    /// Convert a value in this unit to pixels.
    pub fn to_px(self, value: f64) -> f64 {
        match self {
            Unit::Inch => inch_to_px(value),
            Unit::Centimeter => cm_to_px(value),
        }
    }

    /// Convert a pixel value to this unit.
    pub fn from_px(self, px: f64) -> f64 {
        match self {
            Unit::Inch => px_to_inch(px),
            Unit::Centimeter => px_to_cm(px),
        }
    }

    /// Cycle to the other unit.
    pub fn next(self) -> Self {
        match self {
            Unit::Inch => Unit::Centimeter,
            Unit::Centimeter => Unit::Inch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_factors() {
        assert!((inch_to_px(1.0) - 96.0).abs() < f64::EPSILON);
        assert!((px_to_inch(96.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cm_factor() {
        assert!((cm_to_px(1.0) - 37.795275590551).abs() < 1e-9);
        assert!((cm_to_px(2.54) - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for px in [0.0, 1.0, 13.37, 96.0, 500.5, -42.0] {
            assert!((inch_to_px(px_to_inch(px)) - px).abs() < 1e-9);
            assert!((cm_to_px(px_to_cm(px)) - px).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_dispatch() {
        assert!((Unit::Inch.pixel_size() - PX_PER_INCH).abs() < f64::EPSILON);
        assert!((Unit::Centimeter.pixel_size() - PX_PER_CM).abs() < f64::EPSILON);
        assert!((Unit::Centimeter.from_px(PX_PER_CM * 3.0) - 3.0).abs() < 1e-9);
        assert_eq!(Unit::default(), Unit::Inch);
        assert_eq!(Unit::Inch.next(), Unit::Centimeter);
    }
}
