//! Corner resize handles and the geometry of a resize drag.

use crate::input::CursorIcon;
use crate::shapes::{Shape, ShapeId, ShapeTrait};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Side length of a corner handle, in pixels.
pub const HANDLE_SIZE: f64 = 5.0;
/// Handle hit tolerance, in pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 5.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Point of `bounds` this corner sits on.
    pub fn point(self, bounds: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(bounds.x0, bounds.y0),
            Corner::TopRight => Point::new(bounds.x1, bounds.y0),
            Corner::BottomLeft => Point::new(bounds.x0, bounds.y1),
            Corner::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }

    /// Diagonal resize cursor for this corner.
    pub fn cursor(self) -> CursorIcon {
        match self {
            Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwse,
            Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNesw,
        }
    }

    fn moves_left_edge(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

/// A corner thumb drawn on a selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    pub corner: Corner,
    /// Handle centre, on the shape's corner.
    pub position: Point,
}

impl ResizeHandle {
    /// The square the handle is drawn in.
    pub fn rect(&self, size: f64) -> Rect {
        Rect::from_center_size(self.position, Size::new(size, size))
    }

    /// Check if a point is within `tolerance` of the handle centre.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// The four corner handles of `bounds`.
pub fn handles(bounds: Rect) -> [ResizeHandle; 4] {
    Corner::ALL.map(|corner| ResizeHandle {
        corner,
        position: corner.point(bounds),
    })
}

/// Find which corner handle (if any) is hit at the given point.
pub fn hit_test_handles(bounds: Rect, point: Point, tolerance: f64) -> Option<Corner> {
    handles(bounds)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.corner)
}

/// Size limits applied while resizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeLimits {
    /// Floor for width and height.
    pub min_size: f64,
    /// Ceiling, normally the parent container's extent.
    pub max: Size,
}

impl ResizeLimits {
    pub fn new(min_size: f64, max: Size) -> Self {
        Self { min_size, max }
    }

    /// No ceiling.
    pub fn unbounded(min_size: f64) -> Self {
        Self::new(min_size, Size::new(f64::INFINITY, f64::INFINITY))
    }

    fn clamp(&self, value: f64, max: f64) -> f64 {
        // The floor wins when the ceiling is below it.
        value.min(max).max(self.min_size)
    }
}

/// New bounds for a shape at `origin`/`size` whose `corner` was dragged by
/// the cumulative `delta`.
///
/// Edges the corner does not touch stay fixed. When a dimension is clamped the
/// moving edge stops, so the opposite edge never moves.
pub fn resize(corner: Corner, delta: Vec2, origin: Point, size: Size, limits: ResizeLimits) -> Rect {
    let (width, x) = if corner.moves_left_edge() {
        let width = limits.clamp(size.width - delta.x, limits.max.width);
        (width, origin.x - (width - size.width))
    } else {
        (limits.clamp(size.width + delta.x, limits.max.width), origin.x)
    };
    let (height, y) = if corner.moves_top_edge() {
        let height = limits.clamp(size.height - delta.y, limits.max.height);
        (height, origin.y - (height - size.height))
    } else {
        (limits.clamp(size.height + delta.y, limits.max.height), origin.y)
    };
    Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
}

/// A resize drag in progress on one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub shape_id: ShapeId,
    pub corner: Corner,
    /// Location before the drag.
    pub start_location: Point,
    /// Size before the drag, with unmeasured dimensions already resolved.
    pub start_size: Size,
    pub limits: ResizeLimits,
}

impl ResizeGesture {
    /// Start resizing `shape` from `corner`.
    ///
    /// A NaN width or height (content-sized shape) is replaced by the
    /// corresponding `measured` dimension before any delta is applied.
    pub fn begin(shape: &Shape, corner: Corner, measured: Size, limits: ResizeLimits) -> Self {
        let size = shape.size();
        let start_size = Size::new(
            if size.width.is_nan() { measured.width } else { size.width },
            if size.height.is_nan() { measured.height } else { size.height },
        );
        Self {
            shape_id: shape.id(),
            corner,
            start_location: shape.location(),
            start_size,
            limits,
        }
    }

    /// Bounds for the cumulative drag `delta`.
    pub fn bounds_for(&self, delta: Vec2) -> Rect {
        resize(self.corner, delta, self.start_location, self.start_size, self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(100.0, 100.0);
    const SIZE: Size = Size::new(80.0, 60.0);

    fn limits() -> ResizeLimits {
        ResizeLimits::unbounded(10.0)
    }

    fn assert_rect(actual: Rect, expected: Rect) {
        assert!((actual.x0 - expected.x0).abs() < 1e-9, "{actual:?} != {expected:?}");
        assert!((actual.y0 - expected.y0).abs() < 1e-9, "{actual:?} != {expected:?}");
        assert!((actual.x1 - expected.x1).abs() < 1e-9, "{actual:?} != {expected:?}");
        assert!((actual.y1 - expected.y1).abs() < 1e-9, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_bottom_right() {
        let r = resize(Corner::BottomRight, Vec2::new(20.0, -10.0), ORIGIN, SIZE, limits());
        assert_rect(r, Rect::new(100.0, 100.0, 200.0, 150.0));
    }

    #[test]
    fn test_top_right_keeps_bottom_fixed() {
        let r = resize(Corner::TopRight, Vec2::new(10.0, -15.0), ORIGIN, SIZE, limits());
        assert_rect(r, Rect::new(100.0, 85.0, 190.0, 160.0));
    }

    #[test]
    fn test_bottom_left_keeps_right_fixed() {
        let r = resize(Corner::BottomLeft, Vec2::new(30.0, 5.0), ORIGIN, SIZE, limits());
        assert_rect(r, Rect::new(130.0, 100.0, 180.0, 165.0));
    }

    #[test]
    fn test_top_left_keeps_bottom_right_fixed() {
        for delta in [Vec2::new(-25.0, -40.0), Vec2::new(30.0, 20.0), Vec2::new(69.0, -3.0)] {
            let r = resize(Corner::TopLeft, delta, ORIGIN, SIZE, limits());
            assert!((r.x1 - 180.0).abs() < 1e-9);
            assert!((r.y1 - 160.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_minimum_size_floor() {
        let r = resize(Corner::TopLeft, Vec2::new(500.0, 500.0), ORIGIN, SIZE, limits());
        assert!((r.width() - 10.0).abs() < 1e-9);
        assert!((r.height() - 10.0).abs() < 1e-9);
        // Opposite edge still fixed.
        assert!((r.x1 - 180.0).abs() < 1e-9);
        assert!((r.y1 - 160.0).abs() < 1e-9);

        let r = resize(Corner::BottomRight, Vec2::new(-500.0, -500.0), ORIGIN, SIZE, limits());
        assert_rect(r, Rect::new(100.0, 100.0, 110.0, 110.0));
    }

    #[test]
    fn test_round_trip() {
        let gesture_size = {
            let r = resize(Corner::BottomRight, Vec2::new(33.0, -12.0), ORIGIN, SIZE, limits());
            r.size()
        };
        let back = resize(Corner::BottomRight, Vec2::new(-33.0, 12.0), ORIGIN, gesture_size, limits());
        assert!((back.width() - SIZE.width).abs() < 1e-9);
        assert!((back.height() - SIZE.height).abs() < 1e-9);
    }

    #[test]
    fn test_parent_extent_caps_growth() {
        let limits = ResizeLimits::new(10.0, Size::new(120.0, 90.0));
        let r = resize(Corner::BottomRight, Vec2::new(500.0, 500.0), ORIGIN, SIZE, limits);
        assert!((r.width() - 120.0).abs() < 1e-9);
        assert!((r.height() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_gesture_resolves_nan_size() {
        let shape = Shape::size_to_content(Point::new(10.0, 10.0));
        let gesture = ResizeGesture::begin(&shape, Corner::BottomRight, Size::new(40.0, 30.0), limits());
        assert_eq!(gesture.start_size, Size::new(40.0, 30.0));

        let r = gesture.bounds_for(Vec2::new(5.0, 5.0));
        assert_rect(r, Rect::new(10.0, 10.0, 55.0, 45.0));
        assert!(!r.width().is_nan());
    }

    #[test]
    fn test_handle_hit() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(hit_test_handles(bounds, Point::new(99.0, 49.0), 5.0), Some(Corner::BottomRight));
        assert_eq!(hit_test_handles(bounds, Point::new(1.0, 1.0), 5.0), Some(Corner::TopLeft));
        assert_eq!(hit_test_handles(bounds, Point::new(50.0, 25.0), 5.0), None);
        assert_eq!(Corner::TopRight.cursor(), CursorIcon::ResizeNesw);
    }
}
