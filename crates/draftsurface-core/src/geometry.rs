//! Drag rectangle normalization and drawing validity.

use kurbo::{Point, Rect, Vec2};

/// Rectangle spanned by a drag from `anchor` to `current`, normalized to a
/// top-left origin and non-negative size.
///
/// When the drag runs up or left past the canvas origin the rectangle is cut
/// at 0 instead of leaving the canvas. The far edge is not clamped. A NaN
/// coordinate yields a NaN dimension so the result fails [`is_valid_drawing`].
pub fn normalize_drag_rect(anchor: Point, current: Point) -> Rect {
    let (x0, x1) = normalize_span(anchor.x, current.x);
    let (y0, y1) = normalize_span(anchor.y, current.y);
    Rect { x0, y0, x1, y1 }
}

fn normalize_span(anchor: f64, current: f64) -> (f64, f64) {
    if current.is_nan() || anchor.is_nan() {
        (anchor, f64::NAN)
    } else if current >= anchor {
        (anchor, current)
    } else {
        (current.max(0.0).min(anchor), anchor)
    }
}

/// Whether a drawn rectangle may become a shape: neither dimension NaN and
/// both at least `min_size`.
pub fn is_valid_drawing(rect: Rect, min_size: f64) -> bool {
    let (w, h) = (rect.width(), rect.height());
    !w.is_nan() && !h.is_nan() && w >= min_size && h >= min_size
}

/// Translate `location` by `delta`, never going below 0 on either axis.
pub fn offset_clamped(location: Point, delta: Vec2) -> Point {
    Point::new((location.x + delta.x).max(0.0), (location.y + delta.y).max(0.0))
}
