//! Shape entities placed on the canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum committed width and height of a shape, in pixels.
pub const MIN_SIZE: f64 = 10.0;

/// Border thickness of a frame, in pixels.
pub const FRAME_THICKNESS: f64 = 10.0;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// What a shape depicts. Only drives the display name; geometry is always
/// an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Rectangular frame with a solid border.
    #[default]
    Frame,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Frame => "Frame",
        }
    }

    /// Size of the visual with no content: the border on each side.
    pub fn content_size(self) -> Size {
        match self {
            ShapeKind::Frame => Size::new(FRAME_THICKNESS * 2.0, FRAME_THICKNESS * 2.0),
        }
    }
}

/// The capability every canvas element needs to take part in hit-testing,
/// selection, moving and resizing.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Human readable name shown by hosts.
    fn display_name(&self) -> &str;

    /// Top-left corner in canvas pixel space.
    fn location(&self) -> Point;

    /// Move the top-left corner.
    fn set_location(&mut self, location: Point);

    /// Current size. Either dimension may be NaN when the element sizes to
    /// its content and has not been measured.
    fn size(&self) -> Size;

    /// Whether the element is part of the selection.
    fn is_selected(&self) -> bool;

    /// Axis-aligned bounds.
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.location(), self.size())
    }

    /// Check if a point hits this element.
    fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

/// Supplies the size a shape would take when sized to its content.
///
/// Hit testing, resize handles and painting all resolve unmeasured shapes
/// through the same measurer, so what is drawn is what can be picked.
pub trait MeasureShape {
    fn desired_size(&self, shape: &Shape) -> Size;

    /// The shape's size with each NaN dimension replaced by the desired one.
    fn resolved_size(&self, shape: &Shape) -> Size {
        let size = shape.size();
        if shape.is_measured() {
            return size;
        }
        let desired = self.desired_size(shape);
        Size::new(
            if size.width.is_nan() { desired.width } else { size.width },
            if size.height.is_nan() { desired.height } else { size.height },
        )
    }

    /// Bounds the shape occupies on screen.
    fn resolved_bounds(&self, shape: &Shape) -> Rect {
        Rect::from_origin_size(shape.location(), self.resolved_size(shape))
    }
}

/// Measures shapes by their empty visual, see [`ShapeKind::content_size`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentMeasure;

impl MeasureShape for ContentMeasure {
    fn desired_size(&self, shape: &Shape) -> Size {
        shape.kind.content_size()
    }
}

/// A rectangular shape on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    pub kind: ShapeKind,
    location: Point,
    size: Size,
    #[serde(skip)]
    selected: bool,
}

impl Shape {
    /// Create a shape at `location` with an explicit size.
    pub fn new(location: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ShapeKind::default(),
            location,
            size,
            selected: false,
        }
    }

    /// Create a shape occupying `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.origin(), rect.size())
    }

    /// Create a shape that sizes to its content (NaN width and height).
    pub fn size_to_content(location: Point) -> Self {
        Self::new(location, Size::new(f64::NAN, f64::NAN))
    }

    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set width and height.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Set location and size together.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.location = bounds.origin();
        self.size = bounds.size();
    }

    /// Whether both dimensions are known (not NaN).
    pub fn is_measured(&self) -> bool {
        !self.size.width.is_nan() && !self.size.height.is_nan()
    }

    /// Only the selection model flips this, so the flag and the selection
    /// set stay in step.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl ShapeTrait for Shape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn display_name(&self) -> &str {
        self.kind.name()
    }

    fn location(&self) -> Point {
        self.location
    }

    fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}
