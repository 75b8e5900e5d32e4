//! Backend-neutral display list.
//!
//! A [`Scene`] is a flat, paint-ordered list of visual nodes that any drawing
//! backend can replay. Shapes are mapped to nodes here; the core never sees
//! these types.

pub use draftsurface_core::shapes::FRAME_THICKNESS;
use draftsurface_core::shapes::{Shape, ShapeKind};
use kurbo::{Affine, Line, Point, Rect, Stroke};
use peniko::Color;

/// Dash pattern of the draw preview outline.
pub const PREVIEW_DASHES: [f64; 2] = [3.0, 2.0];

/// Frame border colour (#707070).
pub fn frame_color() -> Color {
    Color::from_rgba8(0x70, 0x70, 0x70, 255)
}

/// Stroked geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Rect(Rect),
    Line(Line),
}

/// One paint command.
#[derive(Debug, Clone)]
pub enum VisualNode {
    Fill {
        transform: Affine,
        color: Color,
        rect: Rect,
    },
    Stroke {
        transform: Affine,
        stroke: Stroke,
        color: Color,
        geometry: Geometry,
    },
    Text {
        transform: Affine,
        text: String,
        /// Top-left of the text box.
        position: Point,
        font_size: f64,
        color: Color,
    },
}

impl VisualNode {
    pub fn transform(&self) -> Affine {
        match self {
            VisualNode::Fill { transform, .. }
            | VisualNode::Stroke { transform, .. }
            | VisualNode::Text { transform, .. } => *transform,
        }
    }
}

/// Paint-ordered visual nodes for one frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<VisualNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all nodes.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn fill(&mut self, transform: Affine, color: Color, rect: Rect) {
        self.nodes.push(VisualNode::Fill { transform, color, rect });
    }

    pub fn stroke(&mut self, stroke: &Stroke, transform: Affine, color: Color, geometry: Geometry) {
        self.nodes.push(VisualNode::Stroke {
            transform,
            stroke: stroke.clone(),
            color,
            geometry,
        });
    }

    /// Stroke a 1 px line.
    pub fn line(&mut self, transform: Affine, color: Color, p0: Point, p1: Point) {
        self.stroke(&Stroke::new(1.0), transform, color, Geometry::Line(Line::new(p0, p1)));
    }

    pub fn text(&mut self, transform: Affine, color: Color, text: impl Into<String>, position: Point, font_size: f64) {
        self.nodes.push(VisualNode::Text {
            transform,
            text: text.into(),
            position,
            font_size,
            color,
        });
    }

    pub fn nodes(&self) -> &[VisualNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append another scene's nodes on top.
    pub fn append(&mut self, other: &Scene) {
        self.nodes.extend_from_slice(&other.nodes);
    }
}

/// Paint a shape's visual at `bounds`.
pub fn render_shape(scene: &mut Scene, shape: &Shape, bounds: Rect, transform: Affine) {
    match shape.kind {
        ShapeKind::Frame => render_frame(scene, bounds, transform),
    }
}

/// Solid border drawn inside `bounds`. A frame thinner than its border is
/// painted solid.
pub fn render_frame(scene: &mut Scene, bounds: Rect, transform: Affine) {
    if !bounds.is_finite() {
        return;
    }
    if bounds.width() <= FRAME_THICKNESS || bounds.height() <= FRAME_THICKNESS {
        scene.fill(transform, frame_color(), bounds);
        return;
    }
    let centerline = bounds.inset(-FRAME_THICKNESS / 2.0);
    scene.stroke(
        &Stroke::new(FRAME_THICKNESS),
        transform,
        frame_color(),
        Geometry::Rect(centerline),
    );
}

/// Dashed outline of the rectangle being drawn.
pub fn render_preview(scene: &mut Scene, rect: Rect, transform: Affine, color: Color) {
    let stroke = Stroke::new(1.0).with_dashes(0.0, PREVIEW_DASHES);
    scene.stroke(&stroke, transform, color, Geometry::Rect(rect));
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftsurface_core::ShapeTrait;

    #[test]
    fn test_frame_is_border_inside_bounds() {
        let mut scene = Scene::new();
        render_frame(&mut scene, Rect::new(0.0, 0.0, 100.0, 50.0), Affine::IDENTITY);
        assert_eq!(scene.len(), 1);
        match &scene.nodes()[0] {
            VisualNode::Stroke { stroke, geometry, color, .. } => {
                assert!((stroke.width - FRAME_THICKNESS).abs() < f64::EPSILON);
                assert_eq!(*geometry, Geometry::Rect(Rect::new(5.0, 5.0, 95.0, 45.0)));
                assert_eq!(color.to_rgba8(), frame_color().to_rgba8());
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_small_frame_is_solid() {
        let mut scene = Scene::new();
        render_frame(&mut scene, Rect::new(0.0, 0.0, 10.0, 40.0), Affine::IDENTITY);
        assert!(matches!(scene.nodes()[0], VisualNode::Fill { .. }));
    }

    #[test]
    fn test_unmeasured_frame_not_painted() {
        let mut scene = Scene::new();
        let shape = Shape::size_to_content(Point::new(5.0, 5.0));
        render_shape(&mut scene, &shape, Rect::from_origin_size(Point::new(5.0, 5.0), shape.size()), Affine::IDENTITY);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_preview_is_dashed() {
        let mut scene = Scene::new();
        let blue = Color::from_rgba8(0, 0, 255, 255);
        render_preview(&mut scene, Rect::new(50.0, 50.0, 120.0, 130.0), Affine::IDENTITY, blue);
        match &scene.nodes()[0] {
            VisualNode::Stroke { stroke, geometry, .. } => {
                assert_eq!(&stroke.dash_pattern[..], &PREVIEW_DASHES[..]);
                assert!((stroke.width - 1.0).abs() < f64::EPSILON);
                assert_eq!(*geometry, Geometry::Rect(Rect::new(50.0, 50.0, 120.0, 130.0)));
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_scene_reset() {
        let mut scene = Scene::new();
        scene.line(Affine::IDENTITY, Color::WHITE, Point::ZERO, Point::new(1.0, 1.0));
        scene.text(Affine::IDENTITY, Color::WHITE, "1", Point::ZERO, 8.0);
        assert_eq!(scene.len(), 2);
        scene.reset();
        assert!(scene.is_empty());
    }
}
