//! Resize adorners attached to selected shapes.
//!
//! The layer follows the selection through [`SelectionEvent`]s: a shape that
//! becomes selected gets an adorner, a deselected one loses it. Adorners are
//! painted above all shapes and take part in hit testing as decorations, so a
//! point on a handle never resolves to the shape underneath.

use draftsurface_core::canvas::Canvas;
use draftsurface_core::hit_test::{HitEntry, HitTarget, HitTestSource};
use draftsurface_core::resize::{HANDLE_SIZE, ResizeHandle, handles};
use draftsurface_core::selection::SelectionEvent;
use draftsurface_core::shapes::{MeasureShape, ShapeId, ShapeTrait};
use kurbo::{Affine, Point, Rect, Stroke};
use peniko::Color;

use crate::scene::{Geometry, Scene};

/// Corner handles around one selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adorner {
    pub shape_id: ShapeId,
    /// Bounds of the adorned shape at the last refresh.
    pub bounds: Rect,
}

impl Adorner {
    pub fn handles(&self) -> [ResizeHandle; 4] {
        handles(self.bounds)
    }
}

/// All adorners currently attached.
#[derive(Debug, Clone)]
pub struct DecorationLayer {
    adorners: Vec<Adorner>,
    handle_size: f64,
}

impl Default for DecorationLayer {
    fn default() -> Self {
        Self::new(HANDLE_SIZE)
    }
}

impl DecorationLayer {
    pub fn new(handle_size: f64) -> Self {
        Self {
            adorners: Vec::new(),
            handle_size,
        }
    }

    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    pub fn adorners(&self) -> &[Adorner] {
        &self.adorners
    }

    pub fn is_adorned(&self, id: ShapeId) -> bool {
        self.adorners.iter().any(|a| a.shape_id == id)
    }

    /// Drain the canvas's selection notifications and attach or detach
    /// adorners accordingly.
    pub fn sync(&mut self, canvas: &mut Canvas, measure: &dyn MeasureShape) {
        for event in canvas.drain_selection_events() {
            match event {
                SelectionEvent::Selected(id) => {
                    if self.is_adorned(id) {
                        continue;
                    }
                    if let Some(shape) = canvas.document.get_shape(id) {
                        let bounds = measure.resolved_bounds(shape);
                        log::debug!("Attaching adorner to {}", id);
                        self.adorners.push(Adorner { shape_id: id, bounds });
                    }
                }
                SelectionEvent::Deselected(id) => {
                    log::debug!("Detaching adorner from {}", id);
                    self.adorners.retain(|a| a.shape_id != id);
                }
            }
        }
    }

    /// Re-read adorned shapes' bounds. Adorners of shapes that no longer
    /// exist are dropped. `location` gives the position the shape is drawn
    /// at, which differs from the stored one during a move.
    pub fn refresh(
        &mut self,
        canvas: &Canvas,
        measure: &dyn MeasureShape,
        location: impl Fn(ShapeId) -> Option<Point>,
    ) {
        self.adorners.retain_mut(|adorner| {
            let Some(shape) = canvas.document.get_shape(adorner.shape_id) else {
                return false;
            };
            let origin = location(adorner.shape_id).unwrap_or_else(|| shape.location());
            adorner.bounds = Rect::from_origin_size(origin, measure.resolved_size(shape));
            true
        });
    }

    /// Paint every handle: white square with a 1 px outline.
    pub fn render(&self, scene: &mut Scene, transform: Affine, outline: Color) {
        let stroke = Stroke::new(1.0);
        for handle in self.adorners.iter().flat_map(|a| a.handles()) {
            let rect = handle.rect(self.handle_size);
            scene.fill(transform, Color::WHITE, rect);
            scene.stroke(&stroke, transform, outline, Geometry::Rect(rect));
        }
    }
}

impl HitTestSource for DecorationLayer {
    fn hit_entries(&self) -> impl DoubleEndedIterator<Item = HitEntry> + '_ {
        self.adorners
            .iter()
            .flat_map(|a| a.handles())
            .map(|handle| HitEntry::new(handle.rect(self.handle_size), HitTarget::Decoration))
    }
}
