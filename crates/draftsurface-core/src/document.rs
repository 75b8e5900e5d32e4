//! The canvas's shape collection in paint order.

use crate::hit_test::{HitEntry, HitTarget, HitTestSource};
use crate::shapes::{MeasureShape, Shape, ShapeId, ShapeTrait};
use kurbo::Rect;
use std::collections::HashMap;

/// All shapes on the canvas, keyed by ID, with their z-order.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front).
    z_order: Vec<ShapeId>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of all others.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Shape IDs back to front.
    pub fn z_order(&self) -> &[ShapeId] {
        &self.z_order
    }

    /// Bring a shape to the front (topmost).
    pub fn bring_to_front(&mut self, id: ShapeId) {
        if self.shapes.contains_key(&id) {
            self.z_order.retain(|&shape_id| shape_id != id);
            self.z_order.push(id);
        }
    }

    /// Send a shape to the back (bottommost).
    pub fn send_to_back(&mut self, id: ShapeId) {
        if self.shapes.contains_key(&id) {
            self.z_order.retain(|&shape_id| shape_id != id);
            self.z_order.insert(0, id);
        }
    }

    /// Get the bounding box of all measured shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .values()
            .filter(|shape| shape.is_measured())
            .map(|shape| shape.bounds())
            .reduce(|acc, bounds| acc.union(bounds))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Hit-testable view with content-sized shapes resolved by `measure`.
    pub fn measured<'a>(&'a self, measure: &'a dyn MeasureShape) -> MeasuredDocument<'a> {
        MeasuredDocument { document: self, measure }
    }
}

/// Shapes at the bounds they are drawn at.
#[derive(Clone, Copy)]
pub struct MeasuredDocument<'a> {
    document: &'a CanvasDocument,
    measure: &'a dyn MeasureShape,
}

impl HitTestSource for MeasuredDocument<'_> {
    fn hit_entries(&self) -> impl DoubleEndedIterator<Item = HitEntry> + '_ {
        self.document.shapes_ordered().map(|shape| HitEntry {
            bounds: self.measure.resolved_bounds(shape),
            target: HitTarget::Shape(shape.id()),
        })
    }
}
