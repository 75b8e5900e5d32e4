//! Canvas state: shapes, selection, page size and the current unit.

use crate::document::CanvasDocument;
use crate::geometry::is_valid_drawing;
use crate::observe::{Observable, SubscriptionId};
use crate::page::Page;
use crate::selection::{SelectionEvent, SelectionModel};
use crate::settings::SurfaceSettings;
use crate::shapes::{Shape, ShapeId, ShapeTrait};
use crate::units::Unit;
use kurbo::{Rect, Size};

/// Runtime canvas state. Owns every shape exclusively.
#[derive(Debug)]
pub struct Canvas {
    /// All shapes in paint order.
    pub document: CanvasDocument,
    /// Currently selected shapes.
    pub selection: SelectionModel,
    page: Page,
    unit: Observable<Unit>,
    min_shape_size: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(&SurfaceSettings::default())
    }
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(settings: &SurfaceSettings) -> Self {
        Self {
            document: CanvasDocument::new(),
            selection: SelectionModel::new(),
            page: Page::new(settings.page_width_px, settings.page_height_px),
            unit: Observable::new(settings.default_unit),
            min_shape_size: settings.min_shape_size,
        }
    }

    /// Smallest width/height a drawn shape may have.
    pub fn min_shape_size(&self) -> f64 {
        self.min_shape_size
    }

    /// Current measurement unit.
    pub fn unit(&self) -> Unit {
        self.unit.value()
    }

    /// Change the measurement unit. Stored pixel geometry is untouched.
    pub fn set_unit(&mut self, unit: Unit) -> bool {
        self.unit.set(unit)
    }

    /// Subscribe to unit changes.
    pub fn on_unit_changed(&mut self, callback: impl FnMut(&Unit, &Unit) + 'static) -> SubscriptionId {
        self.unit.subscribe(callback)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Page width in the current unit.
    pub fn page_width(&self) -> f64 {
        self.page.width(self.unit())
    }

    /// Page height in the current unit.
    pub fn page_height(&self) -> f64 {
        self.page.height(self.unit())
    }

    /// Set the page width, given in the current unit.
    pub fn set_page_width(&mut self, value: f64) {
        let unit = self.unit();
        self.page.set_width(unit, value);
    }

    /// Set the page height, given in the current unit.
    pub fn set_page_height(&mut self, value: f64) {
        let unit = self.unit();
        self.page.set_height(unit, value);
    }

    /// Canvas extent in pixels, the ceiling for resized shapes.
    pub fn extent(&self) -> Size {
        self.page.size_px()
    }

    /// Add a shape on top.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.document.add_shape(shape)
    }

    /// Remove a shape, dropping it from the selection as well.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.selection.forget(id);
        self.document.remove_shape(id)
    }

    /// Select a shape (clears previous selection).
    pub fn select(&mut self, id: ShapeId) {
        self.selection.select_only(&mut self.document, id);
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear_all(&mut self.document);
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(id)
    }

    /// Selected shapes in selection order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.selection
            .ids()
            .iter()
            .filter_map(|&id| self.document.get_shape(id))
    }

    /// Pending selection flag changes.
    pub fn drain_selection_events(&mut self) -> Vec<SelectionEvent> {
        self.selection.drain_events()
    }

    /// Turn a drawn rectangle into a shape and select it exclusively.
    ///
    /// Returns `None`, leaving the canvas untouched, when the rectangle is
    /// too small or has a NaN dimension.
    pub fn commit_drawing(&mut self, rect: Rect) -> Option<ShapeId> {
        if !is_valid_drawing(rect, self.min_shape_size) {
            log::debug!("Discarding drawing {:?}: below {} px", rect, self.min_shape_size);
            return None;
        }
        let id = self.add_shape(Shape::from_rect(rect));
        self.select(id);
        log::debug!("Created shape {} at {:?}", id, rect);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_canvas_selection() {
        let mut canvas = Canvas::default();
        let id = canvas.add_shape(Shape::new(Point::ZERO, Size::new(100.0, 100.0)));

        assert!(!canvas.is_selected(id));
        canvas.select(id);
        assert!(canvas.is_selected(id));
        assert_eq!(canvas.selected_shapes().count(), 1);
        canvas.clear_selection();
        assert!(!canvas.is_selected(id));
    }

    #[test]
    fn test_remove_selected_shape() {
        let mut canvas = Canvas::default();
        let id = canvas.add_shape(Shape::new(Point::ZERO, Size::new(100.0, 100.0)));
        canvas.select(id);

        assert!(canvas.remove_shape(id).is_some());
        assert!(canvas.selection.is_empty());
        assert!(canvas.document.is_empty());
    }

    #[test]
    fn test_commit_drawing() {
        let mut canvas = Canvas::default();
        let id = canvas.commit_drawing(Rect::new(50.0, 50.0, 120.0, 130.0)).unwrap();
        let shape = canvas.document.get_shape(id).unwrap();
        assert_eq!(shape.location(), Point::new(50.0, 50.0));
        assert_eq!(shape.size(), Size::new(70.0, 80.0));
        assert!(shape.is_selected());
        assert_eq!(canvas.selection.ids(), &[id]);
    }

    #[test]
    fn test_commit_drawing_too_small() {
        let mut canvas = Canvas::default();
        let existing = canvas.add_shape(Shape::new(Point::ZERO, Size::new(20.0, 20.0)));
        canvas.select(existing);

        assert!(canvas.commit_drawing(Rect::new(50.0, 50.0, 55.0, 52.0)).is_none());
        assert_eq!(canvas.document.len(), 1);
        assert_eq!(canvas.selection.ids(), &[existing]);
    }

    #[test]
    fn test_page_size_follows_unit() {
        let mut canvas = Canvas::default();
        assert!((canvas.page_width() - 8.5).abs() < 1e-9);

        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);
        canvas.on_unit_changed(move |_, new| flag.set(*new == Unit::Centimeter));

        assert!(canvas.set_unit(Unit::Centimeter));
        assert!(notified.get());
        assert!((canvas.page_width() - 21.59).abs() < 1e-9);
        // Stored pixels unchanged.
        assert!((canvas.extent().width - 816.0).abs() < 1e-9);

        canvas.set_page_height(10.0);
        assert!((canvas.page().height_px - 377.952755905512).abs() < 1e-9);
    }
}
