//! Selection set and its shape flags.
//!
//! The selection is an ordered list of shape IDs. Every member has its
//! `selected` flag set and every other shape has it cleared; both are only
//! ever changed together through this module.

use crate::document::CanvasDocument;
use crate::shapes::ShapeId;

/// Flag flip notification, consumed by whatever draws selection decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(ShapeId),
    Deselected(ShapeId),
}

/// The set of currently selected shapes.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    ids: Vec<ShapeId>,
    events: Vec<SelectionEvent>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the only selected shape.
    ///
    /// A no-op when it already is the sole member. Unknown IDs clear the
    /// selection and are not added.
    pub fn select_only(&mut self, document: &mut CanvasDocument, id: ShapeId) {
        if self.ids.len() == 1 && self.ids[0] == id {
            return;
        }
        self.clear_all(document);
        self.add(document, id);
    }

    /// Deselect everything.
    pub fn clear_all(&mut self, document: &mut CanvasDocument) {
        for id in std::mem::take(&mut self.ids) {
            self.flag(document, id, false);
        }
    }

    /// Add a shape to the selection. Returns false if it was already a
    /// member or does not exist.
    pub fn add(&mut self, document: &mut CanvasDocument, id: ShapeId) -> bool {
        if self.contains(id) || document.get_shape(id).is_none() {
            return false;
        }
        self.ids.push(id);
        self.flag(document, id, true);
        true
    }

    /// Remove a shape from the selection. Returns false if it was not a member.
    pub fn remove(&mut self, document: &mut CanvasDocument, id: ShapeId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&member| member != id);
        if self.ids.len() == before {
            return false;
        }
        self.flag(document, id, false);
        true
    }

    /// Flip membership of a shape. Returns the new membership.
    pub fn toggle(&mut self, document: &mut CanvasDocument, id: ShapeId) -> bool {
        if self.remove(document, id) {
            false
        } else {
            self.add(document, id)
        }
    }

    /// Forget a shape that was deleted from the document.
    pub fn forget(&mut self, id: ShapeId) {
        if let Some(pos) = self.ids.iter().position(|&member| member == id) {
            self.ids.remove(pos);
            self.events.push(SelectionEvent::Deselected(id));
        }
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected IDs in selection order.
    pub fn ids(&self) -> &[ShapeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Take the pending flag-change notifications.
    pub fn drain_events(&mut self) -> Vec<SelectionEvent> {
        std::mem::take(&mut self.events)
    }

    fn flag(&mut self, document: &mut CanvasDocument, id: ShapeId, selected: bool) {
        if let Some(shape) = document.get_shape_mut(id) {
            shape.set_selected(selected);
        }
        self.events.push(if selected {
            SelectionEvent::Selected(id)
        } else {
            SelectionEvent::Deselected(id)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Shape, ShapeTrait};
    use kurbo::{Point, Size};

    fn doc_with_two() -> (CanvasDocument, ShapeId, ShapeId) {
        let mut doc = CanvasDocument::new();
        let a = doc.add_shape(Shape::new(Point::new(0.0, 0.0), Size::new(50.0, 50.0)));
        let b = doc.add_shape(Shape::new(Point::new(100.0, 0.0), Size::new(50.0, 50.0)));
        (doc, a, b)
    }

    fn flag(doc: &CanvasDocument, id: ShapeId) -> bool {
        doc.get_shape(id).map(|s| s.is_selected()).unwrap_or(false)
    }

    #[test]
    fn test_select_only_replaces_previous() {
        let (mut doc, a, b) = doc_with_two();
        let mut selection = SelectionModel::new();

        selection.select_only(&mut doc, a);
        assert!(flag(&doc, a));

        selection.select_only(&mut doc, b);
        assert_eq!(selection.ids(), &[b]);
        assert!(!flag(&doc, a));
        assert!(flag(&doc, b));
    }

    #[test]
    fn test_select_only_same_shape_is_noop() {
        let (mut doc, a, _) = doc_with_two();
        let mut selection = SelectionModel::new();
        selection.select_only(&mut doc, a);
        selection.drain_events();

        selection.select_only(&mut doc, a);
        assert!(selection.drain_events().is_empty());
        assert!(flag(&doc, a));
    }

    #[test]
    fn test_clear_all() {
        let (mut doc, a, b) = doc_with_two();
        let mut selection = SelectionModel::new();
        selection.add(&mut doc, a);
        selection.add(&mut doc, b);
        assert_eq!(selection.len(), 2);

        selection.clear_all(&mut doc);
        assert!(selection.is_empty());
        assert!(!flag(&doc, a));
        assert!(!flag(&doc, b));
    }

    #[test]
    fn test_toggle() {
        let (mut doc, a, _) = doc_with_two();
        let mut selection = SelectionModel::new();
        assert!(selection.toggle(&mut doc, a));
        assert!(flag(&doc, a));
        assert!(!selection.toggle(&mut doc, a));
        assert!(!flag(&doc, a));
    }

    #[test]
    fn test_unknown_id_not_added() {
        let (mut doc, _, _) = doc_with_two();
        let mut selection = SelectionModel::new();
        assert!(!selection.add(&mut doc, uuid::Uuid::new_v4()));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_events_follow_flags() {
        let (mut doc, a, b) = doc_with_two();
        let mut selection = SelectionModel::new();
        selection.select_only(&mut doc, a);
        selection.select_only(&mut doc, b);
        assert_eq!(
            selection.drain_events(),
            vec![
                SelectionEvent::Selected(a),
                SelectionEvent::Deselected(a),
                SelectionEvent::Selected(b),
            ]
        );
    }

    #[test]
    fn test_forget_deleted_shape() {
        let (mut doc, a, _) = doc_with_two();
        let mut selection = SelectionModel::new();
        selection.select_only(&mut doc, a);
        doc.remove_shape(a);
        selection.forget(a);
        assert!(selection.is_empty());
    }
}
