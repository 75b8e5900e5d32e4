//! Point picking against an ordered list of hit-testable entries.
//!
//! Sources list entries in paint order (back to front). The tester walks them
//! front to back and stops at the first entry whose bounds contain the point:
//! a shape or one of its parts resolves to the shape, a decoration (such as a
//! resize handle) resolves to nothing. Points that hit no entry are on the
//! canvas background.

use crate::shapes::ShapeId;
use kurbo::{Point, Rect};

/// What an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The shape itself.
    Shape(ShapeId),
    /// A child visual of a shape (border, fill); resolves to its owner.
    Part { owner: ShapeId },
    /// Decoration that is not a shape, e.g. an adorner.
    Decoration,
}

impl HitTarget {
    /// The shape this target resolves to.
    pub fn shape(self) -> Option<ShapeId> {
        match self {
            HitTarget::Shape(id) | HitTarget::Part { owner: id } => Some(id),
            HitTarget::Decoration => None,
        }
    }
}

/// A hit-testable rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    pub bounds: Rect,
    pub target: HitTarget,
}

impl HitEntry {
    pub fn new(bounds: Rect, target: HitTarget) -> Self {
        Self { bounds, target }
    }
}

/// Anything that can list hit entries in paint order.
pub trait HitTestSource {
    /// Entries back to front.
    fn hit_entries(&self) -> impl DoubleEndedIterator<Item = HitEntry> + '_;
}

impl HitTestSource for [HitEntry] {
    fn hit_entries(&self) -> impl DoubleEndedIterator<Item = HitEntry> + '_ {
        self.iter().copied()
    }
}

impl HitTestSource for Vec<HitEntry> {
    fn hit_entries(&self) -> impl DoubleEndedIterator<Item = HitEntry> + '_ {
        self.iter().copied()
    }
}

/// Two sources painted one above the other.
#[derive(Debug, Clone, Copy)]
pub struct HitStack<'a, B: ?Sized, A: ?Sized> {
    pub below: &'a B,
    pub above: &'a A,
}

impl<'a, B: HitTestSource + ?Sized, A: HitTestSource + ?Sized> HitStack<'a, B, A> {
    pub fn new(below: &'a B, above: &'a A) -> Self {
        Self { below, above }
    }
}

impl<B: HitTestSource + ?Sized, A: HitTestSource + ?Sized> HitTestSource for HitStack<'_, B, A> {
    fn hit_entries(&self) -> impl DoubleEndedIterator<Item = HitEntry> + '_ {
        self.below.hit_entries().chain(self.above.hit_entries())
    }
}

/// The topmost entry containing `point`, if any.
pub fn topmost_entry<S: HitTestSource + ?Sized>(source: &S, point: Point) -> Option<HitEntry> {
    source
        .hit_entries()
        .rev()
        .find(|entry| entry.bounds.contains(point))
}

/// The topmost shape under `point`.
///
/// Returns `None` for the background and when the topmost entry is a
/// decoration, even if a shape lies underneath it.
pub fn hit_test<S: HitTestSource + ?Sized>(source: &S, point: Point) -> Option<ShapeId> {
    topmost_entry(source, point).and_then(|entry| entry.target.shape())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_background_is_none() {
        let entries = vec![HitEntry::new(Rect::new(0.0, 0.0, 10.0, 10.0), HitTarget::Shape(Uuid::new_v4()))];
        assert_eq!(hit_test(&entries, Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn test_topmost_wins() {
        let back = Uuid::new_v4();
        let front = Uuid::new_v4();
        let entries = vec![
            HitEntry::new(Rect::new(0.0, 0.0, 100.0, 100.0), HitTarget::Shape(back)),
            HitEntry::new(Rect::new(50.0, 50.0, 150.0, 150.0), HitTarget::Shape(front)),
        ];
        assert_eq!(hit_test(&entries, Point::new(75.0, 75.0)), Some(front));
        assert_eq!(hit_test(&entries, Point::new(25.0, 25.0)), Some(back));
    }

    #[test]
    fn test_part_resolves_to_owner() {
        let owner = Uuid::new_v4();
        let entries = vec![
            HitEntry::new(Rect::new(0.0, 0.0, 100.0, 100.0), HitTarget::Shape(owner)),
            HitEntry::new(Rect::new(0.0, 0.0, 100.0, 10.0), HitTarget::Part { owner }),
        ];
        assert_eq!(hit_test(&entries, Point::new(5.0, 5.0)), Some(owner));
    }

    #[test]
    fn test_decoration_blocks_shape() {
        let shape = Uuid::new_v4();
        let shapes = vec![HitEntry::new(Rect::new(0.0, 0.0, 100.0, 100.0), HitTarget::Shape(shape))];
        let adorners = vec![HitEntry::new(Rect::new(-2.5, -2.5, 2.5, 2.5), HitTarget::Decoration)];
        let stack = HitStack::new(&shapes, &adorners);

        assert_eq!(hit_test(&stack, Point::new(1.0, 1.0)), None);
        assert_eq!(hit_test(&stack, Point::new(50.0, 50.0)), Some(shape));
    }
}
