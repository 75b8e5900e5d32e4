//! Pointer gesture handling: drawing, selecting, moving and resizing shapes.
//!
//! One gesture is a press, any number of moves and a release, with the
//! pointer captured for its whole duration. While captured, further presses
//! are ignored. Losing capture ends the gesture exactly like a release at the
//! last known pointer position.

use crate::canvas::Canvas;
use crate::geometry::{normalize_drag_rect, offset_clamped};
use crate::hit_test::hit_test;
use crate::input::{CursorIcon, MouseButton, PointerEvent};
use crate::resize::{Corner, ResizeGesture, ResizeLimits, hit_test_handles};
use crate::settings::SurfaceSettings;
use crate::shapes::{ContentMeasure, MeasureShape, ShapeId, ShapeTrait};
use crate::tools::ToolKind;
use kurbo::{Point, Rect};
use std::fmt;

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// No gesture.
    Idle,
    /// Draw press captured, no move yet.
    Armed,
    /// Draw gesture with a live preview.
    Drawing,
    MovingSelection,
    ResizingHandle,
}

/// Kind of gesture a press started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    DrawingRect,
    MovingSelection,
    ResizingHandle,
}

/// In-progress position of a shape being moved.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MoveTarget {
    id: ShapeId,
    /// Location when the gesture started.
    origin: Point,
    /// Location shown while dragging, committed on release.
    preview: Point,
}

/// State of the captured gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub mode: GestureMode,
    /// Press position.
    pub anchor: Point,
    /// Last pointer position seen.
    pub current: Point,
    /// Corner being dragged, for resize gestures.
    pub active_handle: Option<Corner>,
    /// Live preview of a draw gesture, created on the first move.
    pub candidate_rect: Option<Rect>,
    /// Shapes carried by a move gesture.
    moves: Vec<MoveTarget>,
    pub resize: Option<ResizeGesture>,
}

impl DragState {
    fn new(mode: GestureMode, anchor: Point) -> Self {
        Self {
            mode,
            anchor,
            current: anchor,
            active_handle: None,
            candidate_rect: None,
            moves: Vec::new(),
            resize: None,
        }
    }
}

/// Drives the canvas from pointer events.
pub struct InteractionController {
    tool: ToolKind,
    /// `Some` while the pointer is captured.
    drag: Option<DragState>,
    cursor: CursorIcon,
    hovered: Option<ShapeId>,
    handle_hit_tolerance: f64,
    handle_size: f64,
    revert_to_select: bool,
    measure: Box<dyn MeasureShape>,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("tool", &self.tool)
            .field("drag", &self.drag)
            .field("cursor", &self.cursor)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&SurfaceSettings::default())
    }
}

impl InteractionController {
    pub fn new(settings: &SurfaceSettings) -> Self {
        Self {
            tool: ToolKind::default(),
            drag: None,
            cursor: CursorIcon::Default,
            hovered: None,
            handle_hit_tolerance: settings.handle_hit_tolerance,
            handle_size: settings.handle_size,
            revert_to_select: settings.revert_to_select_after_draw,
            measure: Box::new(ContentMeasure),
        }
    }

    /// Use `measure` to size content-sized shapes for picking and resizing.
    pub fn with_measure(mut self, measure: impl MeasureShape + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Measurer for content-sized shapes. Renderers should paint with the
    /// same one.
    pub fn measure(&self) -> &dyn MeasureShape {
        self.measure.as_ref()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools. A gesture in progress keeps its own mode.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool == tool {
            return;
        }
        log::debug!("Tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        if self.drag.is_none() {
            self.cursor = tool.cursor();
        }
    }

    /// Cursor the host should display.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Shape under the pointer at the last hover.
    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered
    }

    /// Whether a gesture holds pointer capture.
    pub fn is_captured(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn state(&self) -> InteractionState {
        match &self.drag {
            None => InteractionState::Idle,
            Some(drag) => match drag.mode {
                GestureMode::DrawingRect if drag.candidate_rect.is_none() => InteractionState::Armed,
                GestureMode::DrawingRect => InteractionState::Drawing,
                GestureMode::MovingSelection => InteractionState::MovingSelection,
                GestureMode::ResizingHandle => InteractionState::ResizingHandle,
            },
        }
    }

    /// Live draw preview, if any.
    pub fn preview_rect(&self) -> Option<Rect> {
        self.drag.as_ref().and_then(|drag| drag.candidate_rect)
    }

    /// Where a shape should be drawn: its in-progress position while it is
    /// being moved, its stored location otherwise.
    pub fn visual_location(&self, canvas: &Canvas, id: ShapeId) -> Option<Point> {
        let moving = self
            .drag
            .iter()
            .flat_map(|drag| drag.moves.iter())
            .find(|target| target.id == id)
            .map(|target| target.preview);
        moving.or_else(|| canvas.document.get_shape(id).map(|shape| shape.location()))
    }

    /// Feed one pointer event. Returns true when the canvas needs a redraw.
    pub fn handle_event(&mut self, canvas: &mut Canvas, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, button } => self.handle_press(canvas, position, button),
            PointerEvent::Move { position, left_pressed } => {
                if left_pressed && self.drag.is_some() {
                    self.handle_drag(canvas, position)
                } else {
                    self.handle_hover(canvas, position)
                }
            }
            PointerEvent::Up { position, button } => {
                if button != MouseButton::Left || self.drag.is_none() {
                    return false;
                }
                self.finish(canvas, Some(position))
            }
            PointerEvent::CaptureLost => {
                if self.drag.is_none() {
                    return false;
                }
                log::debug!("Pointer capture lost during {:?}", self.state());
                self.finish(canvas, None)
            }
        }
    }

    fn handle_press(&mut self, canvas: &mut Canvas, point: Point, button: MouseButton) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        if self.drag.is_some() {
            log::trace!("Ignoring press at {:?}: gesture in progress", point);
            return false;
        }

        if self.tool.draws() {
            self.drag = Some(DragState::new(GestureMode::DrawingRect, point));
            self.cursor = CursorIcon::Crosshair;
            log::debug!("Idle -> Armed at {:?}", point);
            return true;
        }

        if let Some((id, corner)) = self.handle_at(canvas, point) {
            if let Some(shape) = canvas.document.get_shape(id) {
                let measured = self.measure.desired_size(shape);
                let limits = ResizeLimits::new(canvas.min_shape_size(), canvas.extent());
                let gesture = ResizeGesture::begin(shape, corner, measured, limits);
                let mut drag = DragState::new(GestureMode::ResizingHandle, point);
                drag.active_handle = Some(corner);
                drag.resize = Some(gesture);
                self.drag = Some(drag);
                self.cursor = corner.cursor();
                log::debug!("Idle -> ResizingHandle: {:?} of {}", corner, id);
                return true;
            }
        }

        let hit = apply_press_selection(canvas, self.measure.as_ref(), point);
        let mut drag = DragState::new(GestureMode::MovingSelection, point);
        drag.moves = canvas
            .selected_shapes()
            .map(|shape| MoveTarget {
                id: shape.id(),
                origin: shape.location(),
                preview: shape.location(),
            })
            .collect();
        self.cursor = if hit.is_some() { CursorIcon::Move } else { CursorIcon::Default };
        log::debug!("Idle -> MovingSelection with {} shape(s)", drag.moves.len());
        self.drag = Some(drag);
        true
    }

    fn handle_drag(&mut self, canvas: &mut Canvas, point: Point) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        drag.current = point;
        match drag.mode {
            GestureMode::DrawingRect => {
                if drag.candidate_rect.is_none() {
                    log::debug!("Armed -> Drawing");
                }
                drag.candidate_rect = Some(normalize_drag_rect(drag.anchor, point));
                true
            }
            GestureMode::MovingSelection => {
                let delta = point - drag.anchor;
                for target in &mut drag.moves {
                    target.preview = offset_clamped(target.origin, delta);
                }
                !drag.moves.is_empty()
            }
            GestureMode::ResizingHandle => {
                let Some(gesture) = drag.resize else {
                    return false;
                };
                let bounds = gesture.bounds_for(point - drag.anchor);
                match canvas.document.get_shape_mut(gesture.shape_id) {
                    Some(shape) => {
                        shape.set_bounds(bounds);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Pointer movement without a gesture: only the cursor changes.
    fn handle_hover(&mut self, canvas: &Canvas, point: Point) -> bool {
        let hovered = hit_test(&canvas.document.measured(self.measure.as_ref()), point);
        let cursor = if self.drag.is_some() {
            self.cursor
        } else {
            self.hover_cursor(canvas, point, hovered)
        };
        let changed = cursor != self.cursor || hovered != self.hovered;
        self.cursor = cursor;
        self.hovered = hovered;
        changed
    }

    fn hover_cursor(&self, canvas: &Canvas, point: Point, hovered: Option<ShapeId>) -> CursorIcon {
        if self.tool.draws() {
            return CursorIcon::Crosshair;
        }
        if let Some((_, corner)) = self.handle_at(canvas, point) {
            return corner.cursor();
        }
        match hovered {
            Some(id) if canvas.is_selected(id) => CursorIcon::Move,
            _ => CursorIcon::Default,
        }
    }

    /// Corner handle of a selected shape under `point`, topmost first. A
    /// handle picks within the tolerance or anywhere on its painted square.
    fn handle_at(&self, canvas: &Canvas, point: Point) -> Option<(ShapeId, Corner)> {
        let reach = self.handle_hit_tolerance.max(self.handle_size / 2.0);
        canvas
            .document
            .shapes_ordered()
            .rev()
            .filter(|shape| shape.is_selected())
            .find_map(|shape| {
                let bounds = self.measure.resolved_bounds(shape);
                hit_test_handles(bounds, point, reach).map(|corner| (shape.id(), corner))
            })
    }

    /// End the gesture. `release` is the pointer position for a release and
    /// `None` when capture was lost.
    fn finish(&mut self, canvas: &mut Canvas, release: Option<Point>) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let point = release.unwrap_or(drag.current);
        let is_click = release.is_some_and(|p| p == drag.anchor);

        match drag.mode {
            GestureMode::DrawingRect if is_click => {
                apply_press_selection(canvas, self.measure.as_ref(), point);
                self.revert_tool();
                log::debug!("Drawing click at {:?}, no shape created", point);
            }
            GestureMode::DrawingRect => {
                let rect = normalize_drag_rect(drag.anchor, point);
                if canvas.commit_drawing(rect).is_some() {
                    self.revert_tool();
                    log::debug!("Drawing -> Idle, committed {:?}", rect);
                } else {
                    log::trace!("Drawing -> Idle, discarded {:?}", rect);
                }
            }
            GestureMode::MovingSelection if is_click => {
                apply_press_selection(canvas, self.measure.as_ref(), point);
                log::debug!("MovingSelection -> Idle (click)");
            }
            GestureMode::MovingSelection => {
                let delta = point - drag.anchor;
                for target in &drag.moves {
                    if let Some(shape) = canvas.document.get_shape_mut(target.id) {
                        shape.set_location(offset_clamped(target.origin, delta));
                    }
                }
                log::debug!("MovingSelection -> Idle, moved {} shape(s) by {:?}", drag.moves.len(), delta);
            }
            GestureMode::ResizingHandle => {
                if let Some(gesture) = drag.resize {
                    let bounds = gesture.bounds_for(point - drag.anchor);
                    if let Some(shape) = canvas.document.get_shape_mut(gesture.shape_id) {
                        shape.set_bounds(bounds);
                    }
                    log::debug!("ResizingHandle -> Idle, {} now {:?}", gesture.shape_id, bounds);
                }
            }
        }

        self.hovered = hit_test(&canvas.document.measured(self.measure.as_ref()), point);
        self.cursor = self.hover_cursor(canvas, point, self.hovered);
        true
    }

    fn revert_tool(&mut self) {
        if self.revert_to_select && self.tool != ToolKind::Select {
            log::debug!("Tool {} -> Select", self.tool.name());
            self.tool = ToolKind::Select;
        }
    }
}

/// Press-time selection: select the hit shape unless it is already selected,
/// clear the selection when nothing is hit. Returns the hit shape.
fn apply_press_selection(canvas: &mut Canvas, measure: &dyn MeasureShape, point: Point) -> Option<ShapeId> {
    let hit = hit_test(&canvas.document.measured(measure), point);
    match hit {
        Some(id) if !canvas.is_selected(id) => canvas.select(id),
        Some(_) => {}
        None => canvas.clear_selection(),
    }
    hit
}
