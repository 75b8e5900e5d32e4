//! DraftSurface Core Library
//!
//! Platform-agnostic data model and pointer interaction logic for the
//! DraftSurface page designer: shapes, selection, hit testing, resizing,
//! rulers and units.

pub mod canvas;
pub mod document;
pub mod geometry;
pub mod hit_test;
pub mod input;
pub mod interaction;
pub mod observe;
pub mod page;
pub mod resize;
pub mod ruler;
pub mod selection;
pub mod settings;
pub mod shapes;
pub mod surface;
pub mod tools;
pub mod units;

pub use canvas::Canvas;
pub use document::{CanvasDocument, MeasuredDocument};
pub use hit_test::{HitEntry, HitStack, HitTarget, HitTestSource, hit_test};
pub use input::{CursorIcon, MouseButton, PointerEvent};
pub use interaction::{DragState, GestureMode, InteractionController, InteractionState};
pub use observe::{Observable, SubscriptionId};
pub use page::Page;
pub use resize::{Corner, ResizeGesture, ResizeHandle, ResizeLimits, HANDLE_SIZE};
pub use ruler::{Ruler, RulerOrientation, RulerPair, Tick, TickKind, TickLabel};
pub use selection::{SelectionEvent, SelectionModel};
pub use settings::{SettingsError, SettingsResult, SurfaceSettings};
pub use shapes::{ContentMeasure, FRAME_THICKNESS, MIN_SIZE, MeasureShape, Shape, ShapeId, ShapeKind, ShapeTrait};
pub use surface::DesignSurface;
pub use tools::ToolKind;
pub use units::Unit;
