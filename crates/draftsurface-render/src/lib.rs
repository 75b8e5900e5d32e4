//! DraftSurface Render Library
//!
//! Rendering adapter for DraftSurface: maps canvas entities, selection
//! adorners, the draw preview and rulers to a backend-neutral display list.

mod canvas_renderer;
pub mod decorations;
mod renderer;
pub mod ruler_view;
pub mod scene;

pub use canvas_renderer::CanvasRenderer;
pub use decorations::{Adorner, DecorationLayer};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use ruler_view::{RulerStyle, render_ruler, render_rulers};
pub use scene::{FRAME_THICKNESS, Geometry, Scene, VisualNode};
