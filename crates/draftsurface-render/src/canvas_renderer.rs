//! Display-list renderer for the design surface.

use draftsurface_core::canvas::Canvas;
use draftsurface_core::settings::SurfaceSettings;
use draftsurface_core::shapes::{MeasureShape, ShapeTrait};
use draftsurface_core::surface::DesignSurface;
use kurbo::{Point, Rect};

use crate::decorations::DecorationLayer;
use crate::renderer::{RenderContext, RenderResult, Renderer};
use crate::ruler_view::{RulerStyle, render_rulers};
use crate::scene::{Scene, render_preview, render_shape};

/// Builds a [`Scene`] per frame: page, shapes, adorners, draw preview and
/// rulers, in that order.
///
/// Content-sized shapes are painted at the size the context's measurer
/// gives them, which is the controller's when one is attached.
#[derive(Debug, Clone, Default)]
pub struct CanvasRenderer {
    scene: Scene,
    decorations: DecorationLayer,
    ruler_style: RulerStyle,
}

impl CanvasRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with handles sized from `settings`.
    pub fn from_settings(settings: &SurfaceSettings) -> Self {
        Self {
            decorations: DecorationLayer::new(settings.handle_size),
            ..Self::default()
        }
    }

    pub fn with_ruler_style(mut self, style: RulerStyle) -> Self {
        self.ruler_style = style;
        self
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    pub fn decorations(&self) -> &DecorationLayer {
        &self.decorations
    }

    /// Attach and detach adorners for selection changes since the last call.
    pub fn sync_selection(&mut self, canvas: &mut Canvas, measure: &dyn MeasureShape) {
        self.decorations.sync(canvas, measure);
    }

    /// [`sync_selection`](Self::sync_selection) with the surface's own
    /// measurer.
    pub fn sync_surface(&mut self, surface: &mut DesignSurface) {
        self.decorations.sync(&mut surface.canvas, surface.controller.measure());
    }
}

impl Renderer for CanvasRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.scene.reset();

        let transform = ctx.canvas_transform();
        let canvas = ctx.canvas;
        let location = |id| ctx.controller.and_then(|c| c.visual_location(canvas, id));

        let page = Rect::from_origin_size(Point::ZERO, canvas.extent());
        let background = self.background_color(ctx);
        self.scene.fill(transform, background, page);

        for shape in canvas.document.shapes_ordered() {
            let origin = location(shape.id()).unwrap_or_else(|| shape.location());
            let size = ctx.measure.resolved_size(shape);
            render_shape(&mut self.scene, shape, Rect::from_origin_size(origin, size), transform);
        }

        self.decorations.refresh(canvas, ctx.measure, location);
        self.decorations.render(&mut self.scene, transform, ctx.selection_color);

        if let Some(rect) = ctx.controller.and_then(|c| c.preview_rect()) {
            render_preview(&mut self.scene, rect, transform, ctx.preview_color);
        }

        if let Some(rulers) = ctx.rulers {
            render_rulers(&mut self.scene, rulers, &self.ruler_style)?;
        }

        log::trace!("Built scene with {} nodes", self.scene.len());
        Ok(())
    }
}
