//! Renderer trait abstraction.

use draftsurface_core::canvas::Canvas;
use draftsurface_core::interaction::InteractionController;
use draftsurface_core::ruler::RulerPair;
use draftsurface_core::shapes::{ContentMeasure, MeasureShape};
use draftsurface_core::surface::DesignSurface;
use kurbo::{Affine, Point, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
    #[error("Invalid ruler: {0}")]
    InvalidRuler(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Gesture state, for move previews and the draw preview.
    pub controller: Option<&'a InteractionController>,
    /// Sizes content-sized shapes. Taken from the controller when one is set.
    pub measure: &'a dyn MeasureShape,
    /// Rulers framing the canvas, painted in screen space.
    pub rulers: Option<&'a RulerPair>,
    /// Screen position of the canvas origin.
    pub canvas_origin: Point,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Page background.
    pub background_color: Color,
    /// Resize handle outline.
    pub selection_color: Color,
    /// Draw preview outline.
    pub preview_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            controller: None,
            measure: &ContentMeasure,
            rulers: None,
            canvas_origin: Point::ZERO,
            viewport_size,
            background_color: Color::WHITE,
            selection_color: Color::from_rgba8(0, 0, 255, 255),
            preview_color: Color::from_rgba8(0, 0, 255, 255),
        }
    }

    /// Context for a whole design surface, with the canvas placed at
    /// `canvas_origin`.
    pub fn for_surface(surface: &'a DesignSurface, canvas_origin: Point, viewport_size: Size) -> Self {
        Self::new(&surface.canvas, viewport_size)
            .with_controller(&surface.controller)
            .with_rulers(&surface.rulers)
            .with_canvas_origin(canvas_origin)
    }

    pub fn with_controller(mut self, controller: &'a InteractionController) -> Self {
        self.controller = Some(controller);
        self.measure = controller.measure();
        self
    }

    pub fn with_measure(mut self, measure: &'a dyn MeasureShape) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_rulers(mut self, rulers: &'a RulerPair) -> Self {
        self.rulers = Some(rulers);
        self
    }

    pub fn with_canvas_origin(mut self, origin: Point) -> Self {
        self.canvas_origin = origin;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Canvas to screen transform.
    pub fn canvas_transform(&self) -> Affine {
        Affine::translate(self.canvas_origin.to_vec2())
    }

    /// Reject viewports and rulers that cannot be painted.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(RendererError::InvalidViewport(format!("{width}x{height}")));
        }
        if !self.canvas_origin.x.is_finite() || !self.canvas_origin.y.is_finite() {
            return Err(RendererError::InvalidViewport(format!(
                "canvas origin {:?}",
                self.canvas_origin
            )));
        }
        if let Some(rulers) = self.rulers {
            for ruler in [&rulers.horizontal, &rulers.vertical] {
                if !ruler.anchor().is_finite() {
                    return Err(RendererError::InvalidRuler(format!(
                        "{:?} anchor {}",
                        ruler.orientation(),
                        ruler.anchor()
                    )));
                }
                if !ruler.thickness().is_finite() || ruler.thickness() <= 0.0 {
                    return Err(RendererError::InvalidRuler(format!(
                        "{:?} thickness {}",
                        ruler.orientation(),
                        ruler.thickness()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Trait for rendering backends.
///
/// Backends read the canvas; they never write shape geometry.
pub trait Renderer: Send + Sync {
    /// Build the scene for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
