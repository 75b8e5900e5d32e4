//! The design surface: a canvas framed by two rulers and driven by pointer
//! input.

use crate::canvas::Canvas;
use crate::input::{CursorIcon, PointerEvent};
use crate::interaction::InteractionController;
use crate::ruler::RulerPair;
use crate::settings::SurfaceSettings;
use crate::shapes::MeasureShape;
use crate::tools::ToolKind;
use crate::units::Unit;
use kurbo::{Point, Size};

/// Everything a host window needs to show and edit one page.
#[derive(Debug)]
pub struct DesignSurface {
    pub canvas: Canvas,
    pub rulers: RulerPair,
    pub controller: InteractionController,
    settings: SurfaceSettings,
}

impl Default for DesignSurface {
    fn default() -> Self {
        Self::new(SurfaceSettings::default())
    }
}

impl DesignSurface {
    pub fn new(settings: SurfaceSettings) -> Self {
        let mut rulers = RulerPair::new(settings.ruler_thickness);
        rulers.set_unit(settings.default_unit);
        Self {
            canvas: Canvas::new(&settings),
            rulers,
            controller: InteractionController::new(&settings),
            settings,
        }
    }

    /// Use `measure` for content-sized shapes.
    pub fn with_measure(mut self, measure: impl MeasureShape + 'static) -> Self {
        self.controller = self.controller.with_measure(measure);
        self
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    pub fn unit(&self) -> Unit {
        self.canvas.unit()
    }

    /// Switch units on the canvas and both rulers.
    pub fn set_unit(&mut self, unit: Unit) {
        if self.canvas.set_unit(unit) {
            log::debug!("Unit changed to {:?}", unit);
        }
        self.rulers.set_unit(unit);
    }

    /// Cycle to the next unit.
    pub fn toggle_unit(&mut self) {
        self.set_unit(self.unit().next());
    }

    /// Host layout pass: where the canvas origin sits on screen and how big
    /// the viewport is.
    pub fn layout(&mut self, canvas_origin: Point, viewport: Size) {
        self.rulers.sync_to_canvas_origin(canvas_origin);
        self.rulers.set_viewport(viewport);
    }

    pub fn tool(&self) -> ToolKind {
        self.controller.tool()
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.controller.set_tool(tool);
    }

    pub fn cursor(&self) -> CursorIcon {
        self.controller.cursor()
    }

    /// Feed a pointer event in canvas coordinates. Returns true when a
    /// redraw is needed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.controller.handle_event(&mut self.canvas, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    #[test]
    fn test_unit_propagates_to_rulers() {
        let mut surface = DesignSurface::default();
        assert_eq!(surface.rulers.horizontal.unit(), Unit::Inch);

        surface.set_unit(Unit::Centimeter);
        assert_eq!(surface.unit(), Unit::Centimeter);
        assert_eq!(surface.rulers.horizontal.unit(), Unit::Centimeter);
        assert_eq!(surface.rulers.vertical.unit(), Unit::Centimeter);
        assert!((surface.canvas.page_width() - 21.59).abs() < 1e-9);

        surface.toggle_unit();
        assert_eq!(surface.unit(), Unit::Inch);
    }

    #[test]
    fn test_default_unit_from_settings() {
        let settings = SurfaceSettings {
            default_unit: Unit::Centimeter,
            ..SurfaceSettings::default()
        };
        let surface = DesignSurface::new(settings);
        assert_eq!(surface.unit(), Unit::Centimeter);
        assert_eq!(surface.rulers.vertical.unit(), Unit::Centimeter);
    }

    #[test]
    fn test_layout_anchors_rulers() {
        let mut surface = DesignSurface::default();
        surface.layout(Point::new(120.0, 80.0), Size::new(800.0, 600.0));
        assert!((surface.rulers.horizontal.anchor() - 100.0).abs() < f64::EPSILON);
        assert!((surface.rulers.vertical.anchor() - 60.0).abs() < f64::EPSILON);
        assert!((surface.rulers.horizontal.length() - 800.0).abs() < f64::EPSILON);
        assert!((surface.rulers.vertical.length() - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_through_surface() {
        let mut surface = DesignSurface::default();
        surface.set_tool(ToolKind::Rectangle);
        assert_eq!(surface.cursor(), CursorIcon::Crosshair);

        surface.handle_pointer(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: Point::new(40.0, 40.0),
            left_pressed: true,
        });
        assert!(surface.handle_pointer(PointerEvent::Up {
            position: Point::new(40.0, 40.0),
            button: MouseButton::Left,
        }));
        assert_eq!(surface.canvas.document.len(), 1);
        assert_eq!(surface.tool(), ToolKind::Select);
    }
}
