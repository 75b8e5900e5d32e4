//! Ruler painting.

use draftsurface_core::ruler::{Ruler, RulerOrientation, RulerPair};
use kurbo::{Affine, Point, Rect, Vec2};
use peniko::Color;

use crate::renderer::{RenderResult, RendererError};
use crate::scene::Scene;

/// Label font size.
pub const LABEL_FONT_SIZE: f64 = 8.0;
/// Spacing of stacked glyphs on the vertical ruler.
pub const STACKED_GLYPH_ADVANCE: f64 = 8.0;

/// Ruler colours.
#[derive(Debug, Clone, Copy)]
pub struct RulerStyle {
    pub background: Color,
    pub foreground: Color,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0x38, 0x38, 0x38, 255),
            foreground: Color::from_rgba8(0x96, 0x96, 0x96, 255),
        }
    }
}

/// Paint one ruler in its local coordinates, placed by `transform`.
///
/// Major ticks span the full thickness; minor ticks grow from the inner edge.
/// Multi-glyph labels on the vertical ruler are stacked one glyph per line.
pub fn render_ruler(scene: &mut Scene, ruler: &Ruler, transform: Affine, style: &RulerStyle) -> RenderResult<()> {
    let thickness = ruler.thickness();
    let length = ruler.length();
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(RendererError::InvalidRuler(format!("thickness {thickness}")));
    }
    let length = if length.is_finite() { length.max(0.0) } else { 0.0 };
    let fg = style.foreground;

    let (background, baseline) = match ruler.orientation() {
        RulerOrientation::Horizontal => (
            Rect::new(0.0, 0.0, length, thickness),
            (Point::new(0.0, thickness), Point::new(length, thickness)),
        ),
        RulerOrientation::Vertical => (
            Rect::new(0.0, 0.0, thickness, length),
            (Point::new(thickness, 0.0), Point::new(thickness, length)),
        ),
    };
    scene.fill(transform, style.background, background);

    for tick in ruler.ticks() {
        let d = tick.offset;
        let reach = tick.minor_length().unwrap_or(thickness);
        let (p0, p1) = match ruler.orientation() {
            RulerOrientation::Horizontal => (Point::new(d, thickness - reach), Point::new(d, thickness)),
            RulerOrientation::Vertical => (Point::new(thickness - reach, d), Point::new(thickness, d)),
        };
        scene.line(transform, fg, p0, p1);
    }

    for label in ruler.labels() {
        match ruler.orientation() {
            RulerOrientation::Vertical if label.text.chars().count() > 1 => {
                for (i, glyph) in label.text.chars().enumerate() {
                    let position = label.position + Vec2::new(0.0, STACKED_GLYPH_ADVANCE * i as f64);
                    scene.text(transform, fg, glyph.to_string(), position, LABEL_FONT_SIZE);
                }
            }
            _ => scene.text(transform, fg, label.text, label.position, LABEL_FONT_SIZE),
        }
    }

    scene.line(transform, fg, baseline.0, baseline.1);
    Ok(())
}

/// Paint both rulers in screen space. The horizontal ruler starts right of
/// the vertical one, the vertical ruler starts below the horizontal one.
pub fn render_rulers(scene: &mut Scene, rulers: &RulerPair, style: &RulerStyle) -> RenderResult<()> {
    let h_transform = Affine::translate((rulers.vertical.thickness(), 0.0));
    let v_transform = Affine::translate((0.0, rulers.horizontal.thickness()));
    render_ruler(scene, &rulers.horizontal, h_transform, style)?;
    render_ruler(scene, &rulers.vertical, v_transform, style)
}
