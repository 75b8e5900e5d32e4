//! Ruler tick generation.
//!
//! A ruler is described by three numbers: the screen offset where logical
//! zero sits (`anchor`, may be negative), the pixel size of one unit, and the
//! visible length. Ticks are produced lazily and recomputed from scratch on
//! every call; nothing is cached between renders.

use crate::observe::{Observable, SubscriptionId};
use crate::units::Unit;
use kurbo::{Point, Size};
use std::cmp::Ordering;

/// Subdivisions per unit (one major plus seven minor ticks).
pub const SUBDIVISIONS: usize = 8;
/// Minor ticks between two major ticks.
pub const MINOR_TICKS_PER_UNIT: usize = SUBDIVISIONS - 1;
/// Default ruler thickness in pixels.
pub const DEFAULT_RULER_THICKNESS: f64 = 20.0;

/// Horizontal label inset from the major tick.
const LABEL_INSET_X: f64 = 4.0;
/// Vertical label inset from the ruler's top edge.
const LABEL_INSET_Y: f64 = 1.0;
/// Distance of vertical ruler labels from the ruler's inner edge.
const VERTICAL_LABEL_FROM_EDGE: f64 = 15.0;
/// Vertical label inset below the major tick.
const VERTICAL_LABEL_INSET: f64 = 2.0;

/// Ruler orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulerOrientation {
    Horizontal,
    Vertical,
}

/// Kind of tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Unit boundary, labelled with the signed unit count from the origin.
    Major { label: i64 },
    /// One of the seven subdivisions between unit boundaries (index 0..7).
    Minor { index: usize },
}

/// A single tick along the ruler axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Offset along the ruler axis, in screen pixels.
    pub offset: f64,
    pub kind: TickKind,
}

impl Tick {
    pub fn is_major(&self) -> bool {
        matches!(self.kind, TickKind::Major { .. })
    }

    /// Unit label for major ticks.
    pub fn label(&self) -> Option<i64> {
        match self.kind {
            TickKind::Major { label } => Some(label),
            TickKind::Minor { .. } => None,
        }
    }

    /// Painted length of a minor tick, `None` for major ticks (full thickness).
    pub fn minor_length(&self) -> Option<f64> {
        match self.kind {
            TickKind::Major { .. } => None,
            TickKind::Minor { index } => Some(minor_tick_length(index)),
        }
    }
}

/// Length of the minor tick at `index`: 4, 6, 4, 8 repeating.
pub fn minor_tick_length(index: usize) -> f64 {
    if index % 4 == 3 {
        8.0
    } else if index % 2 == 0 {
        4.0
    } else {
        6.0
    }
}

/// The inputs of a tick computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerGeometry {
    /// Screen offset of logical zero.
    pub anchor: f64,
    /// Pixel size of one unit.
    pub unit_px: f64,
    /// On-screen extent of the ruler.
    pub visible_length: f64,
}

impl RulerGeometry {
    pub fn new(anchor: f64, unit_px: f64, visible_length: f64) -> Self {
        Self {
            anchor,
            unit_px,
            visible_length,
        }
    }

    /// Lazy tick sequence. Calling this again restarts from the beginning.
    pub fn ticks(&self) -> Ticks {
        let degenerate = !self.anchor.is_finite() || !self.unit_px.is_finite() || self.unit_px <= 0.0;
        Ticks {
            geometry: *self,
            phase: if degenerate { Phase::Done } else { Phase::Forward },
            unit: 0,
            sub: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Forward,
    Backward,
    Done,
}

/// Iterator over the ticks of a [`RulerGeometry`].
///
/// Walks forward from the anchor while the unit boundary is before the
/// visible length, then backward from one unit before the anchor down to one
/// unit before the ruler's start.
#[derive(Debug, Clone)]
pub struct Ticks {
    geometry: RulerGeometry,
    phase: Phase,
    unit: i64,
    sub: usize,
}

impl Ticks {
    fn minor_step(&self) -> f64 {
        self.geometry.unit_px / SUBDIVISIONS as f64
    }

    fn advance(&mut self) {
        self.sub += 1;
        if self.sub == SUBDIVISIONS {
            self.sub = 0;
            self.unit += 1;
        }
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let g = self.geometry;
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Forward => {
                    let base = g.anchor + self.unit as f64 * g.unit_px;
                    if base.partial_cmp(&g.visible_length) != Some(Ordering::Less) {
                        self.phase = Phase::Backward;
                        self.unit = 1;
                        self.sub = 0;
                        continue;
                    }
                    let tick = if self.sub == 0 {
                        Tick {
                            offset: base,
                            kind: TickKind::Major { label: self.unit },
                        }
                    } else {
                        Tick {
                            offset: base + self.sub as f64 * self.minor_step(),
                            kind: TickKind::Minor { index: self.sub - 1 },
                        }
                    };
                    self.advance();
                    return Some(tick);
                }
                Phase::Backward => {
                    let base = g.anchor - self.unit as f64 * g.unit_px;
                    if base < -g.unit_px {
                        self.phase = Phase::Done;
                        continue;
                    }
                    // Minor indices are mirrored so they count toward zero.
                    let tick = if self.sub == 0 {
                        Tick {
                            offset: base,
                            kind: TickKind::Major { label: -self.unit },
                        }
                    } else {
                        Tick {
                            offset: base + self.sub as f64 * self.minor_step(),
                            kind: TickKind::Minor {
                                index: MINOR_TICKS_PER_UNIT - self.sub,
                            },
                        }
                    };
                    self.advance();
                    return Some(tick);
                }
            }
        }
    }
}

/// Text and placement of a major tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Top-left of the label in ruler-local coordinates.
    pub position: Point,
}

/// One on-screen ruler.
#[derive(Debug)]
pub struct Ruler {
    orientation: RulerOrientation,
    anchor: Observable<f64>,
    unit: Unit,
    thickness: f64,
    length: f64,
    revision: u64,
}

impl Ruler {
    pub fn new(orientation: RulerOrientation) -> Self {
        Self {
            orientation,
            anchor: Observable::new(0.0),
            unit: Unit::default(),
            thickness: DEFAULT_RULER_THICKNESS,
            length: 0.0,
            revision: 0,
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn orientation(&self) -> RulerOrientation {
        self.orientation
    }

    pub fn anchor(&self) -> f64 {
        self.anchor.value()
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Cross-axis size (height of a horizontal ruler, width of a vertical one).
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Visible extent along the axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Bumped whenever an input of the tick computation changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_anchor(&mut self, anchor: f64) {
        if self.anchor.set(anchor) {
            self.revision += 1;
        }
    }

    /// Subscribe to anchor changes.
    pub fn on_anchor_changed(&mut self, callback: impl FnMut(&f64, &f64) + 'static) -> SubscriptionId {
        self.anchor.subscribe(callback)
    }

    pub fn set_unit(&mut self, unit: Unit) {
        if self.unit != unit {
            self.unit = unit;
            self.revision += 1;
        }
    }

    pub fn set_length(&mut self, length: f64) {
        if self.length != length {
            self.length = length;
            self.revision += 1;
        }
    }

    pub fn geometry(&self) -> RulerGeometry {
        RulerGeometry::new(self.anchor(), self.unit.pixel_size(), self.length)
    }

    pub fn ticks(&self) -> Ticks {
        self.geometry().ticks()
    }

    /// Labels of all major ticks, positioned for this orientation.
    pub fn labels(&self) -> impl Iterator<Item = TickLabel> + '_ {
        self.ticks().filter_map(move |tick| {
            let label = tick.label()?;
            let position = match self.orientation {
                RulerOrientation::Horizontal => {
                    Point::new(tick.offset + LABEL_INSET_X, LABEL_INSET_Y)
                }
                RulerOrientation::Vertical => Point::new(
                    self.thickness - VERTICAL_LABEL_FROM_EDGE,
                    tick.offset + VERTICAL_LABEL_INSET,
                ),
            };
            Some(TickLabel {
                text: label.to_string(),
                position,
            })
        })
    }
}

/// The horizontal and vertical rulers framing a canvas.
#[derive(Debug)]
pub struct RulerPair {
    pub horizontal: Ruler,
    pub vertical: Ruler,
}

impl RulerPair {
    pub fn new(thickness: f64) -> Self {
        Self {
            horizontal: Ruler::new(RulerOrientation::Horizontal).with_thickness(thickness),
            vertical: Ruler::new(RulerOrientation::Vertical).with_thickness(thickness),
        }
    }

    /// Re-anchor both rulers from the canvas's on-screen origin.
    ///
    /// Offsets are relative to the rulers' own origin, which sits past the
    /// other ruler's thickness.
    pub fn sync_to_canvas_origin(&mut self, origin: Point) {
        let h_anchor = origin.x - self.vertical.thickness();
        let v_anchor = origin.y - self.horizontal.thickness();
        self.horizontal.set_anchor(h_anchor);
        self.vertical.set_anchor(v_anchor);
    }

    /// Resize both rulers to a viewport.
    pub fn set_viewport(&mut self, size: Size) {
        self.horizontal.set_length(size.width);
        self.vertical.set_length(size.height);
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.horizontal.set_unit(unit);
        self.vertical.set_unit(unit);
    }
}

impl Default for RulerPair {
    fn default() -> Self {
        Self::new(DEFAULT_RULER_THICKNESS)
    }
}
