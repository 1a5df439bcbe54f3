//! Gesture lifecycle and incremental stroke rendering.
//!
//! ```text
//!            on_gesture_start
//!   ┌──────┐ ───────────────► ┌─────────┐
//!   │ Idle │                  │ Drawing │ ◄── on_gesture_move
//!   └──────┘ ◄─────────────── └─────────┘
//!              on_gesture_end
//! ```
//!
//! `clear` is accepted in both states and never changes the state.
use egui::Pos2;
use log::{debug, info};

use crate::geometry::{self, CubicSegment};
use crate::guide;
use crate::style::StrokeStyle;
use crate::surface::{Canvas, DrawingSurface};

/// Number of buffered points needed before a segment can be interpolated
pub const WINDOW_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing,
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing => "Drawing",
        }
    }
}

/// Owns the canvas and turns a stream of gesture samples into smoothed ink.
///
/// Only the newest segment is drawn on each move, so the cost per event does
/// not grow with the length of the gesture.
#[derive(Debug)]
pub struct StrokeEngine<C: Canvas = DrawingSurface> {
    canvas: C,
    guide: StrokeStyle,
    state: GestureState,
    // Grows for the whole gesture; only the last WINDOW_SIZE entries are read
    points: Vec<Pos2>,
}

impl<C: Canvas> StrokeEngine<C> {
    /// Take ownership of `canvas`, wiping it and painting the guide
    pub fn new(canvas: C) -> Self {
        Self::with_guide(canvas, guide::guide_style())
    }

    pub fn with_guide(canvas: C, guide: StrokeStyle) -> Self {
        let mut engine = Self {
            canvas,
            guide,
            state: GestureState::Idle,
            points: Vec::new(),
        };
        engine.reset_canvas();
        engine
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn gesture_state(&self) -> GestureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == GestureState::Drawing
    }

    pub fn buffered_points(&self) -> &[Pos2] {
        &self.points
    }

    /// Begin a gesture at `point`, given in logical surface coordinates.
    ///
    /// Nothing is drawn yet: the first points only seed the interpolation
    /// window, so ink shows up from the fourth sample on.
    pub fn on_gesture_start(&mut self, point: Pos2) {
        debug_assert!(point.x.is_finite() && point.y.is_finite(), "non-finite point {point:?}");

        if self.is_drawing() {
            debug!("Gesture restarted without an end, dropping {} points", self.points.len());
        }
        self.state = GestureState::Drawing;
        self.points.clear();
        self.points.push(point);
        debug!("Gesture started at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Record a sample and draw the newest smoothed segment.
    ///
    /// Ignored while idle. `style` is read for this segment only; ink that is
    /// already on the canvas keeps the style it was drawn with.
    pub fn on_gesture_move(&mut self, point: Pos2, style: &StrokeStyle) {
        if !self.is_drawing() {
            return;
        }
        debug_assert!(point.x.is_finite() && point.y.is_finite(), "non-finite point {point:?}");

        self.points.push(point);
        if let Some(segment) = self.latest_segment() {
            self.canvas.stroke_cubic(&segment, style);
        }
    }

    pub fn on_gesture_end(&mut self) {
        if self.is_drawing() {
            debug!("Gesture ended after {} points", self.points.len());
        }
        self.state = GestureState::Idle;
        self.points.clear();
    }

    /// Wipe the canvas back to just the guide.
    ///
    /// An active gesture keeps going: later moves draw onto the fresh canvas.
    pub fn clear(&mut self) {
        info!("🧹 Clearing canvas (gesture state: {})", self.state.name());
        self.reset_canvas();
    }

    /// Consume a pending clear request, returning whether one was acted on
    pub fn apply_clear(&mut self, trigger: &mut ClearTrigger) -> bool {
        if trigger.take() {
            self.clear();
            true
        } else {
            false
        }
    }

    fn latest_segment(&self) -> Option<CubicSegment> {
        match self.points.as_slice() {
            [.., p0, p1, p2, p3] => Some(geometry::catmull_rom_segment(*p0, *p1, *p2, *p3)),
            _ => None,
        }
    }

    fn reset_canvas(&mut self) {
        self.canvas.wipe();
        guide::draw_guide_with(&mut self.canvas, &self.guide);
    }
}

/// Edge-triggered clear request from the shell.
///
/// Firing it twice before it is taken still clears only once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearTrigger {
    pending: bool,
}

impl ClearTrigger {
    pub fn fire(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Return the pending request and reset it
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
