use egui::{Context, PointerButton, Pos2, Rect, Vec2};

use crate::engine::StrokeEngine;
use crate::style::StrokeStyle;
use crate::surface::Canvas;

/// Maps positions on the displayed canvas to logical surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapping {
    /// Where the canvas is shown, in screen coordinates
    pub display: Rect,
    /// Logical resolution of the surface
    pub logical: Vec2,
}

impl SurfaceMapping {
    pub fn new(display: Rect, logical: Vec2) -> Self {
        Self { display, logical }
    }

    /// Rescale a screen position into logical coordinates.
    ///
    /// The display's top-left corner maps to `(0, 0)` and its bottom-right
    /// corner to `(logical.x, logical.y)`.
    pub fn to_logical(&self, pos: Pos2) -> Pos2 {
        let size = self.display.size();
        debug_assert!(size.x > 0.0 && size.y > 0.0, "empty display rect {:?}", self.display);

        Pos2::new(
            (pos.x - self.display.min.x) / size.x * self.logical.x,
            (pos.y - self.display.min.y) / size.y * self.logical.y,
        )
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.display.contains(pos)
    }
}

/// One observation of the primary pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// `None` once the pointer has left the window
    pub position: Option<Pos2>,
    /// Whether the primary button (or a touch) is held
    pub down: bool,
}

/// Gesture-level events in logical surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(Pos2),
    Move(Pos2),
    End,
}

impl GestureEvent {
    /// Forward this event to the engine
    pub fn apply<C: Canvas>(&self, engine: &mut StrokeEngine<C>, style: &StrokeStyle) {
        match *self {
            Self::Start(point) => engine.on_gesture_start(point),
            Self::Move(point) => engine.on_gesture_move(point, style),
            Self::End => engine.on_gesture_end(),
        }
    }
}

/// Turns pointer samples into gesture events for a single pointer.
///
/// A gesture starts only on a fresh press inside the canvas and ends on
/// release or as soon as the pointer leaves the canvas.
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: bool,
    was_down: bool,
    last_pos: Option<Pos2>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Button state as of the last processed sample
    pub fn pointer_down(&self) -> bool {
        self.was_down
    }

    pub fn process(
        &mut self,
        sample: PointerSample,
        mapping: &SurfaceMapping,
    ) -> Option<GestureEvent> {
        let pressed = sample.down && !self.was_down;
        self.was_down = sample.down;

        let inside = sample.position.filter(|pos| mapping.contains(*pos));

        if !self.active {
            return match inside {
                Some(pos) if pressed => {
                    self.active = true;
                    self.last_pos = Some(pos);
                    Some(GestureEvent::Start(mapping.to_logical(pos)))
                }
                _ => None,
            };
        }

        match inside {
            Some(pos) if sample.down => {
                if self.last_pos == Some(pos) {
                    return None;
                }
                self.last_pos = Some(pos);
                Some(GestureEvent::Move(mapping.to_logical(pos)))
            }
            _ => {
                self.active = false;
                self.last_pos = None;
                Some(GestureEvent::End)
            }
        }
    }
}

/// Collect every pointer sample delivered this frame, in order.
///
/// egui coalesces the pointer position per frame; reading the raw events keeps
/// the intermediate moves, which the smoothing needs at fast drawing speeds.
pub fn collect_pointer_samples(ctx: &Context, was_down: bool) -> Vec<PointerSample> {
    let mut samples = Vec::new();

    ctx.input(|input| {
        let mut down = was_down;

        for event in &input.events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    samples.push(PointerSample { position: Some(*pos), down });
                }
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    down = *pressed;
                    samples.push(PointerSample { position: Some(*pos), down });
                }
                egui::Event::PointerGone => {
                    samples.push(PointerSample { position: None, down });
                }
                _ => {}
            }
        }
    });

    samples
}
