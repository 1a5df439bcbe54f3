use egui::{Color32, Pos2};

use crate::surface::Canvas;
use crate::style::StrokeStyle;

/// Light neutral tone used for the center cross
pub const GUIDE_COLOR: Color32 = Color32::from_gray(0xdd);
pub const GUIDE_WIDTH: f32 = 1.0;

pub fn guide_style() -> StrokeStyle {
    StrokeStyle {
        width: GUIDE_WIDTH,
        color: GUIDE_COLOR,
    }
}

/// Paint the center cross over the full logical extent of the canvas.
///
/// Expected to run on a freshly wiped canvas; drawing it twice onto the same
/// pixels would darken the cross.
pub fn draw_guide<C: Canvas + ?Sized>(canvas: &mut C) {
    draw_guide_with(canvas, &guide_style());
}

pub fn draw_guide_with<C: Canvas + ?Sized>(canvas: &mut C, style: &StrokeStyle) {
    let size = canvas.size();
    let center = Pos2::new(size.x / 2.0, size.y / 2.0);

    canvas.stroke_lines(
        &[
            (Pos2::new(center.x, 0.0), Pos2::new(center.x, size.y)),
            (Pos2::new(0.0, center.y), Pos2::new(size.x, center.y)),
        ],
        style,
    );
}
