use egui::{Color32, Pos2, Rect, RichText, Sense, Stroke, Vec2};

use crate::KanjiApp;
use crate::input::SurfaceMapping;
use crate::panels::tools_panel;

const TITLE_COLOR: Color32 = Color32::from_rgb(0xff, 0xa5, 0x00);
const BORDER_WIDTH: f32 = 3.0;

pub fn central_panel(app: &mut KanjiApp, ctx: &egui::Context, frame: &mut eframe::Frame) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new("Kanji Area")
                    .size(40.0)
                    .color(TITLE_COLOR)
                    .extra_letter_spacing(3.0),
            );
            ui.add_space(24.0);

            canvas(app, ui);

            ui.add_space(24.0);
            tools_panel(app, ui, frame);
        });
    });
}

/// Allocate the square drawing area, route pointer input into it and paint the raster
fn canvas(app: &mut KanjiApp, ui: &mut egui::Ui) {
    let edge = app.config().display_edge(ui.available_width());

    // Drag sense claims the gesture so the host does not scroll or pan while drawing
    let (response, painter) = ui.allocate_painter(Vec2::splat(edge), Sense::drag());
    let rect = response.rect;

    let mapping = SurfaceMapping::new(rect, app.config().logical_size());
    app.handle_pointer(ui.ctx(), &mapping);

    let texture_id = app.surface_texture(ui.ctx());

    // Blank pixels are transparent; draw on white paper in both themes
    painter.rect_filled(rect, 0.0, Color32::WHITE);
    painter.image(
        texture_id,
        rect,
        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
        Color32::WHITE,
    );
    painter.rect_stroke(
        rect.expand(BORDER_WIDTH / 2.0),
        0.0,
        Stroke::new(BORDER_WIDTH, Color32::GRAY),
    );
}
