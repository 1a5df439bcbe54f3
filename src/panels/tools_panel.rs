use egui::{Button, Color32, RichText, Slider};

use crate::KanjiApp;
use crate::settings::SettingChange;
use crate::style::{self, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

const ACCENT: Color32 = Color32::from_rgb(0xff, 0xa5, 0x00);

/// Width slider, colour picker, clear button and theme toggle under the canvas
pub fn tools_panel(app: &mut KanjiApp, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
    let settings = *app.settings();

    // Stroke width
    let mut width = settings.width;
    ui.horizontal(|ui| {
        let slider = Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).show_value(false);
        if ui.add(slider).changed() {
            app.change_setting(SettingChange::Width(width), frame);
        }
        ui.label(format!("{}px", width));
    });

    // Stroke colour
    let mut color = settings.color;
    ui.horizontal(|ui| {
        if egui::color_picker::color_edit_button_srgba(
            ui,
            &mut color,
            egui::color_picker::Alpha::Opaque,
        )
        .changed()
        {
            app.change_setting(SettingChange::Color(color), frame);
        }
        ui.label(style::format_color(color));
    });

    ui.add_space(16.0);

    let clear = Button::new(RichText::new("Clear").color(Color32::WHITE).strong())
        .fill(ACCENT)
        .rounding(16.0);
    if ui.add(clear).clicked() {
        log::info!("Clear requested from UI");
        app.request_clear();
    }

    ui.add_space(8.0);

    let theme_label = match settings.theme {
        crate::settings::Theme::Light => "🌙 Dark mode",
        crate::settings::Theme::Dark => "☀ Light mode",
    };
    if ui.button(theme_label).clicked() {
        app.change_setting(SettingChange::Theme(settings.theme.toggled()), frame);
    }
}
