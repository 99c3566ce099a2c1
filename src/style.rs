use crate::compare::LineClass;
use crate::config::Settings;
use egui::{Color32, Context, FontFamily, FontId, Stroke, Style, TextStyle, Visuals};

// Pane row colors
pub const REMOVED_LINE_BG: Color32 = Color32::from_rgb(255, 230, 230);
pub const ADDED_LINE_BG: Color32 = Color32::from_rgb(230, 255, 230);
pub const REMOVED_TEXT_COLOR: Color32 = Color32::from_rgb(150, 0, 0);
pub const ADDED_TEXT_COLOR: Color32 = Color32::from_rgb(0, 100, 0);
pub const NOTICE_TEXT_COLOR: Color32 = Color32::from_rgb(60, 90, 160);

pub const TOAST_ERROR_BG: Color32 = Color32::from_rgb(250, 220, 220);
pub const TOAST_SUCCESS_BG: Color32 = Color32::from_rgb(220, 245, 220);

pub fn configure_style(ctx: &Context, settings: &Settings) {
    let mut style = Style::default();

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(15);
    style.text_styles.insert(
        TextStyle::Monospace,
        FontId::new(settings.font_size, FontFamily::Monospace),
    );
    style.text_styles.insert(
        TextStyle::Body,
        FontId::new(settings.font_size, FontFamily::Proportional),
    );

    ctx.set_style(style);

    let mut visuals = if settings.theme == "dark" {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;

    if settings.theme != "dark" {
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);
        visuals.widgets.hovered.bg_fill = Color32::from_gray(240);
        visuals.widgets.active.bg_fill = Color32::from_gray(230);
        visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
        visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(100, 100, 100));
    }

    ctx.set_visuals(visuals);
}

/// Background and text color for a pane row
pub fn line_colors(class: LineClass, base_text: Color32) -> (Color32, Color32) {
    match class {
        LineClass::Added => (ADDED_LINE_BG, ADDED_TEXT_COLOR),
        LineClass::Removed => (REMOVED_LINE_BG, REMOVED_TEXT_COLOR),
        LineClass::Notice => (Color32::TRANSPARENT, NOTICE_TEXT_COLOR),
        LineClass::Unchanged | LineClass::Padding => (Color32::TRANSPARENT, base_text),
    }
}
