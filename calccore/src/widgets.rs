//! Custom widgets — flat keypad keys and the result display

use egui::{Align2, Response, Sense, Ui, Vec2};
use crate::theme::{CalcColors, CalcTheme, KeyStyle};

/// Draw a flat keypad key of exactly `size` and return its response.
///
/// The key fills with the style's active color while the pointer is held
/// down on it, the same feedback a physical key gives.
pub fn key_button(
    ui: &mut Ui,
    theme: &CalcTheme,
    label: &str,
    style: KeyStyle,
    size: Vec2,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = if response.is_pointer_button_down_on() {
            style.active_fill()
        } else {
            style.fill()
        };
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            theme.key_font(),
            style.text(),
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Draw the read-only result display, right-aligned.
pub fn display_panel(ui: &mut Ui, theme: &CalcTheme, text: &str) {
    let height = theme.font_size_display * 1.6;
    theme.display_frame().show(ui, |ui| {
        ui.set_min_height(height);
        ui.set_max_height(height);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(text)
                    .font(theme.display_font())
                    .color(CalcColors::TEXT_LIGHT)
                    .strong(),
            );
        });
    });
}

/// Width of a key spanning `span` columns of a grid whose single-column
/// keys are `cell` wide and separated by `spacing`.
pub fn spanned_width(cell: f32, spacing: f32, span: usize) -> f32 {
    let span = span.max(1) as f32;
    cell * span + spacing * (span - 1.0)
}
