//! Calculator theme
//!
//! Dark charcoal window, orange operator keys, grey function keys.
//! Flat buttons with no outlines and no shadows.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Every color the calculator paints with.
pub struct CalcColors;

impl CalcColors {
    pub const WINDOW: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
    pub const DISPLAY: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
    pub const TEXT_DARK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);

    pub const DIGIT: Color32 = Color32::from_rgb(0x3a, 0x3a, 0x3a);
    pub const DIGIT_ACTIVE: Color32 = Color32::from_rgb(0x5a, 0x5a, 0x5a);
    pub const OPERATION: Color32 = Color32::from_rgb(0xff, 0x95, 0x00);
    pub const OPERATION_ACTIVE: Color32 = Color32::from_rgb(0xff, 0xbb, 0x66);
    pub const SPECIAL: Color32 = Color32::from_rgb(0xa5, 0xa5, 0xa5);
    pub const SPECIAL_ACTIVE: Color32 = Color32::from_rgb(0xd0, 0xd0, 0xd0);
}

/// Visual family a keypad key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// Digits and the decimal point.
    Digit,
    /// Arithmetic operators, equals and percent.
    Operation,
    /// Clear and backspace.
    Special,
}

impl KeyStyle {
    /// Resting fill color.
    pub fn fill(self) -> Color32 {
        match self {
            KeyStyle::Digit => CalcColors::DIGIT,
            KeyStyle::Operation => CalcColors::OPERATION,
            KeyStyle::Special => CalcColors::SPECIAL,
        }
    }

    /// Fill while the pointer is held down on the key.
    pub fn active_fill(self) -> Color32 {
        match self {
            KeyStyle::Digit => CalcColors::DIGIT_ACTIVE,
            KeyStyle::Operation => CalcColors::OPERATION_ACTIVE,
            KeyStyle::Special => CalcColors::SPECIAL_ACTIVE,
        }
    }

    pub fn text(self) -> Color32 {
        match self {
            KeyStyle::Special => CalcColors::TEXT_DARK,
            KeyStyle::Digit | KeyStyle::Operation => CalcColors::TEXT_LIGHT,
        }
    }
}

/// Theme configuration for the calculator window
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_key: f32,
    pub font_size_display: f32,
    pub window_padding: f32,
    pub key_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_key: 24.0,
            font_size_display: 37.0,
            window_padding: 20.0,
            key_spacing: 10.0,
        }
    }
}

impl CalcTheme {
    /// Apply the calculator theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body + 8.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = CalcColors::WINDOW;
        visuals.panel_fill = CalcColors::WINDOW;
        visuals.extreme_bg_color = CalcColors::DISPLAY;
        visuals.override_text_color = Some(CalcColors::TEXT_LIGHT);

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::NONE;
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.key_spacing, self.key_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Font used on the result display.
    pub fn display_font(&self) -> FontId {
        FontId::proportional(self.font_size_display)
    }

    /// Font used on keypad keys.
    pub fn key_font(&self) -> FontId {
        FontId::proportional(self.font_size_key)
    }

    /// Display frame: near-black fill, generous inner margin
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::DISPLAY)
            .inner_margin(egui::Margin::symmetric(12.0, 20.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::WINDOW)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
