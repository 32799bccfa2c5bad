//! Calculator application

use calccore::safety::catch_or;
use calccore::theme::{menu_bar, CalcColors};
use calccore::widgets::{display_panel, key_button, spanned_width};
use calccore::{CalcConfig, CalcTheme};
use egui::Context;

use crate::action::Action;
use crate::engine::Engine;
use crate::keys::{action_for_event, key_style, KEYPAD, KEYPAD_COLUMNS};
use crate::session::{DisplayLine, Session};

/// Keys never shrink below this height.
const MIN_KEY_HEIGHT: f32 = 40.0;

pub struct CalculatorApp {
    session: Session<DisplayLine>,
    theme: CalcTheme,
    keyboard: bool,
    show_about: bool,
}

impl CalculatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &CalcConfig) -> Self {
        let theme = CalcTheme::default();
        theme.apply(&cc.egui_ctx);
        let engine = Engine::with_digit_limit(config.max_digits);
        Self {
            session: Session::new(engine, DisplayLine::default()),
            theme,
            keyboard: config.keyboard,
            show_about: false,
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if !self.keyboard {
            return;
        }
        let actions: Vec<Action> =
            ctx.input(|i| i.events.iter().filter_map(action_for_event).collect());
        for action in actions {
            self.session.dispatch(action);
        }
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = self.theme.key_spacing;
        let columns = KEYPAD_COLUMNS as f32;
        let rows = KEYPAD.len() as f32;
        let cell_w = (ui.available_width() - spacing * (columns - 1.0)) / columns;
        let cell_h = ((ui.available_height() - spacing * (rows - 1.0)) / rows).max(MIN_KEY_HEIGHT);

        let mut pressed = None;
        for row in KEYPAD {
            ui.horizontal(|ui| {
                for pad in row {
                    let size = egui::vec2(spanned_width(cell_w, spacing, pad.span), cell_h);
                    let label = pad.action.label();
                    if key_button(ui, &self.theme, &label, key_style(pad.action), size).clicked() {
                        pressed = Some(pad.action);
                    }
                }
            });
        }

        if let Some(action) = pressed {
            self.session.dispatch(action);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Modern Calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / = % Enter Esc Backspace");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CalcColors::WINDOW)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                catch_or("calculator frame", (), || {
                    display_panel(ui, &self.theme, self.session.screen().text());
                    ui.add_space(self.theme.key_spacing);
                    self.render_keypad(ui);
                });
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
