//! Glue between the engine and whatever draws the display.

use crate::action::Action;
use crate::engine::{Engine, Output};

/// Anything that can show the calculator's display text.
pub trait Screen {
    fn render(&mut self, text: &str);
}

/// Display line held by a GUI between frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLine {
    text: String,
}

impl DisplayLine {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Screen for DisplayLine {
    fn render(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Owns the engine and a screen. Every dispatched action is rendered, the
/// one-shot error text included.
pub struct Session<S: Screen> {
    engine: Engine,
    screen: S,
}

impl<S: Screen> Session<S> {
    pub fn new(engine: Engine, mut screen: S) -> Self {
        screen.render(engine.display());
        Self { engine, screen }
    }

    pub fn dispatch(&mut self, action: Action) -> Output {
        let output = self.engine.apply(action);
        self.screen.render(output.text());
        output
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }
}
