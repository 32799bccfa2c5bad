//! Keyboard shortcuts and the on-screen keypad layout.

use calccore::KeyStyle;
use egui::{Event, Key};

use crate::action::{Action, Digit, Operation};

/// One keypad key and how many grid columns it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadKey {
    pub action: Action,
    pub span: usize,
}

const fn key(action: Action) -> PadKey {
    PadKey { action, span: 1 }
}

const fn wide(action: Action) -> PadKey {
    PadKey { action, span: 2 }
}

const fn d(n: u8) -> Action {
    Action::Digit(Digit::from_const(n))
}

/// Four columns, five rows; `0` spans two columns.
pub const KEYPAD: [&[PadKey]; 5] = [
    &[
        key(Action::Clear),
        key(Action::Backspace),
        key(Action::Operator(Operation::Divide)),
        key(Action::Operator(Operation::Multiply)),
    ],
    &[key(d(7)), key(d(8)), key(d(9)), key(Action::Operator(Operation::Subtract))],
    &[key(d(4)), key(d(5)), key(d(6)), key(Action::Operator(Operation::Add))],
    &[key(d(1)), key(d(2)), key(d(3)), key(Action::Equals)],
    &[wide(d(0)), key(Action::Decimal), key(Action::Percent)],
];

pub const KEYPAD_COLUMNS: usize = 4;

/// Keypad color family for an action.
pub fn key_style(action: Action) -> KeyStyle {
    match action {
        Action::Digit(_) | Action::Decimal => KeyStyle::Digit,
        Action::Operator(_) | Action::Equals | Action::Percent => KeyStyle::Operation,
        Action::Clear | Action::Backspace => KeyStyle::Special,
    }
}

/// Named keys that don't arrive as text.
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Enter => Some(Action::Equals),
        Key::Escape | Key::Delete => Some(Action::Clear),
        Key::Backspace => Some(Action::Backspace),
        _ => None,
    }
}

/// Typed text; only single characters map to actions.
pub fn action_for_text(text: &str) -> Option<Action> {
    let mut chars = text.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Action::from_char(c)
}

pub fn action_for_event(event: &Event) -> Option<Action> {
    match event {
        Event::Text(text) => action_for_text(text),
        Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
            action_for_key(*key)
        }
        _ => None,
    }
}
