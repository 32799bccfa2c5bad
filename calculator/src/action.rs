//! User gestures the engine understands.

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// For fixed layouts built at compile time.
    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value <= 9, "digit out of range");
        Self(value)
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Keypad symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Accepts the keypad symbols plus the ASCII keyboard aliases.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Operation::Multiply),
            '÷' | '/' => Some(Operation::Divide),
            _ => None,
        }
    }
}

/// One discriminated action per user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
    Percent,
}

impl Action {
    /// Text printed on the keypad key for this action.
    pub fn label(self) -> String {
        match self {
            Action::Digit(d) => d.as_char().to_string(),
            Action::Decimal => ".".to_string(),
            Action::Operator(op) => op.symbol().to_string(),
            Action::Equals => "=".to_string(),
            Action::Clear => "C".to_string(),
            Action::Backspace => "⌫".to_string(),
            Action::Percent => "%".to_string(),
        }
    }

    /// Map a typed character to an action.
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = Digit::from_char(c) {
            return Some(Action::Digit(d));
        }
        if let Some(op) = Operation::from_char(c) {
            return Some(Action::Operator(op));
        }
        match c {
            '.' | ',' => Some(Action::Decimal),
            '=' => Some(Action::Equals),
            '%' => Some(Action::Percent),
            'c' | 'C' => Some(Action::Clear),
            '⌫' => Some(Action::Backspace),
            _ => None,
        }
    }
}
