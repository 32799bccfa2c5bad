//! Calculator engine
//!
//! A small input state machine. Operands are held as canonical decimal
//! text; a single binary operation can be pending at a time and operator
//! presses evaluate left to right with no precedence.
//!
//! Every transition returns an [`Output`]. Arithmetic failures never leave
//! the engine: they produce [`Output::ErrorThenCleared`] and the engine is
//! already back in its default state by the time the caller sees it.

use thiserror::Error;
use tracing::{debug, warn};

use crate::action::{Action, Digit, Operation};
use crate::format::{format_result, parse_operand};

/// Text shown for the one-shot error signal.
pub const ERROR_TEXT: &str = "Error";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivideByZero,
    #[error("not a number: {text:?}")]
    Parse { text: String },
    #[error("result out of range")]
    Overflow,
}

/// What the presentation layer should render after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Normal display text.
    Display(String),
    /// Show this text once; the engine has already been cleared.
    ErrorThenCleared(String),
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Display(text) | Output::ErrorThenCleared(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Output::ErrorThenCleared(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Operand being entered or the last result. Never empty.
    pub current: String,
    /// Left-hand operand captured when the operator was chosen.
    pub pending: String,
    pub operation: Option<Operation>,
    /// The next digit starts a fresh operand instead of extending `current`.
    pub awaiting_new_entry: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            pending: String::new(),
            operation: None,
            awaiting_new_entry: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Engine {
    state: EngineState,
    digit_limit: Option<usize>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore digit presses once the current operand holds `limit` digits.
    /// `None` keeps entry unbounded.
    pub fn with_digit_limit(limit: Option<usize>) -> Self {
        Self {
            state: EngineState::default(),
            digit_limit: limit,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.current
    }

    /// Dispatch one user gesture.
    pub fn apply(&mut self, action: Action) -> Output {
        let output = match action {
            Action::Digit(d) => self.input_digit(d),
            Action::Decimal => self.input_decimal(),
            Action::Operator(op) => self.set_operation(op),
            Action::Equals => self.calculate(),
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::Percent => self.percentage(),
        };
        debug!(?action, display = output.text(), "applied");
        output
    }

    pub fn input_digit(&mut self, digit: Digit) -> Output {
        self.begin_entry();
        if self.at_digit_limit() {
            return self.shown();
        }
        let current = &mut self.state.current;
        if *current == "0" {
            *current = digit.as_char().to_string();
        } else {
            current.push(digit.as_char());
        }
        self.shown()
    }

    pub fn input_decimal(&mut self) -> Output {
        self.begin_entry();
        if !self.state.current.contains('.') {
            self.state.current.push('.');
        }
        self.shown()
    }

    pub fn set_operation(&mut self, op: Operation) -> Output {
        if self.state.operation.is_some() && !self.state.awaiting_new_entry {
            let chained = self.calculate();
            if chained.is_error() {
                return chained;
            }
        }
        self.state.pending = self.state.current.clone();
        self.state.operation = Some(op);
        self.state.awaiting_new_entry = true;
        self.shown()
    }

    /// Apply the pending operation. A no-op without one, or straight after
    /// an operator press.
    pub fn calculate(&mut self) -> Output {
        let Some(op) = self.state.operation else {
            return self.shown();
        };
        if self.state.awaiting_new_entry {
            return self.shown();
        }
        match self.evaluate(op) {
            Ok(result) => {
                self.state.current = result;
                self.state.awaiting_new_entry = true;
                self.state.operation = None;
                self.shown()
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn percentage(&mut self) -> Output {
        let result =
            parse_operand(&self.state.current).and_then(|value| format_result(value / 100.0));
        match result {
            Ok(text) => {
                self.state.current = text;
                self.shown()
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn clear(&mut self) -> Output {
        self.state = EngineState::default();
        self.shown()
    }

    pub fn backspace(&mut self) -> Output {
        if self.state.awaiting_new_entry {
            return self.shown();
        }
        let current = &mut self.state.current;
        current.pop();
        if current.is_empty() || *current == "-" {
            *current = "0".to_string();
        }
        self.shown()
    }

    fn evaluate(&self, op: Operation) -> Result<String, CalcError> {
        let current = parse_operand(&self.state.current)?;
        let previous = parse_operand(&self.state.pending)?;
        let result = match op {
            Operation::Add => previous + current,
            Operation::Subtract => previous - current,
            Operation::Multiply => previous * current,
            Operation::Divide => {
                if current == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                previous / current
            }
        };
        format_result(result)
    }

    fn begin_entry(&mut self) {
        if self.state.awaiting_new_entry {
            self.state.current = "0".to_string();
            self.state.awaiting_new_entry = false;
        }
    }

    fn at_digit_limit(&self) -> bool {
        match self.digit_limit {
            Some(limit) => {
                let current = &self.state.current;
                let body = current.strip_prefix('-').unwrap_or(current);
                let mut digits = body.chars().filter(char::is_ascii_digit).count();
                // The zero in front of a bare fraction is not an entered digit.
                if body.starts_with("0.") {
                    digits -= 1;
                }
                // A lone "0" is replaced, not extended.
                *current != "0" && digits >= limit
            }
            None => false,
        }
    }

    fn fail(&mut self, err: CalcError) -> Output {
        warn!(error = %err, state = ?self.state, "arithmetic error, clearing");
        self.state = EngineState::default();
        Output::ErrorThenCleared(ERROR_TEXT.to_string())
    }

    fn shown(&self) -> Output {
        Output::Display(self.state.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digit(c: char) -> Action {
        Action::Digit(Digit::from_char(c).unwrap())
    }

    /// Feed keypad labels into a fresh engine, returning the last output.
    fn run(engine: &mut Engine, keys: &str) -> Output {
        let mut last = Output::Display(engine.display().to_string());
        for c in keys.chars() {
            let action = Action::from_char(c).unwrap();
            last = engine.apply(action);
        }
        last
    }

    fn eval(keys: &str) -> Output {
        run(&mut Engine::new(), keys)
    }

    #[test]
    fn test_initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.state(), &EngineState::default());
        assert!(!engine.state().awaiting_new_entry);
    }

    #[test]
    fn test_leading_zero_suppressed() {
        let mut engine = Engine::new();
        assert_eq!(engine.apply(digit('5')).text(), "5");

        let mut engine = Engine::new();
        assert_eq!(engine.apply(digit('0')).text(), "0");
        assert_eq!(engine.apply(digit('0')).text(), "0");
        assert_eq!(engine.apply(digit('7')).text(), "7");
    }

    #[test]
    fn test_digits_append() {
        assert_eq!(eval("1203").text(), "1203");
    }

    #[test]
    fn test_decimal_once() {
        let mut engine = Engine::new();
        engine.input_decimal();
        engine.input_decimal();
        assert_eq!(engine.display(), "0.");
        assert_eq!(eval("1.5.2").text(), "1.52");
    }

    #[test]
    fn test_decimal_after_operator_starts_fresh() {
        let mut engine = Engine::new();
        run(&mut engine, "9+.5");
        assert_eq!(engine.display(), "0.5");
        assert_eq!(engine.state().pending, "9");
    }

    #[test]
    fn test_integer_division() {
        let out = eval("6÷3=");
        assert_eq!(out, Output::Display("2".to_string()));
    }

    #[test]
    fn test_fractional_results() {
        assert_eq!(eval("1÷3=").text(), "0.3333333333");
        assert_eq!(eval(".1+.2=").text(), "0.3");
        assert_eq!(eval("2.5×4=").text(), "10");
        assert_eq!(eval("3-5=").text(), "-2");
    }

    #[test]
    fn test_divide_by_zero_clears() {
        let mut engine = Engine::new();
        let out = run(&mut engine, "5÷0=");
        assert_eq!(out, Output::ErrorThenCleared("Error".to_string()));
        assert_eq!(engine.state(), &EngineState::default());
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_after_error_next_key_starts_clean() {
        let mut engine = Engine::new();
        run(&mut engine, "5÷0=");
        assert_eq!(run(&mut engine, "7").text(), "7");
        assert_eq!(engine.state().operation, None);
    }

    #[test]
    fn test_chained_operations() {
        let mut engine = Engine::new();
        run(&mut engine, "5+3-");
        assert_eq!(engine.display(), "8");
        assert_eq!(engine.state().pending, "8");
        assert_eq!(engine.state().operation, Some(Operation::Subtract));
        assert_eq!(run(&mut engine, "2=").text(), "6");
    }

    #[test]
    fn test_chain_is_left_to_right() {
        assert_eq!(eval("2+3×4=").text(), "20");
    }

    #[test]
    fn test_chained_divide_by_zero_drops_operator() {
        let mut engine = Engine::new();
        let out = run(&mut engine, "5÷0+");
        assert!(out.is_error());
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_operator_reselection_replaces() {
        let mut engine = Engine::new();
        run(&mut engine, "7+×");
        assert_eq!(engine.state().operation, Some(Operation::Multiply));
        assert_eq!(run(&mut engine, "3=").text(), "21");
    }

    #[test]
    fn test_equals_without_operation_is_noop() {
        let mut engine = Engine::new();
        run(&mut engine, "42");
        let before = engine.state().clone();
        assert_eq!(engine.calculate().text(), "42");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_equals_right_after_operator_is_noop() {
        let mut engine = Engine::new();
        run(&mut engine, "42+");
        let before = engine.state().clone();
        assert_eq!(engine.calculate().text(), "42");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_equals_twice_keeps_result() {
        let mut engine = Engine::new();
        run(&mut engine, "4×5=");
        assert_eq!(run(&mut engine, "=").text(), "20");
    }

    #[test]
    fn test_calculate_keeps_pending_operand() {
        let mut engine = Engine::new();
        run(&mut engine, "9-4=");
        let state = engine.state();
        assert_eq!(state.current, "5");
        assert_eq!(state.pending, "9");
        assert_eq!(state.operation, None);
        assert!(state.awaiting_new_entry);
    }

    #[test]
    fn test_result_then_digit_starts_fresh() {
        let mut engine = Engine::new();
        run(&mut engine, "9-4=");
        assert_eq!(run(&mut engine, "1").text(), "1");
    }

    #[test]
    fn test_result_feeds_next_operation() {
        assert_eq!(eval("9-4=×3=").text(), "15");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(eval("50%").text(), "0.5");
        assert_eq!(eval("200%").text(), "2");
        assert_eq!(eval("0%").text(), "0");
        assert_eq!(eval("5%%").text(), "0.0005");
    }

    #[test]
    fn test_percentage_leaves_operation_alone() {
        let mut engine = Engine::new();
        run(&mut engine, "80+");
        let before = engine.state().clone();
        engine.percentage();
        let after = engine.state();
        assert_eq!(after.current, "0.8");
        assert_eq!(after.pending, before.pending);
        assert_eq!(after.operation, before.operation);
        assert_eq!(after.awaiting_new_entry, before.awaiting_new_entry);
    }

    #[test]
    fn test_percentage_then_digit_appends() {
        assert_eq!(eval("12%5").text(), "0.125");
    }

    #[test]
    fn test_percentage_rounding_to_integer_keeps_fraction() {
        let mut engine = Engine::new();
        assert_eq!(run(&mut engine, "100.000000000001%").text(), "1.0");
        assert_eq!(run(&mut engine, "5").text(), "1.05");
    }

    #[test]
    fn test_backspace() {
        assert_eq!(eval("12⌫").text(), "1");
        assert_eq!(eval("1⌫").text(), "0");
        assert_eq!(eval("0⌫").text(), "0");
        assert_eq!(eval("1.⌫").text(), "1");
    }

    #[test]
    fn test_backspace_while_awaiting_is_noop() {
        let mut engine = Engine::new();
        run(&mut engine, "12+");
        let before = engine.state().clone();
        assert_eq!(engine.backspace().text(), "12");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut engine = Engine::new();
        run(&mut engine, "12+3");
        assert_eq!(engine.clear().text(), "0");
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut engine = Engine::new();
        let huge = format!("1{}", "0".repeat(200));
        run(&mut engine, &huge);
        run(&mut engine, "×");
        let out = run(&mut engine, &format!("{huge}="));
        assert!(out.is_error());
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_parse_error_is_an_error() {
        let mut engine = Engine::new();
        engine.state.current = "12x".to_string();
        let out = engine.percentage();
        assert_eq!(out.text(), ERROR_TEXT);
        assert_eq!(engine.state(), &EngineState::default());

        engine.state.pending = String::new();
        engine.state.operation = Some(Operation::Add);
        engine.state.current = "3".to_string();
        assert!(engine.calculate().is_error());
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_unbounded_by_default() {
        let keys = "9".repeat(40);
        assert_eq!(eval(&keys).text(), keys);
    }

    #[test]
    fn test_digit_limit() {
        let mut engine = Engine::with_digit_limit(Some(3));
        assert_eq!(run(&mut engine, "12.345").text(), "12.3");
        run(&mut engine, "+");
        assert_eq!(run(&mut engine, "9876").text(), "987");
    }

    #[test]
    fn test_digit_limit_ignores_zero_before_fraction() {
        let mut engine = Engine::with_digit_limit(Some(1));
        assert_eq!(run(&mut engine, ".5").text(), "0.5");
        assert_eq!(run(&mut engine, "6").text(), "0.5");

        let mut engine = Engine::with_digit_limit(Some(2));
        assert_eq!(run(&mut engine, "0.123").text(), "0.12");
    }

    #[test]
    fn test_digit_limit_replaces_lone_zero() {
        let mut engine = Engine::with_digit_limit(Some(1));
        assert_eq!(run(&mut engine, "05").text(), "5");
    }

    proptest! {
        #[test]
        fn prop_digit_entry_concatenates(digits in "[0-9]{1,30}") {
            let out = eval(&digits);
            let trimmed = digits.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            prop_assert_eq!(out.text(), expected);
        }

        #[test]
        fn prop_decimal_idempotent(digits in "[0-9]{0,10}", extra in 1usize..5) {
            let mut engine = Engine::new();
            run(&mut engine, &digits);
            for _ in 0..extra {
                engine.input_decimal();
            }
            prop_assert_eq!(engine.display().matches('.').count(), 1);
        }

        #[test]
        fn prop_operand_never_empty(keys in "[0-9.+×÷%⌫=C-]{0,40}") {
            let mut engine = Engine::new();
            run(&mut engine, &keys);
            prop_assert!(!engine.display().is_empty());
            prop_assert!(engine.display().matches('.').count() <= 1);
        }
    }
}
