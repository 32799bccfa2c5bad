//! Keypad calculator engine and its desktop front end.

pub mod action;
pub mod app;
pub mod engine;
pub mod format;
pub mod keys;
pub mod session;

pub use action::{Action, Digit, Operation};
pub use engine::{CalcError, Engine, EngineState, Output, ERROR_TEXT};
pub use session::{DisplayLine, Screen, Session};
