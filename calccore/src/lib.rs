//! calccore — shared library for the calculator application

pub mod config;
pub mod logging;
pub mod safety;
pub mod theme;
pub mod widgets;

pub use config::{CalcConfig, LoadOutcome};
pub use theme::{CalcTheme, KeyStyle};
