//! Operand text <-> number conversion.

use crate::engine::CalcError;

/// Decimal places kept on non-integer results.
pub const RESULT_PRECISION: usize = 10;

/// Parse operand text. Only an optional leading `-`, ASCII digits and at
/// most one `.` are accepted; `inf`, `nan` and exponents are rejected.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::Parse { text: text.to_string() };

    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0;
    let mut points = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return Err(invalid()),
        }
    }
    if digits == 0 || points > 1 {
        return Err(invalid());
    }
    text.parse::<f64>().map_err(|_| invalid())
}

/// Render a result: integers without a fractional part, everything else
/// rounded to [`RESULT_PRECISION`] places in its shortest decimal form.
///
/// A fraction that rounds away entirely keeps one `0` place (`1.0`,
/// `-0.0`), so a digit typed next extends the fraction.
pub fn format_result(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::Overflow);
    }
    if value.fract() == 0.0 {
        return Ok(shortest(value));
    }
    let rounded = format!("{value:.prec$}", prec = RESULT_PRECISION);
    let rounded: f64 = rounded
        .parse()
        .map_err(|_| CalcError::Parse { text: rounded.clone() })?;
    if rounded.fract() == 0.0 {
        return Ok(format!("{rounded:.1}"));
    }
    Ok(rounded.to_string())
}

// f64's Display is the shortest round-tripping text and never uses exponents.
fn shortest(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
