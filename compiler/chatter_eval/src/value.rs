//! Runtime values.
//!
//! A script only ever deals with numbers and text. `Undefined` is what a
//! failed variable lookup produces, and `Error` carries a non-fatal runtime
//! error so that it can flow through bindings and be printed like any other
//! value.

use std::fmt;

use crate::errors::RuntimeError;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Undefined,
    Error(RuntimeError),
}

impl Value {
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// The numeric payload, if this is a `Number`.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) | Value::Undefined | Value::Error(_) => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Reinterpret text that spells a number as that number.
    ///
    /// Function results are produced as text; binding them through this
    /// keeps `c is Whats add with 1 and 2?` usable in later arithmetic.
    #[must_use]
    pub fn into_numeric_if_possible(self) -> Self {
        match self {
            Value::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Value::Number(n),
                _ => Value::Text(text),
            },
            other => other,
        }
    }
}

impl From<RuntimeError> for Value {
    fn from(err: RuntimeError) -> Self {
        Value::Error(err)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::Text(text) => f.write_str(text),
            Value::Undefined => f.write_str("Undefined"),
            Value::Error(err) => write!(f, "{err}"),
        }
    }
}

/// Integral values print without a fractional part; `-0` prints as `0`.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.fract() == 0.0 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}

/// Parse a number literal: optional sign, digits, optional `.digits`.
///
/// The fractional part is truncated toward zero, so `3.9` reads as `3`.
pub fn parse_number_literal(token: &str) -> Option<f64> {
    let token = token.trim();
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    let magnitude: f64 = whole.parse().ok()?;
    Some(if token.starts_with('-') {
        -magnitude
    } else {
        magnitude
    })
}

#[cfg(test)]
mod tests;
