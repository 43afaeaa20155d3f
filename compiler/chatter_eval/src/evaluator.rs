//! Value resolution and arithmetic.

use crate::environment::Environment;
use crate::errors::{undefined_variable, unknown_operation, RuntimeError};
use crate::value::{parse_number_literal, Value};

/// The four arithmetic operators, spelled as words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    DividedBy,
}

impl Operator {
    /// Parse an operator word, ignoring case and inner whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let first = words.next()?;
        let second = words.next();
        if words.next().is_some() {
            return None;
        }
        match (first.to_ascii_lowercase().as_str(), second) {
            ("plus", None) => Some(Operator::Plus),
            ("minus", None) => Some(Operator::Minus),
            ("times", None) => Some(Operator::Times),
            ("divided", Some(by)) if by.eq_ignore_ascii_case("by") => Some(Operator::DividedBy),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Value {
        match self {
            Operator::Plus => Value::Number(lhs + rhs),
            Operator::Minus => Value::Number(lhs - rhs),
            Operator::Times => Value::Number(lhs * rhs),
            Operator::DividedBy if rhs == 0.0 => RuntimeError::DivisionByZero.into(),
            Operator::DividedBy => Value::Number(lhs / rhs),
        }
    }
}

/// Resolve a token: number literal, then bound variable, then the token
/// itself as text.
pub fn resolve(env: &Environment, token: &str) -> Value {
    if let Some(n) = parse_number_literal(token) {
        return Value::Number(n);
    }
    match env.get(token) {
        Some(value) => value.clone(),
        None => Value::text(token),
    }
}

/// Look a variable up, recording an error line in the scope's output when
/// it is unbound.
pub fn lookup(env: &mut Environment, name: &str) -> Value {
    if let Some(value) = env.get(name) {
        return value.clone();
    }
    env.emit(undefined_variable(name));
    Value::Undefined
}

/// Apply `operator` to the resolved operands.
///
/// Operands are checked before the operator, so `Whats a mod b?` with
/// non-numeric operands reports invalid operands rather than the operator.
pub fn arithmetic(env: &Environment, lhs: &str, operator: &str, rhs: &str) -> Value {
    let (Some(a), Some(b)) = (resolve(env, lhs).as_number(), resolve(env, rhs).as_number()) else {
        return RuntimeError::InvalidOperands.into();
    };
    match Operator::parse(operator) {
        Some(op) => op.apply(a, b),
        None => unknown_operation(operator).into(),
    }
}
