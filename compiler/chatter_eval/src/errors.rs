//! Runtime errors.
//!
//! Every error is non-fatal: it is rendered as a single output line where it
//! occurs and execution continues with the next statement. The `Display`
//! strings below are therefore part of the observable output contract.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Error: Variable '{name}' is not defined.")]
    UndefinedVariable { name: String },

    #[error("Error: Function '{name}' is not defined.")]
    UndefinedFunction { name: String },

    #[error("Error: Function '{name}' expects {expected} arguments.")]
    ArgumentCountMismatch { name: String, expected: usize },

    #[error("Error: Invalid operands for math operation.")]
    InvalidOperands,

    #[error("Error: Division by zero")]
    DivisionByZero,

    #[error("Unknown Operation")]
    UnknownOperation { operator: String },

    #[error("Unrecognized command: {line}")]
    UnrecognizedCommand { line: String },

    #[error("Error: Loop bounds must be numbers.")]
    InvalidLoopBounds,

    #[error("Error: Conditional variables must be numbers.")]
    InvalidConditionalOperands,

    #[error("Error: Loop would run {iterations} times, more than the limit of {limit}.")]
    LoopLimitExceeded { iterations: u64, limit: u64 },

    #[error("Error: Function calls nested deeper than {limit} levels.")]
    CallDepthExceeded { limit: usize },
}

pub fn undefined_variable(name: &str) -> RuntimeError {
    RuntimeError::UndefinedVariable {
        name: name.to_string(),
    }
}

pub fn undefined_function(name: &str) -> RuntimeError {
    RuntimeError::UndefinedFunction {
        name: name.to_string(),
    }
}

pub fn argument_count_mismatch(name: &str, expected: usize) -> RuntimeError {
    RuntimeError::ArgumentCountMismatch {
        name: name.to_string(),
        expected,
    }
}

pub fn unknown_operation(operator: &str) -> RuntimeError {
    RuntimeError::UnknownOperation {
        operator: operator.to_string(),
    }
}

pub fn unrecognized_command(line: &str) -> RuntimeError {
    RuntimeError::UnrecognizedCommand {
        line: line.to_string(),
    }
}
