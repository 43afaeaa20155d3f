//! Run configuration.

use std::time::Duration;

/// Limits and defaults applied to every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Interval between repetition firings when the script does not set one.
    pub default_interval: Duration,
    /// Largest number of iterations a single loop may run.
    pub max_loop_iterations: u64,
    /// Deepest allowed nesting of function calls.
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            default_interval: Duration::from_secs(1),
            max_loop_iterations: 1_000_000,
            max_call_depth: 200,
        }
    }
}

impl InterpreterConfig {
    /// Interval for a repetition given a scope's override in seconds.
    ///
    /// A missing or zero override uses the default.
    pub fn repetition_interval(&self, override_secs: Option<u64>) -> Duration {
        match override_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => self.default_interval,
        }
    }
}
