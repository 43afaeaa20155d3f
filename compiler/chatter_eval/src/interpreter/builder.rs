//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::sync::Arc;
use std::time::Duration;

use super::Interpreter;
use crate::config::InterpreterConfig;
use crate::host::{SharedHost, SilentHost};
use crate::repetition::RepetitionController;
use crate::scheduler::{SharedScheduler, ThreadScheduler};
use crate::transcript::Transcript;

/// Builder for [`Interpreter`].
///
/// Unset capabilities default to [`SilentHost`] and [`ThreadScheduler`].
#[derive(Default)]
pub struct InterpreterBuilder {
    config: InterpreterConfig,
    host: Option<SharedHost>,
    scheduler: Option<SharedScheduler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn default_interval(mut self, interval: Duration) -> Self {
        self.config.default_interval = interval;
        self
    }

    #[must_use]
    pub fn max_loop_iterations(mut self, limit: u64) -> Self {
        self.config.max_loop_iterations = limit;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.config.max_call_depth = limit;
        self
    }

    /// Where output is displayed and prompts are answered.
    #[must_use]
    pub fn host(mut self, host: SharedHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Timer used by `repeat ... forever`.
    #[must_use]
    pub fn scheduler(mut self, scheduler: SharedScheduler) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn build(self) -> Interpreter {
        let host: SharedHost = match self.host {
            Some(host) => host,
            None => Arc::new(SilentHost),
        };
        let scheduler: SharedScheduler = match self.scheduler {
            Some(scheduler) => scheduler,
            None => Arc::new(ThreadScheduler::new()),
        };
        Interpreter {
            config: self.config,
            host,
            transcript: Transcript::new(),
            repetitions: RepetitionController::new(scheduler),
        }
    }
}
