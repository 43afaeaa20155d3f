//! The top-level interpreter.
//!
//! An [`Interpreter`] owns everything that outlives a single pass over the
//! source: the run transcript, the active repetitions, and the host and
//! scheduler capabilities. Each [`Interpreter::run`] starts from a clean
//! slate.

mod builder;

pub use builder::InterpreterBuilder;

use chatter_lexer::tokenize;

use crate::config::InterpreterConfig;
use crate::environment::Environment;
use crate::exec::{Executor, RunContext};
use crate::host::SharedHost;
use crate::repetition::RepetitionController;
use crate::transcript::Transcript;

pub struct Interpreter {
    config: InterpreterConfig,
    host: SharedHost,
    transcript: Transcript,
    repetitions: RepetitionController,
}

impl Interpreter {
    /// Interpreter with the default configuration, a silent host and a
    /// thread-backed scheduler.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Run `source` from scratch and return its output.
    ///
    /// Repetitions left over from an earlier run are cancelled first. New
    /// repetitions start firing only after every statement has run.
    #[tracing::instrument(level = "debug", skip_all, fields(source_len = source.len()))]
    pub fn run(&mut self, source: &str) -> String {
        self.repetitions.cancel_all();
        self.transcript = Transcript::new();

        let tokens = tokenize(source);
        tracing::debug!(tokens = tokens.len(), "tokenized");

        let mut env = Environment::new();
        let mut cx = RunContext::new(&self.config, &*self.host);
        Executor::new(&tokens).run(&mut env, &mut cx);
        let pending = cx.pending;

        self.transcript.append(env.output());
        for repetition in pending {
            self.repetitions
                .start(repetition, &self.transcript, &self.host);
        }

        self.display()
    }

    /// Cancel every repetition and append the termination notice.
    pub fn stop(&mut self) -> String {
        self.repetitions.stop_all(&self.transcript);
        self.display()
    }

    /// Output of the current run so far, including repetition firings.
    pub fn output(&self) -> String {
        self.transcript.snapshot()
    }

    pub fn active_repetitions(&self) -> usize {
        self.repetitions.active()
    }

    fn display(&self) -> String {
        let output = self.transcript.snapshot();
        self.host.display_output(&output);
        output
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
