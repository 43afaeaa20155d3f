//! Chatter command-line driver.
//!
//! The `chatter` binary is a thin shell over `chatter_eval`: it reads a
//! script, runs it against a [`TerminalHost`], and keeps the process alive
//! while repetitions are firing.

pub mod commands;
mod host;
mod tracing_setup;

pub use host::TerminalHost;
pub use tracing_setup::init_tracing;
