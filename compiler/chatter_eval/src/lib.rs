//! Chatter Eval - interpreter core for the Chatter scripting dialect.
//!
//! Scripts are executed statement by statement straight from their tokens;
//! there is no AST. Blocks (`loop`, `if`, function bodies) are collected up
//! to their `thats it` and run by a nested executor in a child scope.
//!
//! # Architecture
//!
//! - `Statement`: sentence-shape classification of one line
//! - `Environment`: per-scope bindings and output, copied on block entry
//! - `resolve` / `lookup` / `arithmetic`: value evaluation
//! - `exec`: the cursor-driven executor
//! - `Interpreter`: owns the transcript and active repetitions of a run
//!
//! # Capabilities
//!
//! The core never touches a terminal or a clock. Output display and name
//! prompts go through a [`Host`]; `repeat ... forever` timers go through a
//! [`Scheduler`].

mod config;
mod environment;
pub mod errors;
mod evaluator;
mod exec;
mod host;
mod interpreter;
mod repetition;
mod scheduler;
mod stack;
pub mod statement;
mod transcript;
mod value;

pub use config::InterpreterConfig;
pub use environment::{Environment, FunctionDef};
pub use errors::RuntimeError;
pub use evaluator::{arithmetic, lookup, resolve, Operator};
pub use host::{BufferHost, Host, SharedHost, SilentHost};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use repetition::{RepetitionController, TERMINATION_NOTICE};
pub use scheduler::{ManualScheduler, Scheduler, SharedScheduler, Task, TaskId, ThreadScheduler};
pub use statement::{Query, Statement};
pub use transcript::Transcript;
pub use value::{parse_number_literal, Value};
