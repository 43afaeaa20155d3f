//! Statement execution.
//!
//! An [`Executor`] walks a token slice with a forward cursor. Single-line
//! statements run in place; block headers first pull their body off the
//! cursor ([`Executor::collect_block`]) and then run it through a fresh
//! executor over the collected tokens.
//!
//! - `call`: user function calls
//! - `control`: loops, conditionals and repetitions

mod call;
mod control;

use chatter_lexer::Token;

use crate::config::InterpreterConfig;
use crate::environment::{Environment, FunctionDef};
use crate::errors::unrecognized_command;
use crate::evaluator::{arithmetic, lookup, resolve};
use crate::host::Host;
use crate::repetition::PendingRepetition;
use crate::stack::ensure_sufficient_stack;
use crate::statement::{Query, Statement, NAME_VARIABLE};
use crate::value::Value;

/// State shared by every scope of one run.
pub(crate) struct RunContext<'run> {
    pub config: &'run InterpreterConfig,
    pub host: &'run dyn Host,
    /// Repetitions to start once the pass completes.
    pub pending: Vec<PendingRepetition>,
    /// Number of function calls currently on the stack.
    pub call_depth: usize,
}

impl<'run> RunContext<'run> {
    pub fn new(config: &'run InterpreterConfig, host: &'run dyn Host) -> Self {
        RunContext {
            config,
            host,
            pending: Vec::new(),
            call_depth: 0,
        }
    }
}

/// Body of a block, split at `or if not` for conditionals.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Block {
    pub body: Vec<Token>,
    pub alternate: Vec<Token>,
}

/// How a query's result is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QueryUse {
    Emit,
    Bind,
}

pub(crate) struct Executor<'t> {
    tokens: &'t [Token],
    cursor: usize,
}

impl<'t> Executor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Executor { tokens, cursor: 0 }
    }

    /// Execute every statement in order.
    pub fn run(mut self, env: &mut Environment, cx: &mut RunContext<'_>) {
        while let Some(token) = self.next_token() {
            self.execute(token, env, cx);
        }
    }

    fn next_token(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    fn execute(&mut self, token: &'t Token, env: &mut Environment, cx: &mut RunContext<'_>) {
        let statement = Statement::classify(token.as_str());
        tracing::trace!(line = token.line(), kind = statement.kind_name(), "statement");

        match statement {
            Statement::Terminator => {}
            Statement::ElseMarker | Statement::Unrecognized => {
                env.emit(unrecognized_command(token.as_str()));
            }
            Statement::Assign { name, value } => {
                let value = resolve(env, value);
                env.bind(name, value);
            }
            Statement::Bind { name, query } => {
                let value = evaluate_query(query, QueryUse::Bind, env, cx);
                if value.is_error() {
                    env.emit(&value);
                }
                env.bind(name, value);
            }
            Statement::Emit(query) => {
                let value = evaluate_query(query, QueryUse::Emit, env, cx);
                env.emit(value);
            }
            Statement::Say(text) => match env.get(text).cloned() {
                Some(value) => env.emit(value),
                None => env.emit(text),
            },
            Statement::Loop { start, end } => {
                let block = self.collect_block(false);
                control::run_loop(start, end, &block.body, env, cx);
            }
            Statement::Repeat { message } => {
                let block = self.collect_block(false);
                control::start_repetition(message, &block.body, env, cx);
            }
            Statement::If { lhs, rhs } => {
                let block = self.collect_block(true);
                control::run_conditional(lhs, rhs, &block, env, cx);
            }
            Statement::Define { name, params } => {
                let block = self.collect_block(false);
                let params = params.iter().map(|p| (*p).to_string()).collect();
                tracing::debug!(function = name, body_len = block.body.len(), "define");
                env.define_function(name, FunctionDef::new(params, block.body));
            }
            Statement::PromptName => {
                let answer = cx.host.prompt_for_name();
                env.bind(NAME_VARIABLE, answer.map_or(Value::Undefined, Value::Text));
            }
            Statement::SetInterval { seconds } => env.set_interval_secs(seconds),
        }
    }

    /// Pull the body of the block whose header was just consumed, up to and
    /// including its `thats it`.
    ///
    /// Nested blocks are copied whole, terminator included, so only a
    /// terminator at this level ends the block. With `split_on_else`, an
    /// `or if not` at this level moves collection to [`Block::alternate`].
    /// A block with no terminator runs to the end of the tokens.
    pub fn collect_block(&mut self, split_on_else: bool) -> Block {
        let mut block = Block::default();
        let mut in_alternate = false;

        while let Some(token) = self.next_token() {
            let statement = Statement::classify(token.as_str());
            match statement {
                Statement::Terminator => break,
                Statement::ElseMarker if split_on_else => {
                    in_alternate = true;
                    continue;
                }
                _ => {}
            }

            let target = if in_alternate {
                &mut block.alternate
            } else {
                &mut block.body
            };
            target.push(token.clone());
            if statement.opens_block() {
                self.copy_nested(target);
            }
        }
        block
    }

    fn copy_nested(&mut self, into: &mut Vec<Token>) {
        ensure_sufficient_stack(|| {
            while let Some(token) = self.next_token() {
                into.push(token.clone());
                let statement = Statement::classify(token.as_str());
                if statement == Statement::Terminator {
                    return;
                }
                if statement.opens_block() {
                    self.copy_nested(into);
                }
            }
        });
    }
}

/// Run `body` in `scope` and return what it printed.
pub(crate) fn run_block(body: &[Token], mut scope: Environment, cx: &mut RunContext<'_>) -> String {
    ensure_sufficient_stack(|| Executor::new(body).run(&mut scope, cx));
    scope.into_output()
}

fn evaluate_query(
    query: Query<'_>,
    usage: QueryUse,
    env: &mut Environment,
    cx: &mut RunContext<'_>,
) -> Value {
    match query {
        Query::Variable(name) => lookup(env, name),
        Query::Arithmetic { lhs, operator, rhs } => arithmetic(env, lhs, operator, rhs),
        Query::Call { function, args } => {
            let result = call::call_function(function, &args, env, cx);
            match usage {
                QueryUse::Emit => result,
                QueryUse::Bind => result.into_numeric_if_possible(),
            }
        }
    }
}
