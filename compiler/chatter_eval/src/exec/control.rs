//! Loops, conditionals and repetitions.

use chatter_lexer::Token;

use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::evaluator::{lookup, resolve};
use crate::repetition::PendingRepetition;
use crate::statement::{Statement, LOOP_VARIABLE};
use crate::value::Value;

use super::{run_block, Block, RunContext};

/// Number of iterations of `first..=last` stepping by one.
fn iteration_count(first: f64, last: f64) -> f64 {
    if last < first {
        0.0
    } else {
        (last - first).floor() + 1.0
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    reason = "iteration counts are checked against the loop limit first"
)]
#[tracing::instrument(level = "debug", skip(body, env, cx))]
pub(super) fn run_loop(
    start: &str,
    end: &str,
    body: &[Token],
    env: &mut Environment,
    cx: &mut RunContext<'_>,
) {
    let bounds = (resolve(env, start).as_number(), resolve(env, end).as_number());
    let (Some(first), Some(last)) = bounds else {
        env.emit(RuntimeError::InvalidLoopBounds);
        return;
    };
    if first.is_nan() || last.is_nan() {
        env.emit(RuntimeError::InvalidLoopBounds);
        return;
    }

    let count = iteration_count(first, last);
    let limit = cx.config.max_loop_iterations;
    if count > limit as f64 {
        let iterations = count as u64;
        env.emit(RuntimeError::LoopLimitExceeded { iterations, limit });
        return;
    }

    let count = count as u64;
    for step in 0..count {
        let mut scope = env.child();
        scope.bind(LOOP_VARIABLE, Value::Number(first + step as f64));
        let output = run_block(body, scope, cx);
        env.append_output(&output);
    }
}

/// `if <lhs> is greater than <rhs>`: both operands are variables.
#[tracing::instrument(level = "debug", skip(block, env, cx))]
pub(super) fn run_conditional(
    lhs: &str,
    rhs: &str,
    block: &Block,
    env: &mut Environment,
    cx: &mut RunContext<'_>,
) {
    let a = lookup(env, lhs).as_number();
    let b = lookup(env, rhs).as_number();
    let (Some(a), Some(b)) = (a, b) else {
        env.emit(RuntimeError::InvalidConditionalOperands);
        return;
    };

    let branch = if a > b { &block.body } else { &block.alternate };
    if branch.is_empty() {
        return;
    }
    let output = run_block(branch, env.child(), cx);
    env.append_output(&output);
}

/// Print the message now and queue the timer for when the pass completes.
///
/// Only the interval statement inside the body has any effect; it also
/// sets the scope's interval for later repetitions.
pub(super) fn start_repetition(
    message: &str,
    body: &[Token],
    env: &mut Environment,
    cx: &mut RunContext<'_>,
) {
    for token in body {
        if let Statement::SetInterval { seconds } = Statement::classify(token.as_str()) {
            env.set_interval_secs(seconds);
        }
    }

    let interval = cx.config.repetition_interval(env.interval_secs());
    tracing::debug!(message, ?interval, "queued repetition");
    env.emit(message);
    cx.pending.push(PendingRepetition {
        message: message.to_string(),
        interval,
    });
}
