//! User function calls.

use crate::environment::{Environment, FunctionDef};
use crate::errors::{argument_count_mismatch, undefined_function, RuntimeError};
use crate::evaluator::resolve;
use crate::value::Value;

use super::{run_block, RunContext};

pub(crate) fn check_arg_count(
    name: &str,
    function: &FunctionDef,
    args: &[&str],
) -> Result<(), RuntimeError> {
    let expected = function.params().len();
    if args.len() == expected {
        Ok(())
    } else {
        Err(argument_count_mismatch(name, expected))
    }
}

/// Call `name` with `args` resolved in the caller's scope.
///
/// The callee sees the caller's functions and its own parameters, never the
/// caller's variables. Its trimmed output is the result.
#[tracing::instrument(level = "debug", skip(env, cx), fields(depth = cx.call_depth))]
pub(crate) fn call_function(
    name: &str,
    args: &[&str],
    env: &Environment,
    cx: &mut RunContext<'_>,
) -> Value {
    let Some(function) = env.function(name) else {
        return undefined_function(name).into();
    };
    if let Err(err) = check_arg_count(name, &function, args) {
        return err.into();
    }
    let limit = cx.config.max_call_depth;
    if cx.call_depth >= limit {
        tracing::debug!(limit, "call depth exceeded");
        return RuntimeError::CallDepthExceeded { limit }.into();
    }

    let mut scope = env.function_scope();
    for (param, arg) in function.params().iter().zip(args) {
        scope.bind(param.as_str(), resolve(env, arg));
    }

    cx.call_depth += 1;
    let output = run_block(function.body(), scope, cx);
    cx.call_depth -= 1;

    Value::text(output.trim())
}
