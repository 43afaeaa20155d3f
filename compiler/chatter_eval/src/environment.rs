//! Environment for one executing scope.
//!
//! Every block, loop iteration and function call runs against its own
//! `Environment`. A child is a *snapshot* of its parent taken at entry: the
//! binding maps are copied, so assignments inside the child never reach the
//! parent. The only thing that flows back up is text, via
//! [`Environment::append_output`] once the child has finished.

use std::fmt;
use std::rc::Rc;

use chatter_lexer::Token;
use rustc_hash::FxHashMap;

use crate::value::Value;

/// A user-defined function: parameter names and the statements of its body.
///
/// Immutable once defined. Shared between scope snapshots through `Rc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    params: Vec<String>,
    body: Vec<Token>,
}

impl FunctionDef {
    pub fn new(params: Vec<String>, body: Vec<Token>) -> Self {
        FunctionDef { params, body }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &[Token] {
        &self.body
    }
}

/// Variable and function bindings plus the output buffer of one scope.
#[derive(Clone, Default)]
pub struct Environment {
    variables: FxHashMap<String, Value>,
    functions: FxHashMap<String, Rc<FunctionDef>>,
    /// Repetition interval override in seconds, set by the sleep statement.
    interval_secs: Option<u64>,
    output: String,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for a nested block: copies variables, functions and the
    /// interval override; starts with empty output.
    pub fn child(&self) -> Self {
        Environment {
            variables: self.variables.clone(),
            functions: self.functions.clone(),
            interval_secs: self.interval_secs,
            output: String::new(),
        }
    }

    /// Scope for a function call: the caller's functions but none of its
    /// variables.
    pub fn function_scope(&self) -> Self {
        Environment {
            variables: FxHashMap::default(),
            functions: self.functions.clone(),
            interval_secs: self.interval_secs,
            output: String::new(),
        }
    }

    #[inline]
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Define or overwrite a function.
    pub fn define_function(&mut self, name: impl Into<String>, function: FunctionDef) {
        self.functions.insert(name.into(), Rc::new(function));
    }

    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    pub fn interval_secs(&self) -> Option<u64> {
        self.interval_secs
    }

    pub fn set_interval_secs(&mut self, seconds: u64) {
        self.interval_secs = Some(seconds);
    }

    /// Append one line to this scope's output.
    pub fn emit(&mut self, line: impl fmt::Display) {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = writeln!(self.output, "{line}");
    }

    /// Merge a finished child's output.
    pub fn append_output(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut variables: Vec<_> = self.variables.keys().collect();
        variables.sort();
        let mut functions: Vec<_> = self.functions.keys().collect();
        functions.sort();
        f.debug_struct("Environment")
            .field("variables", &variables)
            .field("functions", &functions)
            .field("interval_secs", &self.interval_secs)
            .field("output_len", &self.output.len())
            .finish()
    }
}
