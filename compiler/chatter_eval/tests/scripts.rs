//! End-to-end script behaviour through the public `Interpreter` API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use chatter_eval::{Interpreter, ManualScheduler};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run(source: &str) -> String {
    Interpreter::builder()
        .scheduler(Arc::new(ManualScheduler::new()))
        .build()
        .run(source)
}

#[test]
fn addition() {
    assert_eq!(run("Whats 3 plus 4?"), "7\n");
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(run("Whats 10 divided by 0?"), "Error: Division by zero\n");
}

#[test]
fn undefined_variable_does_not_halt() {
    let output = run("Whats x?\nx is 2\nWhats x?");
    assert!(output
        .lines()
        .any(|line| line == "Error: Variable 'x' is not defined."));
    assert!(output.ends_with("2\n"));
}

#[test]
fn loop_says_hi_three_times() {
    assert_eq!(
        run("loop through numbers 1 to 3\nsay hi\nthats it"),
        "hi\nhi\nhi\n"
    );
}

#[test]
fn conditional_branches() {
    let body = "if a is greater than b\nsay yes\nor if not\nsay no\nthats it";
    assert_eq!(run(&format!("a is 5\nb is 2\n{body}")), "yes\n");
    assert_eq!(run(&format!("a is 2\nb is 5\n{body}")), "no\n");
}

#[test]
fn function_call_result() {
    let source = "\
add with numbers a and b
c is Whats a plus b?
say c
thats it
Whats add with numbers 3 and 4?";
    assert_eq!(run(source), "7\n");
}

#[test]
fn call_errors_never_halt() {
    let source = "\
Whats missing with numbers 1 and 2?
say one
Whats also missing?
say two";
    let output = run(source);
    assert_eq!(
        output,
        "Error: Function 'missing' is not defined.\n\
         one\n\
         Unrecognized command: Whats also missing?\n\
         two\n"
    );
}

#[test]
fn comments_never_reach_output() {
    let source = "\
note this whole line is a comment
Note: so is this
say visible note but this part is not
x is 4 note trailing remark
Whats x?";
    assert_eq!(run(source), "visible\n4\n");
}

#[test]
fn comment_keyword_inside_words_is_kept() {
    assert_eq!(run("say my notebook"), "my notebook\n");
}

#[test]
fn nested_loops_and_current() {
    let source = "\
loop through numbers 1 to 3
loop through numbers 1 to 2
say tick
thats it
thats it";
    assert_eq!(run(source).lines().count(), 6);

    let source = "\
one is 1
loop through numbers 1 to 2
if current is greater than one
say second
or if not
say first
thats it
thats it";
    assert_eq!(run(source), "first\nsecond\n");
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        run("X IS 3\nWHATS X TIMES 2?\nSAY Done\nLOOP THROUGH NUMBERS 1 TO 2\nSay hi\nTHATS IT"),
        "6\nDone\nhi\nhi\n"
    );
}

#[test]
fn recursion_through_helper_functions() {
    let source = "\
square with numbers n and unused
Whats n times n?
thats it
sum_squares with numbers a and b
x is Whats square with a and 0?
y is Whats square with b and 0?
Whats x plus y?
thats it
Whats sum_squares with numbers 3 and 4?";
    assert_eq!(run(source), "25\n");
}

proptest! {
    #[test]
    fn assigned_integers_read_back_unchanged(name in "[a-z][a-z_]{0,8}", value in -100_000i64..100_000) {
        prop_assume!(name != "note" && name != "whats" && name != "say");
        let output = run(&format!("{name} is {value}\nWhats {name}?"));
        prop_assert_eq!(output, format!("{value}\n"));
    }
}
