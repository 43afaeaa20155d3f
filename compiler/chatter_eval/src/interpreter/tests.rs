#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;
use crate::host::BufferHost;
use crate::repetition::TERMINATION_NOTICE;
use crate::scheduler::ManualScheduler;

struct Harness {
    interpreter: Interpreter,
    scheduler: Arc<ManualScheduler>,
    host: Arc<BufferHost>,
}

fn harness() -> Harness {
    let scheduler = Arc::new(ManualScheduler::new());
    let host = Arc::new(BufferHost::new());
    let interpreter = Interpreter::builder()
        .host(host.clone())
        .scheduler(scheduler.clone())
        .build();
    Harness {
        interpreter,
        scheduler,
        host,
    }
}

#[test]
fn run_returns_and_displays_output() {
    let mut h = harness();
    let output = h.interpreter.run("Whats 3 plus 4?");
    assert_eq!(output, "7\n");
    assert_eq!(h.interpreter.output(), "7\n");
    assert_eq!(h.host.last_display().as_deref(), Some("7\n"));
}

#[test]
fn each_run_starts_clean() {
    let mut h = harness();
    h.interpreter.run("x is 1\nsay first");
    let output = h.interpreter.run("Whats x?");
    assert_eq!(output, "Error: Variable 'x' is not defined.\nUndefined\n");
}

#[test]
fn repetition_fires_after_the_pass() {
    let mut h = harness();
    let output = h.interpreter.run("repeat hi forever\nthats it\nsay done");
    assert_eq!(output, "hi\ndone\n");
    assert_eq!(h.interpreter.active_repetitions(), 1);

    h.scheduler.advance(Duration::from_secs(2));
    assert_eq!(h.interpreter.output(), "hi\ndone\nhi\nhi\n");
    assert_eq!(h.host.last_display().as_deref(), Some("hi\ndone\nhi\nhi\n"));
}

#[test]
fn stop_cancels_and_appends_notice() {
    let mut h = harness();
    h.interpreter.run("repeat hi forever\nthats it");
    h.scheduler.advance(Duration::from_secs(1));

    let output = h.interpreter.stop();
    h.scheduler.advance(Duration::from_secs(5));

    assert_eq!(output, format!("hi\nhi\n{TERMINATION_NOTICE}"));
    assert_eq!(h.interpreter.output(), output);
    assert_eq!(h.interpreter.active_repetitions(), 0);
    assert_eq!(output.matches("Infinite loops terminated.").count(), 1);
}

#[test]
fn new_run_cancels_old_repetitions_silently() {
    let mut h = harness();
    h.interpreter.run("repeat old forever\nthats it");
    let output = h.interpreter.run("say new");
    h.scheduler.advance(Duration::from_secs(3));

    assert_eq!(output, "new\n");
    assert_eq!(h.interpreter.output(), "new\n");
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn builder_limits_apply() {
    let mut interpreter = Interpreter::builder()
        .max_loop_iterations(2)
        .max_call_depth(7)
        .default_interval(Duration::from_millis(500))
        .scheduler(Arc::new(ManualScheduler::new()))
        .build();
    assert_eq!(interpreter.config().max_call_depth, 7);
    assert_eq!(
        interpreter.config().default_interval,
        Duration::from_millis(500)
    );
    assert_eq!(
        interpreter.run("loop through numbers 1 to 3\nsay x\nthats it"),
        "Error: Loop would run 3 times, more than the limit of 2.\n"
    );
}

#[test]
fn prompt_uses_injected_host() {
    let host = Arc::new(BufferHost::with_names(["Grace"]));
    let mut interpreter = Interpreter::builder()
        .host(host.clone())
        .scheduler(Arc::new(ManualScheduler::new()))
        .build();
    assert_eq!(
        interpreter.run("ask: what is your name?\nsay name"),
        "Grace\n"
    );
}
