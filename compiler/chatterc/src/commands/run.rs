//! The `run` command: execute a script and keep repetitions alive until
//! the user stops them.

use std::io::BufRead;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chatter_eval::Interpreter;

use super::{read_file, STDIN_PATH};
use crate::TerminalHost;

/// Overrides from the `run` command line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    pub interval: Option<Duration>,
    pub max_iterations: Option<u64>,
    pub max_depth: Option<usize>,
    /// Stop repetitions after this long instead of waiting for stdin.
    pub stop_after: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunArgs {
    pub path: String,
    pub options: RunOptions,
}

fn parse_seconds(flag: &str, value: &str) -> Result<Duration, String> {
    value
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| format!("invalid value for {flag}: '{value}' (expected seconds)"))
}

fn parse_count<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: '{value}' (expected a whole number)"))
}

/// Parse everything after `run`. Flags may appear before or after the path.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut path = None;
    let mut options = RunOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--interval=") {
            options.interval = Some(parse_seconds("--interval", value)?);
        } else if let Some(value) = arg.strip_prefix("--max-iterations=") {
            options.max_iterations = Some(parse_count("--max-iterations", value)?);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = Some(parse_count("--max-depth", value)?);
        } else if let Some(value) = arg.strip_prefix("--stop-after=") {
            options.stop_after = Some(parse_seconds("--stop-after", value)?);
        } else if (arg == STDIN_PATH || !arg.starts_with('-')) && path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(RunArgs { path, options })
}

/// Run a script, then stream repetitions until stopped.
pub fn run_file(args: &RunArgs) {
    let content = read_file(&args.path);
    let options = &args.options;

    let mut builder = Interpreter::builder().host(Arc::new(TerminalHost::new()));
    if let Some(interval) = options.interval {
        builder = builder.default_interval(interval);
    }
    if let Some(limit) = options.max_iterations {
        builder = builder.max_loop_iterations(limit);
    }
    if let Some(limit) = options.max_depth {
        builder = builder.max_call_depth(limit);
    }
    let mut interpreter = builder.build();

    interpreter.run(&content);

    if interpreter.active_repetitions() == 0 {
        return;
    }
    tracing::debug!(
        active = interpreter.active_repetitions(),
        "waiting for stop"
    );
    wait_for_stop(options.stop_after, args.path != STDIN_PATH);
    interpreter.stop();
}

/// Block until a line (or EOF) arrives on stdin or `stop_after` elapses.
fn wait_for_stop(stop_after: Option<Duration>, listen_on_stdin: bool) {
    let (stop, stopped) = mpsc::channel::<()>();

    // Holding the sender keeps `recv` blocked when stdin is not watched.
    let idle_sender = if listen_on_stdin {
        eprintln!("(press Enter to stop)");
        thread::spawn(move || {
            let mut line = String::new();
            let _ = std::io::stdin().lock().read_line(&mut line);
            let _ = stop.send(());
        });
        None
    } else {
        Some(stop)
    };

    match stop_after {
        Some(limit) => {
            let _ = stopped.recv_timeout(limit);
        }
        None => {
            let _ = stopped.recv();
        }
    }
    drop(idle_sender);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn path_and_flags_in_any_order() {
        let parsed = parse_run_args(&args(&[
            "--interval=0.5",
            "script.chat",
            "--max-iterations=10",
            "--max-depth=4",
            "--stop-after=2",
        ]));
        assert_eq!(
            parsed,
            Ok(RunArgs {
                path: "script.chat".to_string(),
                options: RunOptions {
                    interval: Some(Duration::from_millis(500)),
                    max_iterations: Some(10),
                    max_depth: Some(4),
                    stop_after: Some(Duration::from_secs(2)),
                },
            })
        );
    }

    #[test]
    fn dash_reads_stdin() {
        let parsed = parse_run_args(&args(&["-"]));
        assert_eq!(parsed.map(|a| a.path), Ok(STDIN_PATH.to_string()));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse_run_args(&args(&["f", "--interval=soon"])).is_err());
        assert!(parse_run_args(&args(&["f", "--interval=-1"])).is_err());
        assert!(parse_run_args(&args(&["f", "--max-depth=deep"])).is_err());
        assert!(parse_run_args(&args(&["f", "--verbose"])).is_err());
        assert!(parse_run_args(&args(&["a", "b"])).is_err());
    }

    #[test]
    fn path_is_required() {
        assert_eq!(
            parse_run_args(&args(&["--stop-after=1"])),
            Err("missing file path".to_string())
        );
    }
}
