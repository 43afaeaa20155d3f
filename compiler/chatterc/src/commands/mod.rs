//! Command handlers for the `chatter` CLI.
//!
//! Each submodule implements one command. Script loading shared by all of
//! them lives here.

use std::io::Read;

mod check;
mod lex;
mod run;

pub use check::{check_file, unrecognized_lines};
pub use lex::{lex_file, lex_listing};
pub use run::{parse_run_args, run_file, RunArgs, RunOptions};

/// Path that means "read the script from stdin".
pub const STDIN_PATH: &str = "-";

/// Read a script, exiting with a friendly message when that fails.
pub(crate) fn read_file(path: &str) -> String {
    let result = if path == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };

    match result {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
