//! Terminal host: stdout for output, stderr and stdin for prompts.

use std::io::{self, BufRead, Write};

use chatter_eval::Host;
use parking_lot::Mutex;

/// Prints only what each display adds to the previous one.
///
/// The interpreter always displays its whole transcript; a terminal cannot
/// redraw, so the already-printed prefix is skipped.
#[derive(Debug, Default)]
pub struct TerminalHost {
    shown: Mutex<usize>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Part of `text` not yet shown, advancing `shown`.
///
/// A shorter text than before means a new run began; it is shown whole.
fn unseen<'a>(text: &'a str, shown: &mut usize) -> &'a str {
    let fresh = text.get(*shown..).unwrap_or(text);
    *shown = text.len();
    fresh
}

impl Host for TerminalHost {
    fn display_output(&self, text: &str) {
        let mut shown = self.shown.lock();
        let fresh = unseen(text, &mut shown);
        let mut stdout = io::stdout().lock();
        // A closed stdout leaves nothing useful to do with the error.
        let _ = stdout.write_all(fresh.as_bytes());
        let _ = stdout.flush();
    }

    fn prompt_for_name(&self) -> Option<String> {
        eprint!("What is your name? ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(answer.trim().to_string()),
        }
    }
}
