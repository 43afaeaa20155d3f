//! Run-wide output shared with repetition timers.

use std::sync::Arc;

use parking_lot::Mutex;

/// Append-only output of one run.
///
/// Cloning yields another handle to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct Transcript(Arc<Mutex<String>>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, text: &str) {
        self.0.lock().push_str(text);
    }

    /// Append `line` plus a newline and return the full text, both under one
    /// lock so concurrent firings never display a torn snapshot.
    pub fn push_line(&self, line: &str) -> String {
        let mut text = self.0.lock();
        text.push_str(line);
        text.push('\n');
        text.clone()
    }

    pub fn snapshot(&self) -> String {
        self.0.lock().clone()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clones_share_the_buffer() {
        let transcript = Transcript::new();
        let handle = transcript.clone();
        transcript.append("a\n");
        assert_eq!(handle.push_line("b"), "a\nb\n");
        assert_eq!(transcript.snapshot(), "a\nb\n");
    }
}
