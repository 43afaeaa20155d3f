//! Host capabilities for displaying output and answering prompts.
//!
//! The interpreter only produces text. Where that text goes, and where the
//! answer to `ask: what is your name?` comes from, is decided by the host:
//! - Terminal: the CLI prints to stdout and reads stdin
//! - Embedding: [`BufferHost`] records every display for later inspection
//! - Headless: [`SilentHost`] discards output and never answers

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// What the interpreter needs from its surroundings.
///
/// Called from repetition timers as well as the run thread, hence
/// `Send + Sync`.
pub trait Host: Send + Sync {
    /// Render the full output produced so far.
    fn display_output(&self, text: &str);

    /// Ask the user for their name. `None` when no answer is available.
    fn prompt_for_name(&self) -> Option<String>;
}

pub type SharedHost = Arc<dyn Host>;

/// Host that displays nothing and never answers prompts.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentHost;

impl Host for SilentHost {
    fn display_output(&self, _text: &str) {}

    fn prompt_for_name(&self) -> Option<String> {
        None
    }
}

/// Host that records every display and answers prompts from a queue.
#[derive(Debug, Default)]
pub struct BufferHost {
    displays: Mutex<Vec<String>>,
    names: Mutex<VecDeque<String>>,
}

impl BufferHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that answers the next prompts with `names`, in order.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferHost {
            displays: Mutex::default(),
            names: Mutex::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// The most recent display, if any.
    pub fn last_display(&self) -> Option<String> {
        self.displays.lock().last().cloned()
    }

    pub fn displays(&self) -> Vec<String> {
        self.displays.lock().clone()
    }

    pub fn display_count(&self) -> usize {
        self.displays.lock().len()
    }
}

impl Host for BufferHost {
    fn display_output(&self, text: &str) {
        self.displays.lock().push(text.to_string());
    }

    fn prompt_for_name(&self) -> Option<String> {
        self.names.lock().pop_front()
    }
}
