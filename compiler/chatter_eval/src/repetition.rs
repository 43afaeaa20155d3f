//! `repeat ... forever` support.
//!
//! A repetition prints its message once while the script runs, then keeps
//! printing it on a timer until stopped. The timer is started only after the
//! synchronous pass finishes, so the immediate output always comes first.

use std::sync::Arc;
use std::time::Duration;

use crate::host::SharedHost;
use crate::scheduler::{SharedScheduler, TaskId};
use crate::transcript::Transcript;

/// Appended to the transcript whenever repetitions are stopped.
pub const TERMINATION_NOTICE: &str = "\nInfinite loops terminated.\n";

/// A repetition found during the pass, waiting to be started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingRepetition {
    pub message: String,
    pub interval: Duration,
}

/// Owns the timer tasks of the active repetitions.
pub struct RepetitionController {
    scheduler: SharedScheduler,
    active: Vec<TaskId>,
}

impl RepetitionController {
    pub fn new(scheduler: SharedScheduler) -> Self {
        RepetitionController {
            scheduler,
            active: Vec::new(),
        }
    }

    /// Start firing `repetition`: each firing appends its message to the
    /// transcript and displays the whole transcript.
    pub(crate) fn start(
        &mut self,
        repetition: PendingRepetition,
        transcript: &Transcript,
        host: &SharedHost,
    ) -> TaskId {
        let PendingRepetition { message, interval } = repetition;
        let transcript = transcript.clone();
        let host = Arc::clone(host);

        tracing::debug!(%message, ?interval, "starting repetition");
        let id = self.scheduler.schedule_periodic(
            interval,
            Box::new(move || {
                let full = transcript.push_line(&message);
                host.display_output(&full);
            }),
        );
        self.active.push(id);
        id
    }

    /// Cancel every active repetition without touching the transcript.
    pub fn cancel_all(&mut self) {
        if !self.active.is_empty() {
            tracing::debug!(count = self.active.len(), "cancelling repetitions");
        }
        for id in self.active.drain(..) {
            self.scheduler.cancel(id);
        }
    }

    /// Cancel every active repetition and append [`TERMINATION_NOTICE`].
    pub fn stop_all(&mut self, transcript: &Transcript) {
        self.cancel_all();
        transcript.append(TERMINATION_NOTICE);
    }

    pub fn active(&self) -> usize {
        self.active.len()
    }
}

impl Drop for RepetitionController {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
