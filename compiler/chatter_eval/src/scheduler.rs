//! Periodic timer capability backing `repeat ... forever`.
//!
//! The interpreter never sleeps on its own. It hands repeating work to a
//! [`Scheduler`] and keeps the returned [`TaskId`] so it can cancel it later.
//!
//! - [`ThreadScheduler`]: one worker thread per task, for native hosts.
//! - [`ManualScheduler`]: a virtual clock the host advances explicitly, for
//!   tests and hosts that drive their own event loop.
//!
//! Cancellation is synchronous for both: once `cancel` returns, the task has
//! fired for the last time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// Work run on every firing.
pub type Task = Box<dyn FnMut() + Send + 'static>;

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Timer primitive: run `task` every `interval` until cancelled.
pub trait Scheduler: Send + Sync {
    fn schedule_periodic(&self, interval: Duration, task: Task) -> TaskId;

    /// Cancel a task. Unknown or already-cancelled ids are ignored.
    fn cancel(&self, id: TaskId);
}

pub type SharedScheduler = Arc<dyn Scheduler>;

/// Shortest interval a task may be scheduled with.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

// ThreadScheduler

struct Worker {
    /// Dropping the sender wakes the worker and ends its loop.
    stop: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Worker {
    fn shut_down(self, id: TaskId) {
        drop(self.stop);
        if self.handle.join().is_err() {
            tracing::warn!(task = id.raw(), "repetition task panicked");
        }
    }
}

/// Runs each task on its own thread.
#[derive(Default)]
pub struct ThreadScheduler {
    next_id: AtomicU64,
    workers: Mutex<FxHashMap<TaskId, Worker>>,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_periodic(&self, interval: Duration, mut task: Task) -> TaskId {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let interval = interval.max(MIN_INTERVAL);
        let (stop, stopped) = mpsc::channel::<()>();

        let spawned = thread::Builder::new()
            .name(format!("chatter-repeat-{}", id.raw()))
            .spawn(move || {
                while let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(interval) {
                    task();
                }
            });

        match spawned {
            Ok(handle) => {
                self.workers.lock().insert(id, Worker { stop, handle });
                tracing::debug!(task = id.raw(), ?interval, "scheduled repetition thread");
            }
            Err(err) => tracing::warn!(%err, "failed to spawn repetition thread"),
        }
        id
    }

    fn cancel(&self, id: TaskId) {
        let worker = self.workers.lock().remove(&id);
        if let Some(worker) = worker {
            worker.shut_down(id);
        }
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        for (id, worker) in self.workers.get_mut().drain() {
            worker.shut_down(id);
        }
    }
}

// ManualScheduler

struct ManualTask {
    id: TaskId,
    interval: Duration,
    next_due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    tasks: Vec<ManualTask>,
}

/// Scheduler driven by a virtual clock.
///
/// Nothing fires until [`ManualScheduler::advance`] is called; tasks then
/// fire in due-time order exactly as often as the elapsed time allows.
/// Tasks run while the scheduler is locked and must not call back into it.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing every task that comes due.
    ///
    /// Returns how many firings happened.
    pub fn advance(&self, by: Duration) -> usize {
        let mut state = self.state.lock();
        let target = state.now.saturating_add(by);
        let mut fired = 0;

        loop {
            let due = state
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.next_due <= target)
                .min_by_key(|(_, t)| t.next_due)
                .map(|(index, _)| index);
            let Some(index) = due else { break };

            let ManualState { now, tasks, .. } = &mut *state;
            let entry = &mut tasks[index];
            *now = entry.next_due;
            entry.next_due = entry.next_due.saturating_add(entry.interval);
            (entry.task)();
            fired += 1;
        }

        state.now = target;
        fired
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of tasks still scheduled.
    pub fn pending(&self) -> usize {
        self.state.lock().tasks.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_periodic(&self, interval: Duration, task: Task) -> TaskId {
        let mut state = self.state.lock();
        let id = TaskId(state.next_id);
        state.next_id += 1;
        let interval = interval.max(MIN_INTERVAL);
        let next_due = state.now.saturating_add(interval);
        state.tasks.push(ManualTask {
            id,
            interval,
            next_due,
            task,
        });
        id
    }

    fn cancel(&self, id: TaskId) {
        self.state.lock().tasks.retain(|t| t.id != id);
    }
}
