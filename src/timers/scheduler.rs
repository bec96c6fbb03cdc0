//! Deterministic scheduler on a virtual millisecond clock.
//!
//! Tasks fire in due-time order; ties fire in the order they were
//! scheduled. A repeating task keeps its handle and is re-queued at
//! `due + interval` each time it fires.

use serde::{Deserialize, Serialize};

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Elapsed-time tick (repeating).
    Tick,
    /// Turn non-matched face-up cards back over (one-shot).
    Unflip,
    /// Announce the win and stop the clock (one-shot).
    DeclareWin,
}

/// A task that has come due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub kind: TaskKind,
    /// Virtual time the task was due at.
    pub at_ms: u64,
}

#[derive(Clone, Debug)]
struct Task {
    handle: TimerHandle,
    kind: TaskKind,
    due_ms: u64,
    /// Scheduling order, for tie-breaks.
    seq: u64,
    interval_ms: Option<u64>,
}

/// Virtual clock plus pending deferred tasks.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_handle: u64,
    next_seq: u64,
    tasks: Vec<Task>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Is this handle still scheduled?
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Count pending tasks of a kind.
    #[must_use]
    pub fn pending_of(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|t| t.kind == kind).count()
    }

    /// Run `kind` once, `delay_ms` from now.
    pub fn set_timeout(&mut self, kind: TaskKind, delay_ms: u64) -> TimerHandle {
        self.schedule(kind, delay_ms, None)
    }

    /// Run `kind` every `interval_ms`, first firing one interval from now.
    ///
    /// Intervals shorter than 1 ms are clamped to 1 ms.
    pub fn set_interval(&mut self, kind: TaskKind, interval_ms: u64) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        self.schedule(kind, interval_ms, Some(interval_ms))
    }

    fn schedule(&mut self, kind: TaskKind, delay_ms: u64, interval_ms: Option<u64>) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let seq = self.bump_seq();
        self.tasks.push(Task {
            handle,
            kind,
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            interval_ms,
        });
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Cancel a task. Returns false if it was not pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Due time of the next task, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_ms).min()
    }

    /// Pop the next task due at or before `deadline_ms`.
    ///
    /// Moves the clock to that task's due time. Returns `None` once nothing
    /// else is due; call [`settle`](Self::settle) afterwards to move the
    /// clock the rest of the way.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<Fired> {
        let pos = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= deadline_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;

        let task = &self.tasks[pos];
        let fired = Fired {
            handle: task.handle,
            kind: task.kind,
            at_ms: task.due_ms,
        };
        let interval_ms = task.interval_ms;
        self.now_ms = self.now_ms.max(fired.at_ms);

        // A repeat that would land past the end of the clock is dropped.
        match interval_ms.and_then(|interval| fired.at_ms.checked_add(interval)) {
            Some(next_due) => {
                let seq = self.bump_seq();
                let task = &mut self.tasks[pos];
                task.due_ms = next_due;
                task.seq = seq;
            }
            None => {
                self.tasks.remove(pos);
            }
        }

        Some(fired)
    }

    /// Move the clock forward to `deadline_ms` without firing anything.
    pub fn settle(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }

    /// Fire everything due in the next `ms`, in order.
    ///
    /// Tasks scheduled by the caller while draining are not seen; callers
    /// that react to fired tasks should loop on [`pop_due`](Self::pop_due).
    pub fn advance(&mut self, ms: u64) -> Vec<Fired> {
        let deadline = self.now_ms.saturating_add(ms);
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(deadline) {
            fired.push(f);
        }
        self.settle(deadline);
        fired
    }
}
