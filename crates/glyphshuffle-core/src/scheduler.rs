#![forbid(unsafe_code)]

//! Virtual-time scheduler for pending animation steps.
//!
//! The engine runs on a hand-cranked clock: the host advances it with a
//! delta each frame, and the scheduler releases tasks whose deadlines fall
//! inside the advanced window, earliest first. Tasks released mid-advance
//! may schedule follow-ups that land inside the same window; draining via
//! [`Scheduler::pop_due`] keeps that causally ordered, because each pop
//! moves `now` to the released task's deadline before the caller runs it.
//!
//! There is no cancellation surface: a pending task against state that no
//! longer wants it simply fires with no observable effect.
//!
//! # Invariants
//!
//! 1. `now` is monotonically non-decreasing.
//! 2. Tasks are released in deadline order; ties release in insertion order.
//! 3. `pop_due(horizon)` never releases a task with deadline > `horizon`.
//! 4. A released task's deadline is `>= now` at release time.
//!
//! # Failure Modes
//!
//! - `advance_to` with a past instant: ignored (clock never rewinds).
//! - Draining an empty scheduler: `pop_due` returns `None`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

struct Entry<T> {
    deadline: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the earliest deadline (FIFO on ties).
    fn cmp(&self, other: &Self) -> Ordering {
        (other.deadline, other.seq).cmp(&(self.deadline, self.seq))
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Deadline-ordered task queue over a virtual clock.
pub struct Scheduler<T> {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Entry<T>>,
}

impl<T> std::fmt::Debug for Scheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    #[inline]
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether no tasks are pending.
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|entry| entry.deadline)
    }

    /// Schedule `task` to fire `delay` after the current virtual time.
    pub fn schedule_in(&mut self, delay: Duration, task: T) {
        let deadline = self.now.saturating_add(delay);
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Entry {
            deadline,
            seq,
            task,
        });
    }

    /// Release the earliest task due at or before `horizon`, moving the
    /// clock to its deadline. Returns `None` once nothing further is due;
    /// the caller then settles the clock with [`advance_to`](Self::advance_to).
    pub fn pop_due(&mut self, horizon: Duration) -> Option<T> {
        let due = self.next_deadline()?;
        if due > horizon {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.deadline);
        Some(entry.task)
    }

    /// Move the clock forward to `instant`. Past instants are ignored.
    pub fn advance_to(&mut self, instant: Duration) {
        self.now = self.now.max(instant);
    }

    /// Drop every pending task without running it.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
