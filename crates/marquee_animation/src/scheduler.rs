//! Task scheduler
//!
//! Owns the recurring tasks of one mounted overlay (image rotation,
//! decorative twinkles). Time is pushed in by the owner via [`advance`] or
//! the wall-clock [`tick`]; nothing runs on its own thread.
//!
//! [`advance`]: TaskScheduler::advance
//! [`tick`]: TaskScheduler::tick

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle of a scheduled task
    pub struct TaskId;
}

/// Shortest interval a task may use
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Most firings of one task per advance; older backlog is dropped
pub const MAX_CATCH_UP: usize = 16;

struct ScheduledTask<T> {
    label: &'static str,
    payload: T,
    interval: Duration,
    elapsed: Duration,
}

/// Tasks that came due during one advance
pub type FiredTasks<T> = SmallVec<[(TaskId, T); 4]>;

/// Interval scheduler owned by a single overlay instance
pub struct TaskScheduler<T> {
    tasks: SlotMap<TaskId, ScheduledTask<T>>,
    last_tick: Instant,
}

impl<T: Copy> TaskScheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            last_tick: Instant::now(),
        }
    }

    /// Schedule `payload` to fire every `interval`.
    pub fn schedule_interval(&mut self, label: &'static str, interval: Duration, payload: T) -> TaskId {
        let interval = interval.max(MIN_INTERVAL);
        let id = self.tasks.insert(ScheduledTask {
            label,
            payload,
            interval,
            elapsed: Duration::ZERO,
        });
        tracing::debug!(task = label, interval_ms = interval.as_millis() as u64, "task scheduled");
        id
    }

    /// Cancel one task. Returns false if it was already gone.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.tasks.remove(id) {
            Some(task) => {
                tracing::debug!(task = task.label, "task cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancel every task. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        if count > 0 {
            tracing::debug!(count, "cancelling all tasks");
        }
        self.tasks.clear();
        count
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advance time by `dt` and collect every task that came due.
    ///
    /// A task fires once per full interval elapsed, up to [`MAX_CATCH_UP`]
    /// times. After a longer stall only the phase within the current
    /// interval is kept.
    pub fn advance(&mut self, dt: Duration) -> FiredTasks<T> {
        let mut fired = FiredTasks::new();
        for (id, task) in self.tasks.iter_mut() {
            task.elapsed = task.elapsed.saturating_add(dt);
            let mut due = 0;
            while task.elapsed >= task.interval && due < MAX_CATCH_UP {
                task.elapsed -= task.interval;
                fired.push((id, task.payload));
                due += 1;
            }
            if task.elapsed >= task.interval {
                let phase = task.elapsed.as_nanos() % task.interval.as_nanos();
                tracing::trace!(task = task.label, "dropping missed firings");
                task.elapsed = Duration::from_nanos(phase as u64);
            }
        }
        fired
    }

    /// Advance by the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> FiredTasks<T> {
        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        self.advance(dt)
    }
}

impl<T: Copy> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
