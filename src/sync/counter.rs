use std::sync::atomic::{AtomicI64, Ordering};

use crate::entities::Task;
use crate::utils::validation::get_next_task_id;

/// Source of client-side `task_id` values.
///
/// Each [`super::TaskService`] owns one. It is reseeded from whatever task
/// set the service last loaded, so it can drift from the server's own
/// numbering; the server's ids win whenever it is reachable.
#[derive(Debug)]
pub struct TaskIdCounter {
    next: AtomicI64,
}

impl TaskIdCounter {
    pub fn new() -> Self {
        Self { next: AtomicI64::new(1) }
    }

    /// Reset the counter to one past the highest `task_id` in `tasks`.
    ///
    /// An empty set leaves the counter where it is.
    pub fn seed_from(&self, tasks: &[Task]) {
        if !tasks.is_empty() {
            self.next.store(get_next_task_id(tasks), Ordering::SeqCst);
        }
    }

    /// Make sure ids handed out later are greater than `task_id`.
    pub fn observe(&self, task_id: i64) {
        self.next.fetch_max(task_id.saturating_add(1), Ordering::SeqCst);
    }

    /// Value the next call to [`TaskIdCounter::next_id`] will return
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Hands out the current value and advances. Stops advancing at `i64::MAX`.
    pub fn next_id(&self) -> i64 {
        match self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_add(1)))
        {
            Ok(previous) | Err(previous) => previous,
        }
    }
}

impl Default for TaskIdCounter {
    fn default() -> Self {
        Self::new()
    }
}
