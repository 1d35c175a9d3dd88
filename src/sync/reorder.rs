use futures::future::join_all;
use log::{error, info};

use crate::entities::{Task, TaskUpdate};
use crate::sync::{ServiceError, TaskService, TaskSource};

/// Outcome of committing a new task order.
#[derive(Debug, Clone)]
pub enum ReorderOutcome {
    /// Every priority update succeeded; holds the renumbered tasks in their new order
    Committed(Vec<Task>),
    /// At least one update failed and the list was reloaded from the service
    Reloaded { source: TaskSource, error: ServiceError },
}

impl ReorderOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, ReorderOutcome::Committed(_))
    }

    pub fn tasks(&self) -> &[Task] {
        match self {
            ReorderOutcome::Committed(tasks) => tasks,
            ReorderOutcome::Reloaded { source, .. } => source.tasks(),
        }
    }
}

/// Assign priorities 1..=n following the order of `tasks`.
pub fn renumber_priorities(tasks: Vec<Task>) -> Vec<Task> {
    tasks
        .into_iter()
        .zip(1..)
        .map(|(mut task, priority)| {
            task.priority = priority;
            task
        })
        .collect()
}

impl TaskService {
    /// Persists a new display order.
    ///
    /// Priorities are renumbered to follow `ordered`, then one update per
    /// task is sent concurrently and all of them are awaited. If any update
    /// fails the optimistic order is discarded and the list is reloaded
    /// with [`TaskService::get_tasks`].
    pub async fn commit_reorder(&self, ordered: Vec<Task>) -> ReorderOutcome {
        let renumbered = renumber_priorities(ordered);

        let updates = renumbered
            .iter()
            .map(|task| self.update_task(&task.id, TaskUpdate::priority(task.priority)));
        let results = join_all(updates).await;

        match results.into_iter().find_map(Result::err) {
            None => {
                info!("Saved order of {} tasks", renumbered.len());
                ReorderOutcome::Committed(renumbered)
            }
            Some(error) => {
                error!("Failed to update task priorities: {}", error);
                let source = self.get_tasks().await;
                ReorderOutcome::Reloaded { source, error }
            }
        }
    }
}
