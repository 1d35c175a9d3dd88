//! In-memory task list controller.
//!
//! [`TaskBoard`] keeps the list a user is looking at and performs the list
//! edits around each service call: appending created tasks, swapping in
//! updated ones, dropping deleted ones, and rolling back a failed reorder.

use log::{info, warn};

use crate::constants::ERROR_TITLE_REQUIRED;
use crate::entities::{Task, TaskCreate};
use crate::sync::{ReorderOutcome, ServiceError, Synced, TaskService, TaskSource};
use crate::utils::validation::{get_next_priority, sort_tasks_by_priority, validate_task_title};

pub struct TaskBoard {
    service: TaskService,
    tasks: Vec<Task>,
    offline: bool,
    max_priority: Option<i64>,
}

impl TaskBoard {
    /// Creates an empty board. Call [`TaskBoard::load`] to fill it.
    ///
    /// # Arguments
    /// * `service` - Service used for every remote operation
    /// * `max_priority` - Cap applied to the priority of added tasks
    pub fn new(service: TaskService, max_priority: Option<i64>) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            offline: false,
            max_priority,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether the list currently shown came from fallback data
    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn service(&self) -> &TaskService {
        &self.service
    }

    /// Replaces the list with a fresh load from the service, in priority order.
    pub async fn load(&mut self) {
        let source = self.service.get_tasks().await;
        self.show(source);
    }

    fn show(&mut self, source: TaskSource) {
        self.offline = source.is_fallback();
        self.tasks = sort_tasks_by_priority(source.tasks());
    }

    /// Priority given to the next added task.
    pub fn next_priority(&self) -> i64 {
        let next = get_next_priority(&self.tasks);
        match self.max_priority {
            Some(max) => next.min(max),
            None => next,
        }
    }

    /// Creates a task at the end of the list.
    ///
    /// # Errors
    /// Returns [`ServiceError::Validation`] for a blank or invalid title
    pub async fn add(&mut self, title: &str) -> Result<Synced<Task>, ServiceError> {
        if !validate_task_title(title) {
            return Err(ServiceError::Validation(ERROR_TITLE_REQUIRED.to_string()));
        }

        let input = TaskCreate {
            title: title.to_string(),
            priority: self.next_priority(),
            done: Some(false),
            task_id: None,
        };
        let created = self.service.create_task_tracked(input).await?;
        self.tasks.push(created.as_inner().clone());
        Ok(created)
    }

    /// Finds a task on the board by `id` or stringified `task_id`.
    pub fn find(&self, id: &str) -> Option<&Task> {
        // An exact `id` match wins over another task whose `task_id` reads the same.
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .or_else(|| self.tasks.iter().find(|t| t.matches_id(id)))
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `Ok(None)` when no such task is on the board.
    pub async fn toggle(&mut self, id: &str) -> Result<Option<Task>, ServiceError> {
        let Some(task) = self.find(id).cloned() else {
            return Ok(None);
        };

        let updated = self.service.toggle_task(&task).await?;
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = updated.clone();
        }
        Ok(Some(updated))
    }

    /// Deletes the task with `id` and removes it from the board.
    pub async fn remove(&mut self, id: &str) -> Result<(), ServiceError> {
        let id = self.find(id).map_or_else(|| id.to_string(), |t| t.id.clone());
        let result = self.service.delete_task_tracked(&id).await?;
        if result.is_local() {
            warn!("Task {} removed from the board only", id);
        }
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }

    /// Moves the task at `from` to position `to` and persists the new order.
    ///
    /// Positions index the board as shown, which is sorted by priority.
    ///
    /// The move is applied immediately. If saving fails, the board is
    /// replaced with a fresh load and the error is returned.
    ///
    /// # Errors
    /// Returns [`ServiceError::NotFound`] for an out-of-range index, or the
    /// error that made the reorder fail
    pub async fn move_task(&mut self, from: usize, to: usize) -> Result<(), ServiceError> {
        if from >= self.tasks.len() || to >= self.tasks.len() {
            return Err(ServiceError::NotFound(format!("position {}", from.max(to) + 1)));
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);

        match self.service.commit_reorder(self.tasks.clone()).await {
            ReorderOutcome::Committed(tasks) => {
                info!("Moved task from {} to {}", from + 1, to + 1);
                self.tasks = tasks;
                Ok(())
            }
            ReorderOutcome::Reloaded { source, error } => {
                self.show(source);
                Err(error)
            }
        }
    }
}
