use log::{debug, info, warn};
use serde_json::Value;

use crate::backend::{BackendError, CreateTaskArgs};
use crate::constants::{ERROR_PRIORITY_NOT_POSITIVE, ERROR_TITLE_REQUIRED, ERROR_TITLE_TOO_LONG, GENERATED_ID_PREFIX};
use crate::entities::{Task, TaskCreate, TaskUpdate};
use crate::sync::{ServiceError, Synced, TaskService, TaskSource};
use crate::utils::datetime;
use crate::utils::validation::{
    filter_valid_tasks, sanitize_task_title, title_exceeds_limit, validate_task, validate_task_priority,
    validate_task_title, TitlePolicy,
};

/// Fill in a missing, null or empty `id` from the `task_id`.
fn normalize_task_id(candidate: &mut Value) {
    let Some(obj) = candidate.as_object_mut() else {
        return;
    };

    let has_id = match obj.get("id") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };
    if has_id {
        return;
    }

    let generated = match obj.get("task_id") {
        Some(Value::Number(n)) => format!("{}{}", GENERATED_ID_PREFIX, n),
        Some(Value::String(s)) => format!("{}{}", GENERATED_ID_PREFIX, s),
        _ => return,
    };
    obj.insert("id".to_string(), Value::String(generated));
}

/// Normalize and validate a single task returned by a write.
fn parse_remote_task(mut value: Value) -> Result<Task, BackendError> {
    normalize_task_id(&mut value);
    validate_task(&value).map_err(|violations| {
        let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
        BackendError::InvalidData(reasons.join("; "))
    })
}

impl TaskService {
    /// Probes the backend with a single lightweight request.
    pub async fn test_connection(&self) -> bool {
        match self.backend.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Connection test failed: {}", e);
                false
            }
        }
    }

    fn fallback_source(&self, reason: String) -> TaskSource {
        warn!("Backend not available, using fallback data: {}", reason);
        let tasks = self.fallback.to_vec();
        self.counter.seed_from(&tasks);
        TaskSource::Fallback { tasks, reason }
    }

    /// Loads the task list.
    ///
    /// Never fails: when the backend is unreachable or the fetch errors, the
    /// fixed fallback set is returned instead. Entries that do not pass
    /// validation are dropped. The id counter is reseeded from whatever
    /// set is returned.
    pub async fn get_tasks(&self) -> TaskSource {
        if let Err(e) = self.backend.ping().await {
            return self.fallback_source(e.to_string());
        }

        let response = match self.backend.fetch_tasks().await {
            Ok(response) => response,
            Err(e) => return self.fallback_source(e.to_string()),
        };

        let candidates = match response {
            Value::Array(items) => items,
            other => {
                warn!("Expected a task array, got {}; treating as empty", other);
                Vec::new()
            }
        };

        let normalized: Vec<Value> = candidates
            .into_iter()
            .map(|mut candidate| {
                normalize_task_id(&mut candidate);
                candidate
            })
            .collect();

        let received = normalized.len();
        let samples: Vec<Value> = normalized.iter().take(2).cloned().collect();
        let tasks = filter_valid_tasks(normalized);

        if tasks.len() < received {
            warn!("Dropped {} invalid tasks out of {}", received - tasks.len(), received);
        }
        if tasks.is_empty() && received > 0 {
            for (index, sample) in samples.iter().enumerate() {
                debug!("Rejected task sample {}: {}", index + 1, sample);
            }
        }

        self.counter.seed_from(&tasks);
        info!("Loaded {} tasks from backend", tasks.len());
        TaskSource::Live(tasks)
    }

    fn check_title(&self, title: &str) -> Result<String, ServiceError> {
        if !validate_task_title(title) {
            return Err(ServiceError::Validation(ERROR_TITLE_REQUIRED.to_string()));
        }
        if self.title_policy == TitlePolicy::Reject && title_exceeds_limit(title) {
            return Err(ServiceError::Validation(ERROR_TITLE_TOO_LONG.to_string()));
        }
        Ok(sanitize_task_title(title))
    }

    fn check_priority(priority: i64) -> Result<i64, ServiceError> {
        if validate_task_priority(priority) {
            Ok(priority)
        } else {
            Err(ServiceError::Validation(ERROR_PRIORITY_NOT_POSITIVE.to_string()))
        }
    }

    /// Creates a task, see [`TaskService::create_task_tracked`].
    pub async fn create_task(&self, input: TaskCreate) -> Result<Task, ServiceError> {
        self.create_task_tracked(input).await.map(Synced::into_inner)
    }

    /// Creates a task, reporting whether the backend stored it.
    ///
    /// Input is validated before any network call. When the backend call
    /// fails, a complete task is built locally with the same `task_id`; it
    /// is never sent again later.
    ///
    /// # Errors
    /// Returns [`ServiceError::Validation`] for a blank title, a non-positive
    /// priority or, under [`TitlePolicy::Reject`], an overlong title
    pub async fn create_task_tracked(&self, input: TaskCreate) -> Result<Synced<Task>, ServiceError> {
        let title = self.check_title(&input.title)?;
        let priority = Self::check_priority(input.priority)?;

        let task_id = match input.task_id {
            Some(task_id) if task_id > 0 => {
                self.counter.observe(task_id);
                task_id
            }
            _ => self.counter.next_id(),
        };

        let args = CreateTaskArgs {
            title,
            priority,
            done: input.done,
            task_id,
        };

        match self.backend.create_task(&args).await.and_then(parse_remote_task) {
            Ok(task) => {
                self.counter.observe(task.task_id);
                info!("Created task {} ({})", task.task_id, task.id);
                Ok(Synced::Remote(task))
            }
            Err(e) => {
                warn!("Backend not available, creating task locally: {}", e);
                let now = datetime::now_iso8601();
                Ok(Synced::Local(Task {
                    id: datetime::local_task_id(),
                    task_id,
                    title: args.title,
                    done: args.done.unwrap_or(false),
                    priority,
                    created_at: now.clone(),
                    updated_at: now,
                }))
            }
        }
    }

    /// Updates a task, see [`TaskService::update_task_tracked`].
    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Task, ServiceError> {
        self.update_task_tracked(id, update).await.map(Synced::into_inner)
    }

    /// Applies a partial update, reporting whether the backend performed it.
    ///
    /// On backend failure the task is looked up in the fallback set only (by
    /// `id` or stringified `task_id`), never in the caller's current list, so
    /// tasks that came from the live backend cannot be resolved offline
    /// unless their id happens to collide with a fallback entry.
    ///
    /// # Errors
    /// Returns [`ServiceError::Validation`] for an invalid title or priority
    /// and [`ServiceError::NotFound`] when the offline lookup finds nothing
    pub async fn update_task_tracked(&self, id: &str, mut update: TaskUpdate) -> Result<Synced<Task>, ServiceError> {
        if let Some(title) = update.title.take() {
            update.title = Some(self.check_title(&title)?);
        }
        if let Some(priority) = update.priority {
            Self::check_priority(priority)?;
        }

        match self.backend.update_task(id, &update).await.and_then(parse_remote_task) {
            Ok(task) => {
                debug!("Updated task {}", id);
                Ok(Synced::Remote(task))
            }
            Err(e) => {
                warn!("Backend not available, updating task {} locally: {}", id, e);
                let mut task = self
                    .fallback
                    .iter()
                    .find(|t| t.matches_id(id))
                    .cloned()
                    .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
                task.apply(&update);
                task.updated_at = datetime::now_iso8601();
                Ok(Synced::Local(task))
            }
        }
    }

    /// Flips the completion flag of `task`.
    pub async fn toggle_task(&self, task: &Task) -> Result<Task, ServiceError> {
        self.update_task(&task.id, TaskUpdate::done(!task.done)).await
    }

    /// Deletes a task. Backend failures are logged and otherwise ignored.
    pub async fn delete_task(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_task_tracked(id).await.map(|_| ())
    }

    /// Deletes a task, reporting whether the backend performed it.
    ///
    /// A [`Synced::Local`] result means nothing was removed anywhere; the
    /// caller's own list is the only place the task disappears from.
    pub async fn delete_task_tracked(&self, id: &str) -> Result<Synced<()>, ServiceError> {
        match self.backend.delete_task(id).await {
            Ok(()) => {
                info!("Deleted task {}", id);
                Ok(Synced::Remote(()))
            }
            Err(e) => {
                warn!("Backend not available, skipping delete of task {}: {}", id, e);
                Ok(Synced::Local(()))
            }
        }
    }
}
