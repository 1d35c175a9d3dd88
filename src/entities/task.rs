use serde::{Deserialize, Serialize};

/// A task as exchanged with the remote service and held in application state.
///
/// Values of this type are only produced by [`crate::utils::validation::validate_task`]
/// or by the service itself, so every field satisfies the validity rules:
/// non-empty title, positive `priority` and positive `task_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, stable for the session
    pub id: String,
    /// Numeric display identifier, assigned client-side when missing
    pub task_id: i64,
    pub title: String,
    pub done: bool,
    /// Display rank, not unique
    pub priority: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a task.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
}

/// Partial update of a task. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// Reference to a task by either of its identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskRef<'a> {
    Id(&'a str),
    TaskId(i64),
}

impl TaskCreate {
    pub fn new(title: impl Into<String>, priority: i64) -> Self {
        Self {
            title: title.into(),
            priority,
            done: None,
            task_id: None,
        }
    }
}

impl TaskUpdate {
    pub fn done(done: bool) -> Self {
        Self {
            done: Some(done),
            ..Self::default()
        }
    }

    pub fn priority(priority: i64) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.done.is_none() && self.priority.is_none()
    }
}

impl Task {
    /// Returns `true` if `id` matches either the opaque id or the stringified `task_id`.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id || self.task_id.to_string() == id
    }

    /// Applies the fields present in `update`, leaving timestamps untouched.
    pub fn apply(&mut self, update: &TaskUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(done) = update.done {
            self.done = done;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
    }
}
