//! Task synchronization service.
//!
//! This module provides the [`TaskService`] struct which sits between callers
//! and a remote [`Backend`]. Each operation first tries the backend; when that
//! fails it applies a per-operation local policy instead of surfacing the
//! network error:
//!
//! - reads fall back to a fixed task set ([`fallback_tasks`])
//! - creates synthesize a task locally
//! - updates are resolved against the fallback set, or fail with "not found"
//! - deletes succeed without doing anything
//!
//! Whether the backend is reachable is decided on every call; nothing is
//! cached between calls. Results say which path was taken ([`TaskSource`],
//! [`Synced`]) so callers can warn users when they are looking at local data.

pub mod counter;
pub mod fallback;
pub mod reorder;
pub mod tasks;

use std::sync::Arc;

use anyhow::Result;

use crate::backend::{create_backend, Backend, BackendError};
use crate::config::Config;
use crate::entities::Task;
use crate::utils::validation::TitlePolicy;

pub use counter::TaskIdCounter;
pub use fallback::fallback_tasks;
pub use reorder::ReorderOutcome;

/// Errors surfaced to callers of the task service.
///
/// Network failures are normally absorbed by the fallback policies; only
/// input problems and failed fallback lookups reach the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Where a task list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    /// Fetched from the backend and validated
    Live(Vec<Task>),
    /// Fixed offline data, with the reason the backend was not used
    Fallback { tasks: Vec<Task>, reason: String },
}

impl TaskSource {
    pub fn tasks(&self) -> &[Task] {
        match self {
            TaskSource::Live(tasks) => tasks,
            TaskSource::Fallback { tasks, .. } => tasks,
        }
    }

    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            TaskSource::Live(tasks) => tasks,
            TaskSource::Fallback { tasks, .. } => tasks,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TaskSource::Fallback { .. })
    }
}

/// Result of a write, tagged with whether the backend accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Synced<T> {
    /// The backend performed the write
    Remote(T),
    /// The backend failed; the value was produced locally and is not persisted
    Local(T),
}

impl<T> Synced<T> {
    pub fn is_local(&self) -> bool {
        matches!(self, Synced::Local(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Synced::Remote(value) | Synced::Local(value) => value,
        }
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Synced::Remote(value) | Synced::Local(value) => value,
        }
    }
}

/// Service that talks to the task backend and applies the offline policies.
///
/// Cloning is cheap and clones share the backend and the id counter.
///
/// # Example
/// ```rust,no_run
/// use taskaio::config::Config;
/// use taskaio::sync::TaskService;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = TaskService::from_config(&Config::default())?;
/// let source = service.get_tasks().await;
/// if source.is_fallback() {
///     println!("offline");
/// }
/// for task in source.tasks() {
///     println!("{} {}", task.task_id, task.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TaskService {
    backend: Arc<dyn Backend>,
    counter: Arc<TaskIdCounter>,
    fallback: Arc<Vec<Task>>,
    title_policy: TitlePolicy,
}

impl TaskService {
    /// Creates a new `TaskService` over the given backend.
    ///
    /// The fallback set is built once here, so its timestamps are the
    /// construction time.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            counter: Arc::new(TaskIdCounter::new()),
            fallback: Arc::new(fallback_tasks()),
            title_policy: TitlePolicy::default(),
        }
    }

    /// Creates a service with an HTTP backend built from `config`.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be constructed
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = create_backend(&config.api)?;
        Ok(Self::new(backend).with_title_policy(config.tasks.title_policy))
    }

    pub fn with_title_policy(mut self, policy: TitlePolicy) -> Self {
        self.title_policy = policy;
        self
    }

    pub fn title_policy(&self) -> TitlePolicy {
        self.title_policy
    }

    /// The fixed offline task set used by this service
    pub fn fallback(&self) -> &[Task] {
        &self.fallback
    }

    pub fn counter(&self) -> &TaskIdCounter {
        &self.counter
    }

    pub fn backend_type(&self) -> &str {
        self.backend.backend_type()
    }
}
