//! Backend abstraction for the remote task service.
//!
//! This module defines the interface the task service uses to talk to the
//! remote side, along with the error type shared by implementations.
//! Backends hand back raw JSON: deciding which payloads are acceptable tasks
//! is the service's job, not the transport's.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::TaskUpdate;

pub mod factory;
pub mod http;

pub use factory::create_backend;
pub use http::HttpBackend;

/// Common error types for backend operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Body sent when creating a task: the caller's fields plus the assigned `task_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskArgs {
    pub title: String,
    pub priority: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    pub task_id: i64,
}

/// Interface every task backend must implement.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Backend type identifier (e.g., "http")
    fn backend_type(&self) -> &str;

    /// Lightweight reachability probe
    async fn ping(&self) -> Result<(), BackendError>;

    /// Fetch the task list as returned by the remote side
    async fn fetch_tasks(&self) -> Result<Value, BackendError>;

    /// Create a task and return its remote representation
    async fn create_task(&self, args: &CreateTaskArgs) -> Result<Value, BackendError>;

    /// Apply a partial update and return the updated representation
    async fn update_task(&self, id: &str, args: &TaskUpdate) -> Result<Value, BackendError>;

    async fn delete_task(&self, id: &str) -> Result<(), BackendError>;
}
