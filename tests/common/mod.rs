#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use taskaio::backend::{Backend, BackendError, CreateTaskArgs};
use taskaio::TaskUpdate;

/// In-memory backend recording every call it receives.
#[derive(Default)]
pub struct StubBackend {
    pub reachable: bool,
    pub fail_fetch: bool,
    pub fail_writes: bool,
    pub fail_update_ids: Vec<String>,
    pub tasks: Mutex<Value>,
    pub calls: Mutex<Vec<String>>,
}

pub fn task_json(id: &str, task_id: i64, title: &str, priority: i64) -> Value {
    json!({
        "id": id,
        "task_id": task_id,
        "title": title,
        "done": false,
        "priority": priority,
        "created_at": "2025-05-01T08:00:00.000Z",
        "updated_at": "2025-05-01T08:00:00.000Z"
    })
}

impl StubBackend {
    pub fn online(tasks: Value) -> Self {
        Self {
            reachable: true,
            tasks: Mutex::new(tasks),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            reachable: false,
            fail_fetch: true,
            fail_writes: true,
            tasks: Mutex::new(json!([])),
            ..Self::default()
        }
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn unavailable() -> BackendError {
        BackendError::Network("connection refused".to_string())
    }
}

#[async_trait]
impl Backend for StubBackend {
    fn backend_type(&self) -> &str {
        "stub"
    }

    async fn ping(&self) -> Result<(), BackendError> {
        self.record("ping".to_string());
        if self.reachable {
            Ok(())
        } else {
            Err(Self::unavailable())
        }
    }

    async fn fetch_tasks(&self) -> Result<Value, BackendError> {
        self.record("fetch".to_string());
        if self.fail_fetch {
            return Err(Self::unavailable());
        }
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create_task(&self, args: &CreateTaskArgs) -> Result<Value, BackendError> {
        self.record(format!("create {}", args.title));
        if self.fail_writes {
            return Err(Self::unavailable());
        }
        let mut task = task_json(&format!("srv-{}", args.task_id), args.task_id, &args.title, args.priority);
        task["done"] = json!(args.done.unwrap_or(false));
        if let Some(items) = self.tasks.lock().unwrap().as_array_mut() {
            items.push(task.clone());
        }
        Ok(task)
    }

    async fn update_task(&self, id: &str, args: &TaskUpdate) -> Result<Value, BackendError> {
        self.record(format!("update {}", id));
        if self.fail_writes || self.fail_update_ids.iter().any(|f| f == id) {
            return Err(Self::unavailable());
        }
        let mut tasks = self.tasks.lock().unwrap();
        let items = tasks.as_array_mut().ok_or_else(Self::unavailable)?;
        let task = items
            .iter_mut()
            .find(|t| t["id"] == json!(id))
            .ok_or(BackendError::Status {
                status: 404,
                body: String::new(),
            })?;
        if let Some(title) = &args.title {
            task["title"] = json!(title);
        }
        if let Some(done) = args.done {
            task["done"] = json!(done);
        }
        if let Some(priority) = args.priority {
            task["priority"] = json!(priority);
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> Result<(), BackendError> {
        self.record(format!("delete {}", id));
        if self.fail_writes {
            return Err(Self::unavailable());
        }
        if let Some(items) = self.tasks.lock().unwrap().as_array_mut() {
            items.retain(|t| t["id"] != json!(id));
        }
        Ok(())
    }
}
