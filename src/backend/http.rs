//! HTTP backend implementation.
//!
//! Talks JSON to a REST service exposing `/tasks`. Any non-2xx answer is an error.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Method};
use serde_json::Value;

use super::{Backend, BackendError, CreateTaskArgs};
use crate::entities::TaskUpdate;

/// Backend speaking to the task REST service over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new HTTP backend.
    ///
    /// # Arguments
    /// * `base_url` - Root URL of the service; trailing slashes are dropped
    /// * `timeout` - Per-request timeout applied by the underlying client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url, urlencoding::encode(id))
    }

    async fn request(&self, method: Method, url: &str, body: Option<Value>) -> Result<Value, BackendError> {
        let mut builder = self
            .client
            .request(method.clone(), url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let resp = builder.send().await.map_err(|e| {
            error!("API request failed: {} {}: {}", method, url, e);
            BackendError::Network(e.to_string())
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| BackendError::Network(e.to_string()))?;
        if !status.is_success() {
            error!("API request failed: {} {}: status {}", method, url, status);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value, BackendError> {
    serde_json::to_value(value).map_err(|e| BackendError::InvalidData(e.to_string()))
}

#[async_trait]
impl Backend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn ping(&self) -> Result<(), BackendError> {
        debug!("Testing connection to {}", self.base_url);
        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = resp.status();
        debug!("Connection status: {}", status);
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            Err(BackendError::Status {
                status: status.as_u16(),
                body: String::new(),
            })
        }
    }

    async fn fetch_tasks(&self) -> Result<Value, BackendError> {
        let url = format!("{}/tasks", self.base_url);
        self.request(Method::GET, &url, None).await
    }

    async fn create_task(&self, args: &CreateTaskArgs) -> Result<Value, BackendError> {
        let url = format!("{}/tasks", self.base_url);
        self.request(Method::POST, &url, Some(to_body(args)?)).await
    }

    async fn update_task(&self, id: &str, args: &TaskUpdate) -> Result<Value, BackendError> {
        let url = self.task_url(id);
        self.request(Method::PUT, &url, Some(to_body(args)?)).await
    }

    async fn delete_task(&self, id: &str) -> Result<(), BackendError> {
        let url = self.task_url(id);
        self.request(Method::DELETE, &url, None).await.map(|_| ())
    }
}
