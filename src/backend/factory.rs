//! Backend factory for creating backend instances from configuration.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use super::{http::HttpBackend, Backend};
use crate::config::ApiConfig;

/// Create a backend instance from the API configuration.
///
/// # Errors
/// Returns error if the HTTP client cannot be built for the configured timeout
pub fn create_backend(config: &ApiConfig) -> Result<Arc<dyn Backend>> {
    let backend = HttpBackend::new(&config.base_url, config.timeout())
        .map_err(|e| anyhow!("Failed to create backend for {}: {}", config.base_url, e))?;
    Ok(Arc::new(backend))
}
