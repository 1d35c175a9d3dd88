//! Constants used throughout the application
//!
//! This module centralizes limits, default values, and user-facing text
//! to improve maintainability and consistency.

// Limits
pub const MAX_TITLE_LENGTH: usize = 255;
pub const DEFAULT_MAX_PRIORITY: i64 = 3;
pub const MAX_TIMEOUT_MS: u64 = 300_000;

// Defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const API_URL_ENV: &str = "TASKAIO_API_URL";
pub const GENERATED_ID_PREFIX: &str = "task-";

// Files
pub const APP_DIR_NAME: &str = "taskaio";
pub const LOCAL_CONFIG_FILE: &str = "taskaio.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "taskaio.log";

// Fallback data shown when the backend cannot be reached
pub const FALLBACK_TITLES: [&str; 3] = ["Study React Native", "Read 10 pages of a book", "Do physical exercise"];

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "Task title is required";
pub const ERROR_TITLE_TOO_LONG: &str = "Task title exceeds 255 characters";
pub const ERROR_PRIORITY_NOT_POSITIVE: &str = "Priority must be a positive number";

// User-facing messages
pub const ERROR_REORDER_FAILED: &str = "❌ Could not update task order, list reloaded";
pub const WARN_OFFLINE: &str = "⚠️ Backend unavailable, showing offline data";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_CREATED_LOCALLY: &str = "⚠️ Task created locally only";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASKS_REORDERED: &str = "✅ Task order saved";
pub const CONFIG_GENERATED: &str = "✅ Generated default config";
