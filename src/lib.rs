//! Taskaio - a task-list client with an offline fallback
//!
//! This library lists, creates, updates, reorders and deletes tasks held by
//! a remote HTTP service. When the service cannot be reached it keeps
//! working from fixed local data and says so in its results.
//!
//! # Modules
//!
//! * [`backend`] - Backend trait and the HTTP implementation
//! * [`board`] - In-memory task list controller
//! * [`config`] - Application configuration management
//! * [`sync`] - Task service with per-operation fallback policies
//! * [`utils`] - Validation and date/time helpers

/// Backend abstraction and HTTP client for the task service
pub mod backend;

/// Task list controller used by the command line
pub mod board;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task data model
pub mod entities;

/// Logging setup
pub mod logger;

/// Task service talking to the backend
pub mod sync;

/// Utility functions for validation and date/time handling
pub mod utils;

pub use entities::{Task, TaskCreate, TaskRef, TaskUpdate};
pub use sync::{ReorderOutcome, ServiceError, Synced, TaskService, TaskSource};
