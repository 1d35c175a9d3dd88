//! Task validation and normalization helpers
//!
//! Tasks coming back from the remote service are untyped JSON. Instead of
//! accepting them blindly, [`validate_task`] parses each candidate into a
//! [`Task`] or reports every field that is wrong with it.

use log::debug;
use serde_json::{Map, Value};

use crate::constants::MAX_TITLE_LENGTH;
use crate::entities::{Task, TaskRef};

/// A single reason a task candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldViolation {
    #[error("task is not a JSON object")]
    NotAnObject,

    #[error("field '{field}' is missing")]
    Missing { field: &'static str },

    #[error("field '{field}' has the wrong type: expected {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("title is empty")]
    EmptyTitle,

    #[error("priority must be > 0, got {0}")]
    NonPositivePriority(i64),

    #[error("task_id must be > 0, got {0}")]
    NonPositiveTaskId(i64),
}

/// How titles longer than the limit are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePolicy {
    /// Cut to the limit without reporting it
    #[default]
    Truncate,
    /// Refuse titles over the limit
    Reject,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match obj.get(field) {
        None => {
            violations.push(FieldViolation::Missing { field });
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            violations.push(FieldViolation::WrongType {
                field,
                expected: "string",
                found: json_type_name(other),
            });
            None
        }
    }
}

fn integer_field(obj: &Map<String, Value>, field: &'static str, violations: &mut Vec<FieldViolation>) -> Option<i64> {
    match obj.get(field) {
        None => {
            violations.push(FieldViolation::Missing { field });
            None
        }
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                violations.push(FieldViolation::WrongType {
                    field,
                    expected: "integer",
                    found: json_type_name(value),
                });
                None
            }
        },
    }
}

fn bool_field(obj: &Map<String, Value>, field: &'static str, violations: &mut Vec<FieldViolation>) -> Option<bool> {
    match obj.get(field) {
        None => {
            violations.push(FieldViolation::Missing { field });
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            violations.push(FieldViolation::WrongType {
                field,
                expected: "boolean",
                found: json_type_name(other),
            });
            None
        }
    }
}

/// Parse an untyped task candidate into a [`Task`].
///
/// All violations are collected so a caller can report every problem at once.
/// The input is never modified.
pub fn validate_task(candidate: &Value) -> Result<Task, Vec<FieldViolation>> {
    let Some(obj) = candidate.as_object() else {
        return Err(vec![FieldViolation::NotAnObject]);
    };

    let mut violations = Vec::new();

    let id = string_field(obj, "id", &mut violations);
    let task_id = integer_field(obj, "task_id", &mut violations);
    let title = string_field(obj, "title", &mut violations);
    let done = bool_field(obj, "done", &mut violations);
    let priority = integer_field(obj, "priority", &mut violations);
    let created_at = string_field(obj, "created_at", &mut violations);
    let updated_at = string_field(obj, "updated_at", &mut violations);

    if let Some(title) = title {
        if !validate_task_title(title) {
            violations.push(FieldViolation::EmptyTitle);
        }
    }
    if let Some(priority) = priority {
        if priority <= 0 {
            violations.push(FieldViolation::NonPositivePriority(priority));
        }
    }
    if let Some(task_id) = task_id {
        if task_id <= 0 {
            violations.push(FieldViolation::NonPositiveTaskId(task_id));
        }
    }

    match (id, task_id, title, done, priority, created_at, updated_at) {
        (Some(id), Some(task_id), Some(title), Some(done), Some(priority), Some(created_at), Some(updated_at))
            if violations.is_empty() =>
        {
            Ok(Task {
                id: id.to_string(),
                task_id,
                title: title.to_string(),
                done,
                priority,
                created_at: created_at.to_string(),
                updated_at: updated_at.to_string(),
            })
        }
        _ => Err(violations),
    }
}

/// Returns `true` if the candidate satisfies every task field rule.
pub fn is_valid_task(candidate: &Value) -> bool {
    validate_task(candidate).is_ok()
}

/// Keep only the valid candidates, preserving their relative order.
pub fn filter_valid_tasks<I>(candidates: I) -> Vec<Task>
where
    I: IntoIterator<Item = Value>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| match validate_task(&candidate) {
            Ok(task) => Some(task),
            Err(violations) => {
                let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
                debug!("Dropping invalid task {}: {}", candidate, reasons.join("; "));
                None
            }
        })
        .collect()
}

/// A title is valid when it has content after trimming.
pub fn validate_task_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// A priority is valid when it is a positive integer.
pub fn validate_task_priority(priority: i64) -> bool {
    priority > 0
}

/// Like [`validate_task_priority`] for untyped input: floats such as `1.5` are rejected.
pub fn validate_task_priority_value(priority: &Value) -> bool {
    priority.as_i64().is_some_and(validate_task_priority)
}

/// Trim the title and cut it to [`MAX_TITLE_LENGTH`] characters.
///
/// Truncation is silent; use [`title_exceeds_limit`] first when the caller
/// must know that content was lost.
pub fn sanitize_task_title(title: &str) -> String {
    title.trim().chars().take(MAX_TITLE_LENGTH).collect()
}

/// Returns `true` if the trimmed title is longer than [`MAX_TITLE_LENGTH`] characters.
pub fn title_exceeds_limit(title: &str) -> bool {
    title.trim().chars().count() > MAX_TITLE_LENGTH
}

/// Priority that places a new task after the current highest one.
///
/// Gaps are never reused. Saturates at `i64::MAX`.
pub fn get_next_priority(tasks: &[Task]) -> i64 {
    tasks.iter().map(|t| t.priority).max().map_or(1, |max| max.saturating_add(1))
}

/// Next `task_id` after the highest one in `tasks`, or 1 for an empty set.
///
/// Saturates at `i64::MAX`.
pub fn get_next_task_id(tasks: &[Task]) -> i64 {
    tasks.iter().map(|t| t.task_id).max().map_or(1, |max| max.saturating_add(1))
}

/// Stable ascending sort by priority.
pub fn sort_tasks_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| t.priority);
    sorted
}

pub fn find_task_by_id<'a>(tasks: &'a [Task], reference: TaskRef<'_>) -> Option<&'a Task> {
    tasks.iter().find(|task| match reference {
        TaskRef::Id(id) => task.id == id,
        TaskRef::TaskId(task_id) => task.task_id == task_id,
    })
}
