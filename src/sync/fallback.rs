use crate::constants::FALLBACK_TITLES;
use crate::entities::Task;
use crate::utils::datetime;

/// Fixed task set served when the backend cannot be reached.
///
/// Ids "1" to "3", priorities 1 to 3, none done, stamped with the current time.
pub fn fallback_tasks() -> Vec<Task> {
    let now = datetime::now_iso8601();
    FALLBACK_TITLES
        .iter()
        .zip(1..)
        .map(|(title, n)| Task {
            id: n.to_string(),
            task_id: n,
            title: (*title).to_string(),
            done: false,
            priority: n,
            created_at: now.clone(),
            updated_at: now.clone(),
        })
        .collect()
}
