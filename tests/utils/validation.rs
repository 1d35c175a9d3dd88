use serde_json::{json, Value};
use taskaio::utils::validation::*;
use taskaio::{Task, TaskRef};

fn candidate(id: &str, task_id: i64, priority: i64) -> Value {
    json!({
        "id": id,
        "task_id": task_id,
        "title": format!("Task {}", id),
        "done": false,
        "priority": priority,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z"
    })
}

fn task(task_id: i64, priority: i64) -> Task {
    Task {
        id: format!("t{}", task_id),
        task_id,
        title: "x".to_string(),
        done: false,
        priority,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn test_filter_keeps_valid_in_order() {
    let mut no_title = candidate("b", 2, 1);
    no_title.as_object_mut().unwrap().remove("title");
    let mut string_done = candidate("d", 4, 1);
    string_done["done"] = json!("false");

    let kept = filter_valid_tasks(vec![
        candidate("a", 1, 3),
        no_title,
        candidate("c", 3, 1),
        string_done,
        candidate("e", -5, 1),
        candidate("f", 6, 2),
    ]);
    let ids: Vec<&str> = kept.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "f"]);
}

#[test]
fn test_sanitize_title() {
    assert_eq!(sanitize_task_title("  Buy milk \n"), "Buy milk");
    let long = format!("  {}  ", "a".repeat(400));
    assert_eq!(sanitize_task_title(&long).len(), 255);
    let exact = "b".repeat(255);
    assert_eq!(sanitize_task_title(&exact), exact);
    assert!(!title_exceeds_limit(&exact));
}

#[test]
fn test_title_and_priority_predicates() {
    assert!(validate_task_title("x"));
    assert!(!validate_task_title(""));
    assert!(!validate_task_title(" \t "));
    assert!(validate_task_priority(1));
    assert!(!validate_task_priority(0));
    assert!(!validate_task_priority(-3));
}

#[test]
fn test_next_priority() {
    assert_eq!(get_next_priority(&[]), 1);
    assert_eq!(get_next_priority(&[task(1, 3), task(2, 7)]), 8);
}

#[test]
fn test_next_task_id() {
    assert_eq!(get_next_task_id(&[]), 1);
    assert_eq!(get_next_task_id(&[task(2, 1), task(5, 1)]), 6);
}

#[test]
fn test_next_values_saturate_at_max() {
    assert_eq!(get_next_priority(&[task(1, i64::MAX)]), i64::MAX);
    assert_eq!(get_next_task_id(&[task(i64::MAX, 1)]), i64::MAX);
}

#[test]
fn test_sort_is_stable() {
    let tasks = vec![task(1, 2), task(2, 1), task(3, 2)];
    let sorted = sort_tasks_by_priority(&tasks);
    let ids: Vec<i64> = sorted.iter().map(|t| t.task_id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_find_by_either_identifier() {
    let tasks = vec![task(1, 1), task(2, 1)];
    assert_eq!(find_task_by_id(&tasks, TaskRef::Id("t2")).map(|t| t.task_id), Some(2));
    assert_eq!(find_task_by_id(&tasks, TaskRef::TaskId(1)).map(|t| t.id.as_str()), Some("t1"));
    assert!(find_task_by_id(&tasks, TaskRef::Id("1")).is_none());
}
