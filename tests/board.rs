mod common;

use common::{task_json, StubBackend};
use serde_json::json;
use taskaio::board::TaskBoard;
use taskaio::{ServiceError, TaskService};

#[tokio::test]
async fn test_load_offline_marks_board() {
    let service = TaskService::new(StubBackend::offline().into_arc());
    let mut board = TaskBoard::new(service, Some(3));

    board.load().await;
    assert!(board.is_offline());
    assert_eq!(board.tasks().len(), 3);
}

#[tokio::test]
async fn test_load_sorts_by_priority() {
    let stub = StubBackend::online(json!([
        task_json("c", 3, "C", 3),
        task_json("a", 1, "A", 1),
        task_json("b", 2, "B", 2),
    ]))
    .into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), Some(3));
    board.load().await;

    let ids: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    board.move_task(0, 2).await.unwrap();
    let order: Vec<(&str, i64)> = board.tasks().iter().map(|t| (t.id.as_str(), t.priority)).collect();
    assert_eq!(order, vec![("b", 1), ("c", 2), ("a", 3)]);
}

#[tokio::test]
async fn test_next_priority_at_max_does_not_overflow() {
    let stub = StubBackend::online(json!([task_json("a", 1, "A", i64::MAX)])).into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), None);
    board.load().await;

    assert_eq!(board.next_priority(), i64::MAX);
}

#[tokio::test]
async fn test_find_prefers_exact_id() {
    let stub = StubBackend::online(json!([task_json("a", 7, "A", 1), task_json("7", 8, "B", 2)])).into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), Some(3));
    board.load().await;

    assert_eq!(board.find("7").map(|t| t.task_id), Some(8));
}

#[tokio::test]
async fn test_add_caps_priority() {
    let service = TaskService::new(StubBackend::offline().into_arc());
    let mut board = TaskBoard::new(service, Some(3));
    board.load().await;

    assert_eq!(board.next_priority(), 3);
    let created = board.add("Buy bread").await.unwrap();
    assert!(created.is_local());
    assert_eq!(board.tasks().len(), 4);
    assert_eq!(board.tasks()[3].priority, 3);
    assert_eq!(board.tasks()[3].title, "Buy bread");
}

#[tokio::test]
async fn test_add_without_cap_appends_after_highest() {
    let stub = StubBackend::online(json!([task_json("a", 1, "A", 4)])).into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), None);
    board.load().await;

    let created = board.add("B").await.unwrap();
    assert!(!created.is_local());
    assert_eq!(created.into_inner().priority, 5);
}

#[tokio::test]
async fn test_add_blank_title_is_rejected() {
    let stub = StubBackend::online(json!([])).into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub.clone()), Some(3));

    let result = board.add("  ").await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert!(board.tasks().is_empty());
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_toggle_replaces_task() {
    let stub = StubBackend::online(json!([task_json("a", 1, "A", 1)])).into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), Some(3));
    board.load().await;

    let toggled = board.toggle("a").await.unwrap().unwrap();
    assert!(toggled.done);
    assert!(board.tasks()[0].done);

    assert!(board.toggle("zzz").await.unwrap().is_none());
}

#[tokio::test]
async fn test_toggle_accepts_task_id() {
    let stub = StubBackend::online(json!([task_json("a", 7, "A", 1)])).into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), Some(3));
    board.load().await;

    assert!(board.toggle("7").await.unwrap().is_some());
}

#[tokio::test]
async fn test_remove_offline_still_drops_from_board() {
    let service = TaskService::new(StubBackend::offline().into_arc());
    let mut board = TaskBoard::new(service, Some(3));
    board.load().await;

    board.remove("2").await.unwrap();
    let ids: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn test_move_task_commits_new_order() {
    let stub = StubBackend::online(json!([
        task_json("a", 1, "A", 1),
        task_json("b", 2, "B", 2),
        task_json("c", 3, "C", 3),
    ]))
    .into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), Some(3));
    board.load().await;

    board.move_task(2, 0).await.unwrap();
    let order: Vec<(&str, i64)> = board.tasks().iter().map(|t| (t.id.as_str(), t.priority)).collect();
    assert_eq!(order, vec![("c", 1), ("a", 2), ("b", 3)]);
}

#[tokio::test]
async fn test_move_task_failure_reloads() {
    let stub = StubBackend {
        reachable: true,
        tasks: std::sync::Mutex::new(json!([task_json("a", 1, "A", 1), task_json("b", 2, "B", 2)])),
        fail_update_ids: vec!["a".to_string()],
        ..StubBackend::default()
    }
    .into_arc();
    let mut board = TaskBoard::new(TaskService::new(stub), Some(3));
    board.load().await;

    let result = board.move_task(0, 1).await;
    assert!(result.is_err());
    let ids: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_move_task_out_of_range() {
    let service = TaskService::new(StubBackend::offline().into_arc());
    let mut board = TaskBoard::new(service, Some(3));
    board.load().await;

    assert!(matches!(board.move_task(0, 5).await, Err(ServiceError::NotFound(_))));
    assert_eq!(board.tasks()[0].id, "1");
}
