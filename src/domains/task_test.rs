//! Tests for tasks

use serde_json::{Value, json};

use super::task::{CreateTaskParams, ListTasksParams, Task, TaskStatus, UpdateTaskParams};
use super::test_support::{client, data};
use crate::crud::{self, Entity};
use crate::graphql::MockHttpTransport;

#[test]
fn test_create_input_converts_body() {
    let input = Task::create_input(CreateTaskParams {
        title: "Call back".to_string(),
        body: Some("First line\n\nSecond line".to_string()),
        status: Some(TaskStatus::InProgress),
        ..Default::default()
    })
    .unwrap();

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["title"], "Call back");
    assert_eq!(value["status"], "IN_PROGRESS");
    assert_eq!(value["bodyV2"]["markdown"], "First line\n\nSecond line");

    let blocks: Value =
        serde_json::from_str(value["bodyV2"]["blocknote"].as_str().unwrap()).unwrap();
    assert_eq!(blocks.as_array().unwrap().len(), 2);
    assert_eq!(blocks[1]["content"][0]["text"], "Second line");
}

#[test]
fn test_create_input_omits_empty_body() {
    let input = Task::create_input(CreateTaskParams {
        title: "Quiet".to_string(),
        body: Some(String::new()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(serde_json::to_value(&input).unwrap(), json!({"title": "Quiet"}));
}

#[test]
fn test_update_null_unassigns() {
    let params: UpdateTaskParams = serde_json::from_value(json!({
        "id": "t1",
        "assigneeId": null,
        "status": "DONE"
    }))
    .unwrap();

    let (_, patch) = Task::update_input(params);
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({"status": "DONE", "assigneeId": null})
    );
}

#[test]
fn test_list_filter_by_status() {
    let filter = Task::list_filter(&ListTasksParams {
        status: Some(TaskStatus::Todo),
        assignee_id: Some("wm1".to_string()),
        ..Default::default()
    });

    assert_eq!(
        filter,
        Some(json!({"status": {"eq": "TODO"}, "assigneeId": {"eq": "wm1"}}))
    );
}

#[tokio::test]
async fn test_create_task_message() {
    let mut transport = MockHttpTransport::new();
    transport
        .expect_post_json()
        .times(1)
        .returning(|_, _, _| {
            Ok(data(
                "createTask",
                json!({"id": "t1", "title": "Call back", "status": "TODO"}),
            ))
        });

    let text = crud::create::<Task, _>(
        &client(transport),
        CreateTaskParams {
            title: "Call back".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("✅ Created task: Call back\n\n"));
}
