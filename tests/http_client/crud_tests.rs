//! Request shapes and decoding for the task CRUD endpoints.

use super::helpers::{api_path, client_for, setup_mock_server, task_json};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use taskdesk::task::{
    domain::{Status, TaskDraft, TaskId},
    ports::TaskService,
    services::TaskLifecycleService,
};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

#[rstest]
#[case::bare_array(json!([
    {"id": 1, "title": "First", "status": "NEW"},
    {"id": 2, "title": "Second", "status": "PENDING"},
]))]
#[case::content_envelope(json!({"content": [
    {"id": 1, "title": "First", "status": "NEW"},
    {"id": 2, "title": "Second", "status": "PENDING"},
]}))]
#[case::items_envelope(json!({"items": [
    {"id": 1, "title": "First", "status": "NEW"},
    {"id": 2, "title": "Second", "status": "PENDING"},
]}))]
#[case::data_envelope(json!({"data": [
    {"id": 1, "title": "First", "status": "NEW"},
    {"id": 2, "title": "Second", "status": "PENDING"},
]}))]
#[tokio::test]
async fn list_accepts_every_response_shape(#[case] body: Value) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).list_tasks().await.expect("list should succeed");

    assert_eq!(
        tasks.iter().map(|task| task.title()).collect::<Vec<_>>(),
        vec!["First", "Second"]
    );
}

#[tokio::test]
async fn unrecognised_list_shape_yields_no_tasks() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 3})))
        .mount(&server)
        .await;

    let tasks = client_for(&server).list_tasks().await.expect("list should succeed");
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn get_decodes_a_single_task() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/12")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(12, "Audit", "IN_PROGRESS")))
        .mount(&server)
        .await;

    let task = client_for(&server)
        .get_task(TaskId::new(12))
        .await
        .expect("get should succeed");

    assert_eq!(task.id(), TaskId::new(12));
    assert_eq!(task.status(), Status::InProgress);
    assert_eq!(task.due_date(), Some("2025-04-01T10:00:00Z"));
}

#[tokio::test]
async fn lifecycle_create_sends_a_canonical_due_date() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(api_path("tasks")))
        .and(body_json(json!({
            "title": "Quarterly report",
            "status": "NEW",
            "dueDate": "2099-01-01T00:00:00.000Z",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(31, "Quarterly report", "NEW")))
        .expect(1)
        .mount(&server)
        .await;

    let lifecycle = TaskLifecycleService::new(Arc::new(client_for(&server)), Arc::new(DefaultClock));
    let draft = TaskDraft::new_form()
        .with_title("Quarterly report")
        .with_due_date("2099-01-01");
    let created = lifecycle.create(&draft).await.expect("create should succeed");

    assert_eq!(created.id(), TaskId::new(31));
}

#[tokio::test]
async fn create_posts_the_draft_as_json() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path(api_path("tasks")))
        .and(body_json(json!({
            "title": "Book venue",
            "description": "Seats for forty",
            "status": "NEW",
            "dueDate": "2025-04-01T10:00",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json(30, "Book venue", "NEW")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = TaskDraft::new_form()
        .with_title("Book venue")
        .with_description("Seats for forty")
        .with_due_date("2025-04-01T10:00");
    let created = client_for(&server)
        .create_task(&draft)
        .await
        .expect("create should succeed");

    assert_eq!(created.id(), TaskId::new(30));
}

#[tokio::test]
async fn update_puts_the_draft_to_the_task_url() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path(api_path("tasks/4")))
        .and(body_json(json!({"title": "Renamed", "status": "PENDING"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(4, "Renamed", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = TaskDraft::new().with_title("Renamed").with_status(Status::Pending);
    let updated = client_for(&server)
        .update_task(TaskId::new(4), &draft)
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Renamed");
}

#[tokio::test]
async fn delete_ignores_the_response_body() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("tasks/4")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_task(TaskId::new(4))
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn status_update_sends_the_status_as_a_query_parameter() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path(api_path("tasks/7/status")))
        .and(query_param("status", "COMPLETED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json(7, "Ship", "COMPLETED")))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update_status(TaskId::new(7), Status::Completed)
        .await
        .expect("status update should succeed");

    assert_eq!(updated.status(), Status::Completed);
}

#[tokio::test]
async fn statuses_are_read_as_names() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/statuses")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["NEW", "IN_PROGRESS"])))
        .mount(&server)
        .await;

    let statuses = client_for(&server)
        .list_statuses()
        .await
        .expect("statuses should load");

    assert_eq!(statuses, vec!["NEW".to_owned(), "IN_PROGRESS".to_owned()]);
}

#[tokio::test]
async fn status_and_overdue_listings_use_their_endpoints() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/status/PENDING")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([task_json(2, "Wait", "PENDING")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/overdue")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [task_json(3, "Late", "NEW")]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pending = client
        .list_by_status(Status::Pending)
        .await
        .expect("status listing should succeed");
    let overdue = client.list_overdue().await.expect("overdue listing should succeed");

    assert_eq!(pending.len(), 1);
    assert_eq!(overdue.first().map(|task| task.id()), Some(TaskId::new(3)));
}
