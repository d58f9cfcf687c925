//! Search endpoint parameters and the client-side fallback over HTTP.

use super::helpers::{api_path, client_for, setup_mock_server, task_json};
use chrono::NaiveDate;
use mockable::DefaultClock;
use serde_json::json;
use std::sync::Arc;
use taskdesk::task::{
    domain::{SearchFilters, Status},
    ports::TaskService,
    services::{SEARCH_FAILED_MESSAGE, SearchError, SearchSource, TaskSearchService},
};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

#[tokio::test]
async fn populated_filters_are_sent_as_query_parameters() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/search")))
        .and(query_param("title", "report"))
        .and(query_param("status", "PENDING"))
        .and(query_param("dueDate", "2025-03-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [task_json(5, "Quarterly report", "PENDING")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let day = NaiveDate::from_ymd_opt(2025, 3, 20).expect("valid date");
    let query = SearchFilters::new()
        .with_title("  report ")
        .with_status(Status::Pending)
        .with_due_date(day)
        .query();
    let tasks = client_for(&server)
        .search_tasks(&query)
        .await
        .expect("search should succeed");

    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn blank_filters_are_omitted() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/search")))
        .and(query_param("status", "NEW"))
        .and(query_param_is_missing("title"))
        .and(query_param_is_missing("dueDate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchFilters::new()
        .with_title("   ")
        .with_status(Status::New)
        .query();
    let tasks = client_for(&server)
        .search_tasks(&query)
        .await
        .expect("search should succeed");

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn failing_search_endpoint_falls_back_to_the_full_list() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/search")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Quarterly report", "status": "PENDING"},
            {"id": 2, "title": "Team lunch", "status": "PENDING"},
            {"id": 3, "title": "Annual report", "status": "NEW"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let searcher = TaskSearchService::new(Arc::new(client_for(&server)), Arc::new(DefaultClock));
    let filters = SearchFilters::new()
        .with_title("REPORT")
        .with_status(Status::Pending);
    let outcome = searcher.search(&filters).await.expect("fallback should answer");

    assert_eq!(outcome.source(), SearchSource::ClientFallback);
    assert_eq!(
        outcome.tasks().iter().map(|task| task.id().value()).collect::<Vec<_>>(),
        vec![1]
    );
    assert_eq!(outcome.message(), "1 result found");
}

#[tokio::test]
async fn failing_fallback_reports_a_search_failure() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks/search")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("tasks")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let searcher = TaskSearchService::new(Arc::new(client_for(&server)), Arc::new(DefaultClock));
    let err = searcher
        .search(&SearchFilters::new().with_title("report"))
        .await
        .expect_err("both tiers failed");

    assert!(matches!(err, SearchError::Fallback(_)));
    assert_eq!(err.user_message(), SEARCH_FAILED_MESSAGE);
}
