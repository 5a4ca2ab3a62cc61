//! HTTP-level tests for the directory and health endpoints.
//!
//! The routes under test need no model artifacts, so the router is built
//! directly over the directory state and served on an ephemeral port.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use serde_json::Value;

use amygdala::api::handlers;
use amygdala::Directory;

async fn spawn_directory_server() -> String {
    let directory = Arc::new(Directory::builtin());
    let app = Router::new()
        .route("/therapists", get(handlers::list_therapists))
        .route("/health", get(handlers::health))
        .with_state(directory);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn defaults_return_the_first_ten_records() {
    let base = spawn_directory_server().await;
    let response = reqwest::get(format!("{}/therapists", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 10);
    assert_eq!(body["total"], 31);
    assert_eq!(body["total_pages"], 4);

    let therapists = body["therapists"].as_array().unwrap();
    assert_eq!(therapists.len(), 10);
    assert_eq!(therapists[0]["name"], "Dr. Sneha Sharma");
    assert_eq!(therapists[0]["rating_percentage"], 100);
}

#[tokio::test]
async fn last_page_returns_the_remaining_record() {
    let base = spawn_directory_server().await;
    let response = reqwest::get(format!("{}/therapists?page=4&per_page=10", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let therapists = body["therapists"].as_array().unwrap();
    assert_eq!(therapists.len(), 1);
    assert_eq!(therapists[0]["id"], "32");
}

#[tokio::test]
async fn page_beyond_the_end_is_an_empty_success() {
    let base = spawn_directory_server().await;
    let response = reqwest::get(format!("{}/therapists?page=100&per_page=10", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert!(body["therapists"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], 31);
}

#[tokio::test]
async fn zero_page_or_per_page_is_a_client_error() {
    let base = spawn_directory_server().await;

    for query in ["page=0", "per_page=0", "page=0&per_page=0", "page=-1"] {
        let response = reqwest::get(format!("{}/therapists?{}", base, query))
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "query: {}", query);

        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("positive"));
    }
}

#[tokio::test]
async fn non_integer_params_are_a_client_error() {
    let base = spawn_directory_server().await;

    for query in ["page=abc", "per_page=ten", "page=1.5"] {
        let response = reqwest::get(format!("{}/therapists?{}", base, query))
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "query: {}", query);

        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn custom_page_size_is_echoed_back() {
    let base = spawn_directory_server().await;
    let response = reqwest::get(format!("{}/therapists?page=2&per_page=7", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["page"], 2);
    assert_eq!(body["per_page"], 7);
    assert_eq!(body["total_pages"], 5);
    assert_eq!(body["therapists"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn health_reports_the_label_count() {
    let base = spawn_directory_server().await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["labels"], 7);
}
