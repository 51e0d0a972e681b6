//! HTTP tests for the deploy-verification scaffolding: ops endpoints, the
//! seeded pipeline log store, static files, and the OpenAPI document.

use std::path::PathBuf;

use devopsstack_server::{db, router, AppConfig, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn spawn_app(database_url: Option<String>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
        database_url: database_url.clone(),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../wwwroot"),
    };
    let pool = match database_url.as_deref() {
        Some(url) => Some(db::init_pool(url).await.expect("init test database")),
        None => None,
    };
    let state = AppState::new(config, pool);

    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("serve test app");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_deploy_returns_marker_text() {
    let base = spawn_app(None).await;

    let response = reqwest::get(format!("{base}/test-deploy"))
        .await
        .expect("request test-deploy");
    assert_eq!(response.status(), StatusCode::OK);

    let text = response.text().await.expect("read body");
    assert_eq!(text, "CI/CD Pipeline is working! Hello from GitHub!");
}

#[tokio::test]
async fn db_check_reports_unconfigured_database() {
    let base = spawn_app(None).await;

    let response = reqwest::get(format!("{base}/db-check"))
        .await
        .expect("request db-check");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("decode db-check body");
    assert_eq!(body, json!({ "configured": false, "reachable": false }));
}

#[tokio::test]
async fn db_check_and_logs_with_seeded_database() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite:{}", dir.path().join("pipeline.db").display());
    let base = spawn_app(Some(url)).await;

    let response = reqwest::get(format!("{base}/db-check"))
        .await
        .expect("request db-check");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("decode db-check body");
    assert_eq!(body, json!({ "configured": true, "reachable": true }));

    let response = reqwest::get(format!("{base}/api/pipeline/logs"))
        .await
        .expect("request logs");
    assert_eq!(response.status(), StatusCode::OK);
    let logs: Value = response.json().await.expect("decode logs body");
    let logs = logs.as_array().expect("logs is an array");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["message"], "First Log from Pipeline");
}

#[tokio::test]
async fn logs_without_database_are_unavailable() {
    let base = spawn_app(None).await;

    let response = reqwest::get(format!("{base}/api/pipeline/logs"))
        .await
        .expect("request logs");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn verification_page_is_served_from_static_dir() {
    let base = spawn_app(None).await;

    let response = reqwest::get(format!("{base}/verify.html"))
        .await
        .expect("request verify page");
    assert_eq!(response.status(), StatusCode::OK);

    let text = response.text().await.expect("read page");
    assert!(text.contains("DevOpsStack deploy verification"));
}

#[tokio::test]
async fn openapi_document_is_published() {
    let base = spawn_app(None).await;

    let response = reqwest::get(format!("{base}/api-docs/openapi.json"))
        .await
        .expect("request openapi document");
    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = response.json().await.expect("decode openapi document");
    assert!(doc["paths"]
        .as_object()
        .expect("paths object")
        .contains_key("/api/pipeline/build-status"));
}
