//! End-to-end relay behavior against a stub coordinator bound to an
//! ephemeral port.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use primetop_relay::relay::router;
use primetop_relay::state::RelayState;

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/status")
}

fn relay_for(status_url: String) -> Router {
    router(RelayState {
        client: reqwest::Client::new(),
        status_url,
    })
}

async fn get_status(app: Router) -> (StatusCode, Option<String>, Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let cors = resp
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, cors, body)
}

#[tokio::test]
async fn mirrors_upstream_body_and_sets_cors() {
    let stub = Router::new().route(
        "/api/status",
        get(|| async { Json(json!({"total_jobs": 3, "worker_ids": ["w1"]})) }),
    );
    let url = spawn_stub(stub).await;

    let (status, cors, body) = get_status(relay_for(url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cors.as_deref(), Some("*"));
    assert_eq!(body["total_jobs"], 3);
    assert_eq!(body["worker_ids"][0], "w1");
}

#[tokio::test]
async fn mirrors_upstream_error_status() {
    let stub = Router::new().route(
        "/api/status",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let url = spawn_stub(stub).await;

    let (status, cors, body) = get_status(relay_for(url)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(cors.as_deref(), Some("*"));
    assert!(body["error"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn unreachable_coordinator_is_a_500_with_error_body() {
    // bind then drop a listener so the port is free but closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, cors, body) =
        get_status(relay_for(format!("http://{addr}/api/status"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(cors.as_deref(), Some("*"));
    assert!(body["error"].as_str().unwrap().contains("coordinator"));
}

#[tokio::test]
async fn non_json_body_is_a_500() {
    let stub = Router::new().route("/api/status", get(|| async { "plain text" }));
    let url = spawn_stub(stub).await;

    let (status, _cors, body) = get_status(relay_for(url)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("coordinator"));
}
