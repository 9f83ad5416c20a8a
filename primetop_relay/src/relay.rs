//! The `/api/status` relay handler: one upstream GET per request, status
//! code mirrored, JSON validated, permissive CORS on every response.

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::state::RelayState;

pub fn router(state: RelayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/api/status", get(relay_status))
        .layer(cors)
        .with_state(state)
}

async fn relay_status(State(state): State<RelayState>) -> Response {
    let started = Instant::now();
    tracing::debug!(upstream = %state.status_url, "relaying status request");

    let resp = match state.client.get(&state.status_url).send().await {
        Ok(r) => r,
        Err(err) => {
            tracing::error!(error = %err, "failed to reach coordinator");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch from coordinator: {err}"),
            );
        }
    };

    let upstream = resp.status();
    let mirrored = StatusCode::from_u16(upstream.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    if !upstream.is_success() {
        tracing::warn!(status = %upstream, "coordinator returned an error");
        return error_response(mirrored, format!("API returned {upstream}"));
    }

    // Validate the body is JSON before passing it along.
    let body = match resp.json::<Value>().await {
        Ok(v) => v,
        Err(err) => {
            tracing::error!(error = %err, "coordinator body was not JSON");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch from coordinator: {err}"),
            );
        }
    };

    tracing::info!(
        status = %upstream,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "status relayed"
    );
    (mirrored, Json(body)).into_response()
}

fn error_response(code: StatusCode, message: String) -> Response {
    (code, Json(json!({ "error": message }))).into_response()
}
