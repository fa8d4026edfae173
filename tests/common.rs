// Shared test plumbing: an in-process stub of the video-upload API, served
// on an ephemeral port so probe tests never touch the network.
#![allow(dead_code)]

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct StubApi {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A well-behaved stub: history works, unknown routes 404 with a JSON error,
/// and the upload handler validates the file part before the services field.
pub async fn spawn_stub_api() -> StubApi {
    let router = Router::new()
        .route("/api/history", get(history))
        .route("/api/upload", post(upload))
        .fallback(not_found);
    spawn(router).await
}

/// A stub whose history endpoint answers 500, as the real service does when
/// its database is unreachable.
pub async fn spawn_failing_history_api() -> StubApi {
    let router = Router::new()
        .route("/api/history", get(failing_history))
        .fallback(not_found);
    spawn(router).await
}

async fn spawn(router: Router) -> StubApi {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub listener has no address");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub server exited");
    });

    StubApi {
        base_url: format!("http://{addr}"),
        handle,
    }
}

async fn history() -> impl IntoResponse {
    Json(json!({ "history": [] }))
}

async fn failing_history() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Database unavailable" })),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}

async fn upload(mut multipart: Multipart) -> (StatusCode, Json<serde_json::Value>) {
    let mut has_file = false;
    let mut services = String::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => {
                let _ = field.bytes().await;
                has_file = true;
            }
            Some("services") => {
                services = field.text().await.unwrap_or_default();
            }
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    // Same validation order as the real service: file first, then services.
    if !has_file {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No file uploaded" })),
        );
    }
    if services.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No service selected" })),
        );
    }

    (StatusCode::OK, Json(json!({ "success": true })))
}
