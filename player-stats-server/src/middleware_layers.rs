//! Cross-cutting layers applied to every route.

use std::panic::AssertUnwindSafe;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;

use crate::AppState;
use crate::error::ApiError;

/// Log method, path, status and latency for each request.
pub(crate) async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if status.is_server_error() {
        log::warn!("{method} {path} {} {elapsed_ms:.1}ms", status.as_u16());
    } else {
        log::info!("{method} {path} {} {elapsed_ms:.1}ms", status.as_u16());
    }
    response
}

/// Turn a panicking handler into a generic 500 instead of a dropped connection.
pub(crate) async fn catch_panics(req: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::error!("Unhandled error: {detail}");
            ApiError::internal("Internal server error").into_response()
        }
    }
}

/// Refuse new work once shutdown has begun.
pub(crate) async fn admission(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if !state.is_accepting() {
        return ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Server is shutting down")
            .into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::middleware;
    use axum::routing::get;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use super::*;

    async fn explode() -> &'static str {
        panic!("connection string leaked: secret")
    }

    async fn calm() -> &'static str {
        "fine"
    }

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn panicking_handler_becomes_generic_500() {
        let router = Router::new()
            .route("/explode", get(explode))
            .route("/calm", get(calm))
            .layer(middleware::from_fn(catch_panics));
        let base = serve(router).await;
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/explode")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"error": "Internal server error"}));

        // The server keeps serving after a panic.
        let resp = client.get(format!("{base}/calm")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "fine");
    }
}
