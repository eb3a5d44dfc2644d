//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Static status payload served without touching storage
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_running() {
        let Json(body) = health().await;
        assert_eq!(body.status, "OK");
        assert_eq!(body.message, "Server is running");
    }
}
