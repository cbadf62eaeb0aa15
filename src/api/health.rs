use crate::openapi::HEALTH_TAG;
use crate::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Basic health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct Health {
    status: &'static str,
}

/// Basic health check handler. Liveness only; the service holds no state
/// and has no dependency worth probing at readiness time.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    )
)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(Health { status: "ok" }))
}

/// Creates a router for health check routes
pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestFixture;
    use http::StatusCode;

    #[tokio::test]
    async fn test_health_check() {
        let fixture = TestFixture::new().await;
        let response = fixture.get("/health").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json["status"], "ok");
    }
}
