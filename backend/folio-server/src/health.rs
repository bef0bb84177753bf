use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /health - liveness check, no session required
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
