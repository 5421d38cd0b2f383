//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::PaginationStyle;
use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub pagination_style: PaginationStyle,
    pub page_query_param: String,
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe — reports the active pagination settings.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        pagination_style: state.pagination.style(),
        page_query_param: state.pagination.page_query_param().to_string(),
    })
}
