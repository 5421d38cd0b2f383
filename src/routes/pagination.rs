//! Pagination formatting routes: preview and render envelopes for a paginator state.

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::Value;

use crate::config::PaginationStyle;
use crate::errors::AppError;
use crate::middleware::request_context::RequestContext;
use crate::models::page::{PageState, Paginator};
use crate::models::pagination::PaginatedResponse;
use crate::AppState;

fn first_page() -> u64 {
    1
}

/// Paginator state passed on the query string.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default = "first_page")]
    pub page: u64,
    pub pages: u64,
    pub count: u64,
    pub style: Option<PaginationStyle>,
}

#[derive(Debug, Deserialize)]
pub struct StyleQuery {
    pub style: Option<PaginationStyle>,
}

/// Paginator state plus the already-serialized items of the page.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default = "first_page")]
    pub page: u64,
    pub pages: u64,
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Value>,
    /// Link base to use instead of the incoming request URL.
    pub base_url: Option<String>,
}

/// Reject page numbers the paginator could not have produced.
fn page_state(number: u64, pages: u64, count: u64) -> Result<PageState, AppError> {
    if number == 0 {
        return Err(AppError::Validation("page must be at least 1".to_string()));
    }
    if number > pages.max(1) {
        return Err(AppError::Validation(format!(
            "page {number} is out of range (pages: {pages})"
        )));
    }
    Ok(PageState::new(number, Paginator::new(count, pages)))
}

/// GET /api/v1/pagination/preview — envelope with no results for the given state.
pub async fn preview(
    State(state): State<AppState>,
    request: Option<RequestContext>,
    WithRejection(Query(query), _): WithRejection<Query<PreviewQuery>, AppError>,
) -> Result<PaginatedResponse<Value>, AppError> {
    let page = page_state(query.page, query.pages, query.count)?;
    let pagination = match query.style {
        Some(style) => state.pagination.with_style(style),
        None => state.pagination.clone(),
    };

    Ok(pagination.get_paginated_response(&page, request.as_ref(), Vec::new()))
}

/// POST /api/v1/pagination/render — wrap the supplied results in an envelope.
pub async fn render(
    State(state): State<AppState>,
    request: Option<RequestContext>,
    WithRejection(Query(style), _): WithRejection<Query<StyleQuery>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<RenderRequest>, AppError>,
) -> Result<PaginatedResponse<Value>, AppError> {
    let page = page_state(body.page, body.pages, body.count)?;
    let pagination = match style.style {
        Some(style) => state.pagination.with_style(style),
        None => state.pagination.clone(),
    };
    let request = body.base_url.map(RequestContext::new).or(request);

    let response = pagination.get_paginated_response(&page, request.as_ref(), body.results);
    tracing::info!(
        page = page.number,
        items = response.results().len(),
        "Rendered paginated response"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_state_accepts_in_range() {
        let page = page_state(5, 5, 98).unwrap();
        assert_eq!(page.number, 5);
        assert_eq!(page.paginator, Paginator::new(98, 5));
    }

    #[test]
    fn page_state_accepts_first_page_of_empty_result() {
        assert!(page_state(1, 0, 0).is_ok());
        assert!(page_state(2, 0, 0).is_err());
    }

    #[test]
    fn page_state_rejects_out_of_range() {
        let err = page_state(6, 5, 98).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: page 6 is out of range (pages: 5)");
        assert!(matches!(page_state(0, 5, 98), Err(AppError::Validation(_))));
    }

    #[test]
    fn render_request_defaults() {
        let body: RenderRequest = serde_json::from_str(r#"{"pages": 2, "count": 11}"#).unwrap();
        assert_eq!(body.page, 1);
        assert!(body.results.is_empty());
        assert!(body.base_url.is_none());
    }
}
