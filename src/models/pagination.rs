//! Response bodies for paginated list endpoints.
//!
//! Field declaration order is the key order on the wire.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `meta.pagination` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSummary {
    pub page: u64,
    pub pages: u64,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub pagination: PaginationSummary,
}

/// Navigation links; `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Nested JSON-API style envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonApiPage<T> {
    pub results: Vec<T>,
    pub meta: PaginationMeta,
    pub links: PageLinks,
}

/// Flat envelope kept for clients of the older response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyPage<T> {
    pub count: u64,
    pub total: u64,
    pub page: u64,
    pub next: Option<u64>,
    pub next_link: Option<String>,
    pub previous: Option<u64>,
    pub previous_link: Option<String>,
    pub results: Vec<T>,
}

/// Either envelope shape, chosen by [`crate::config::PaginationStyle`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PaginatedResponse<T> {
    JsonApi(JsonApiPage<T>),
    Legacy(LegacyPage<T>),
}

impl<T> PaginatedResponse<T> {
    pub fn results(&self) -> &[T] {
        match self {
            Self::JsonApi(page) => &page.results,
            Self::Legacy(page) => &page.results,
        }
    }
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
