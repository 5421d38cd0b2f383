//! Absolute request URL extractor used as the base for navigation links.

use std::convert::Infallible;

use axum::{
    extract::{OptionalFromRequestParts, OriginalUri},
    http::{header, request::Parts},
};

use crate::AppState;

/// The current request's absolute URL.
///
/// Use as `Option<RequestContext>` in handlers; the value is `None` when the
/// request carries no host, in which case links come out relative:
/// ```ignore
/// async fn handler(request: Option<RequestContext>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    absolute_uri: String,
}

impl RequestContext {
    pub fn new(absolute_uri: impl Into<String>) -> Self {
        Self {
            absolute_uri: absolute_uri.into(),
        }
    }

    pub fn build_absolute_uri(&self) -> &str {
        &self.absolute_uri
    }

    /// Rebuild the absolute URL from request parts, or `None` without a host.
    pub fn from_parts(parts: &Parts, default_scheme: &str) -> Option<Self> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(&parts.uri);

        let host = uri
            .authority()
            .map(|authority| authority.as_str().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get(header::HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .filter(|host| !host.is_empty())?;

        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| uri.scheme_str())
            .unwrap_or(default_scheme);

        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        Some(Self::new(format!("{scheme}://{host}{path_and_query}")))
    }
}

impl OptionalFromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        let context = Self::from_parts(parts, &state.config.public_scheme);
        if context.is_none() {
            tracing::debug!("No host on request, building relative pagination links");
        }
        Ok(context)
    }
}
