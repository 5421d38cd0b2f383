//! Page-number pagination envelope builder.
//!
//! Holds only configuration, so one instance is shared by every handler.

use serde::Serialize;

use crate::config::{PaginationConfig, PaginationStyle};
use crate::middleware::request_context::RequestContext;
use crate::models::page::Page;
use crate::models::pagination::PaginatedResponse;
use crate::services::links;
use crate::services::navigation::Navigation;

#[derive(Debug, Clone)]
pub struct PageNumberPagination {
    style: PaginationStyle,
    page_query_param: String,
}

impl PageNumberPagination {
    pub fn new(style: PaginationStyle, page_query_param: impl Into<String>) -> Self {
        Self {
            style,
            page_query_param: page_query_param.into(),
        }
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(config.style, config.page_query_param.clone())
    }

    pub fn style(&self) -> PaginationStyle {
        self.style
    }

    pub fn page_query_param(&self) -> &str {
        &self.page_query_param
    }

    /// Same builder with a different output shape.
    pub fn with_style(&self, style: PaginationStyle) -> Self {
        Self {
            style,
            page_query_param: self.page_query_param.clone(),
        }
    }

    /// Link to page `index`; `None` for an absent or zero index.
    pub fn build_link(&self, request: Option<&RequestContext>, index: Option<u64>) -> Option<String> {
        links::build_link(request, &self.page_query_param, index)
    }

    /// Wrap `items` with the navigation data of `page` in the configured shape.
    pub fn get_paginated_response<P, T>(
        &self,
        page: &P,
        request: Option<&RequestContext>,
        items: Vec<T>,
    ) -> PaginatedResponse<T>
    where
        P: Page + ?Sized,
        T: Serialize,
    {
        let navigation = Navigation::from_page(page, request, &self.page_query_param);

        tracing::debug!(
            page = navigation.page,
            pages = navigation.pages,
            count = navigation.count,
            style = %self.style,
            "Building paginated response"
        );

        match self.style {
            PaginationStyle::JsonApi => PaginatedResponse::JsonApi(navigation.into_json_api(items)),
            PaginationStyle::Legacy => PaginatedResponse::Legacy(navigation.into_legacy(items)),
        }
    }
}

impl Default for PageNumberPagination {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}
