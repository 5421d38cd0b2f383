//! Paginator state handed to the envelope builder.

use serde::{Deserialize, Serialize};

/// Totals for the whole partitioned dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    pub count: u64,
    pub num_pages: u64,
}

impl Paginator {
    pub fn new(count: u64, num_pages: u64) -> Self {
        Self { count, num_pages }
    }
}

/// One slice of a paginated dataset, as produced by the paginator.
///
/// `next_page_number` and `previous_page_number` are only meaningful when
/// `has_next` / `has_previous` return `true`. Callers that need an optional
/// value should go through [`crate::services::navigation`] instead of
/// calling them directly.
pub trait Page {
    /// 1-based index of this page.
    fn number(&self) -> u64;

    fn has_next(&self) -> bool;

    fn has_previous(&self) -> bool;

    fn next_page_number(&self) -> u64;

    fn previous_page_number(&self) -> u64;

    fn paginator(&self) -> &Paginator;
}

/// Plain-data page: a page number paired with its paginator totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub number: u64,
    pub paginator: Paginator,
}

impl PageState {
    pub fn new(number: u64, paginator: Paginator) -> Self {
        Self { number, paginator }
    }
}

impl Page for PageState {
    fn number(&self) -> u64 {
        self.number
    }

    fn has_next(&self) -> bool {
        self.number < self.paginator.num_pages
    }

    fn has_previous(&self) -> bool {
        self.number > 1
    }

    fn next_page_number(&self) -> u64 {
        self.number + 1
    }

    fn previous_page_number(&self) -> u64 {
        self.number.saturating_sub(1)
    }

    fn paginator(&self) -> &Paginator {
        &self.paginator
    }
}
