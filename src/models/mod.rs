//! Paginator input types and paginated response bodies.

pub mod page;
pub mod pagination;
