//! Navigation values read off a page, computed once and formatted twice.

use crate::middleware::request_context::RequestContext;
use crate::models::page::Page;
use crate::models::pagination::{
    JsonApiPage, LegacyPage, PageLinks, PaginationMeta, PaginationSummary,
};
use crate::services::links::build_link;

/// Current page number.
pub fn page_number<P: Page + ?Sized>(page: &P) -> u64 {
    page.number()
}

/// Next page number, if there is one.
pub fn next_page<P: Page + ?Sized>(page: &P) -> Option<u64> {
    page.has_next().then(|| page.next_page_number())
}

/// Previous page number, if there is one.
pub fn previous_page<P: Page + ?Sized>(page: &P) -> Option<u64> {
    page.has_previous().then(|| page.previous_page_number())
}

pub fn next_page_link<P: Page + ?Sized>(
    page: &P,
    request: Option<&RequestContext>,
    param: &str,
) -> Option<String> {
    build_link(request, param, next_page(page))
}

pub fn previous_page_link<P: Page + ?Sized>(
    page: &P,
    request: Option<&RequestContext>,
    param: &str,
) -> Option<String> {
    build_link(request, param, previous_page(page))
}

/// Everything either envelope shape needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub page: u64,
    pub pages: u64,
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub first_link: Option<String>,
    pub last_link: Option<String>,
    pub next_link: Option<String>,
    pub prev_link: Option<String>,
}

impl Navigation {
    pub fn from_page<P: Page + ?Sized>(
        page: &P,
        request: Option<&RequestContext>,
        param: &str,
    ) -> Self {
        let paginator = page.paginator();
        let next = next_page(page);
        let previous = previous_page(page);

        Self {
            page: page_number(page),
            pages: paginator.num_pages,
            count: paginator.count,
            next,
            previous,
            first_link: build_link(request, param, Some(1)),
            last_link: build_link(request, param, Some(paginator.num_pages)),
            next_link: build_link(request, param, next),
            prev_link: build_link(request, param, previous),
        }
    }

    pub fn into_json_api<T>(self, results: Vec<T>) -> JsonApiPage<T> {
        JsonApiPage {
            results,
            meta: PaginationMeta {
                pagination: PaginationSummary {
                    page: self.page,
                    pages: self.pages,
                    count: self.count,
                },
            },
            links: PageLinks {
                first: self.first_link,
                last: self.last_link,
                next: self.next_link,
                prev: self.prev_link,
            },
        }
    }

    pub fn into_legacy<T>(self, results: Vec<T>) -> LegacyPage<T> {
        LegacyPage {
            count: self.count,
            total: self.pages,
            page: self.page,
            next: self.next,
            next_link: self.next_link,
            previous: self.previous,
            previous_link: self.prev_link,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page::{PageState, Paginator};

    #[test]
    fn field_accessors_on_middle_page() {
        let page = PageState::new(2, Paginator::new(98, 5));
        let request = RequestContext::new("https://api.example.com/things");

        assert_eq!(page_number(&page), 2);
        assert_eq!(next_page(&page), Some(3));
        assert_eq!(previous_page(&page), Some(1));
        assert_eq!(
            next_page_link(&page, Some(&request), "page").as_deref(),
            Some("https://api.example.com/things?page=3")
        );
        assert_eq!(
            previous_page_link(&page, Some(&request), "page").as_deref(),
            Some("https://api.example.com/things?page=1")
        );
    }

    #[test]
    fn field_accessors_on_edges() {
        let first = PageState::new(1, Paginator::new(98, 5));
        assert_eq!(previous_page(&first), None);
        assert_eq!(previous_page_link(&first, None, "page"), None);

        let last = PageState::new(5, Paginator::new(98, 5));
        assert_eq!(next_page(&last), None);
        assert_eq!(next_page_link(&last, None, "page"), None);
    }

    #[test]
    fn navigation_for_empty_result_has_no_last_link() {
        let page = PageState::new(1, Paginator::new(0, 0));
        let nav = Navigation::from_page(&page, None, "page");

        assert_eq!(nav.first_link.as_deref(), Some("?page=1"));
        assert_eq!(nav.last_link, None);
        assert_eq!(nav.next_link, None);
        assert_eq!(nav.prev_link, None);
    }

    #[test]
    fn both_shapes_carry_the_same_values() {
        let page = PageState::new(3, Paginator::new(40, 4));
        let nav = Navigation::from_page(&page, None, "page");

        let legacy = nav.clone().into_legacy(vec!["a"]);
        let json_api = nav.into_json_api(vec!["a"]);

        assert_eq!(legacy.next_link, json_api.links.next);
        assert_eq!(legacy.previous_link, json_api.links.prev);
        assert_eq!(legacy.page, json_api.meta.pagination.page);
        assert_eq!(legacy.total, json_api.meta.pagination.pages);
        assert_eq!(legacy.count, json_api.meta.pagination.count);
        assert_eq!(legacy.next, Some(4));
        assert_eq!(legacy.previous, Some(2));
    }
}
