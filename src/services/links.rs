//! Navigation link construction by query-parameter substitution.

use url::form_urlencoded;

use crate::middleware::request_context::RequestContext;

/// Set `key=value` in the query string of `url`.
///
/// The first existing `key` is overwritten in place and any repeats are
/// dropped; otherwise the pair is appended. Other parameters keep their order.
/// Works on relative URLs, including the empty string.
pub fn replace_query_param(url: &str, key: &str, value: &str) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut replaced = false;
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        if k == key {
            if !replaced {
                serializer.append_pair(key, value);
                replaced = true;
            }
            continue;
        }
        serializer.append_pair(&k, &v);
    }
    if !replaced {
        serializer.append_pair(key, value);
    }

    let mut link = format!("{base}?{}", serializer.finish());
    if let Some(fragment) = fragment {
        link.push('#');
        link.push_str(fragment);
    }
    link
}

/// Link to page `index` based on the request URL.
///
/// An absent or zero index means there is no such page and yields `None`.
/// Without a request context the link is relative (`?page=N`).
pub fn build_link(request: Option<&RequestContext>, param: &str, index: Option<u64>) -> Option<String> {
    let index = index.filter(|&i| i != 0)?;
    let url = request.map(RequestContext::build_absolute_uri).unwrap_or("");
    Some(replace_query_param(url, param, &index.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/things";

    #[test]
    fn appends_page_when_no_query() {
        assert_eq!(
            replace_query_param(BASE, "page", "3"),
            "https://api.example.com/things?page=3"
        );
    }

    #[test]
    fn replaces_page_and_keeps_other_params_in_order() {
        let url = format!("{BASE}?page=1&sort=name");
        assert_eq!(
            replace_query_param(&url, "page", "3"),
            "https://api.example.com/things?page=3&sort=name"
        );

        let url = format!("{BASE}?sort=name&page=1&filter=open");
        assert_eq!(
            replace_query_param(&url, "page", "3"),
            "https://api.example.com/things?sort=name&page=3&filter=open"
        );
    }

    #[test]
    fn appends_after_existing_params() {
        let url = format!("{BASE}?sort=name");
        assert_eq!(
            replace_query_param(&url, "page", "2"),
            "https://api.example.com/things?sort=name&page=2"
        );
    }

    #[test]
    fn collapses_repeated_page_params() {
        let url = format!("{BASE}?page=1&sort=name&page=4");
        assert_eq!(
            replace_query_param(&url, "page", "2"),
            "https://api.example.com/things?page=2&sort=name"
        );
    }

    #[test]
    fn substitution_is_idempotent() {
        let url = format!("{BASE}?sort=name&page=3");
        assert_eq!(replace_query_param(&url, "page", "3"), url);
    }

    #[test]
    fn keeps_fragment() {
        let url = format!("{BASE}?page=1#top");
        assert_eq!(
            replace_query_param(&url, "page", "2"),
            "https://api.example.com/things?page=2#top"
        );
    }

    #[test]
    fn empty_url_gives_relative_query() {
        assert_eq!(replace_query_param("", "page", "5"), "?page=5");
    }

    #[test]
    fn build_link_treats_missing_and_zero_as_absent() {
        let request = RequestContext::new(BASE);
        assert_eq!(build_link(Some(&request), "page", None), None);
        assert_eq!(build_link(Some(&request), "page", Some(0)), None);
    }

    #[test]
    fn build_link_uses_request_url() {
        let request = RequestContext::new(format!("{BASE}?page=2"));
        assert_eq!(
            build_link(Some(&request), "page", Some(1)).as_deref(),
            Some("https://api.example.com/things?page=1")
        );
    }

    #[test]
    fn build_link_without_request_is_relative() {
        assert_eq!(build_link(None, "page", Some(4)).as_deref(), Some("?page=4"));
        assert_eq!(build_link(None, "p", Some(4)).as_deref(), Some("?p=4"));
    }
}
