//! Link assembly for pagination controls.
//!
//! Merges a target page into the query string of the listing route while
//! keeping every other parameter (filters, search terms, sort order) intact.

use serde::Serialize;
use url::form_urlencoded;

use super::controls::PageDescriptor;

/// Query key the page number is written to unless configured otherwise
pub const DEFAULT_PAGE_QUERY_KEY: &str = "page";

/// Whether `path` is a route on this site.
///
/// It must start with a single `/`; `//host` and `/\\host` are read by
/// browsers as another origin.
pub fn is_local_route(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// Builds hrefs for a listing route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinkBuilder {
    path: String,
    query: Vec<(String, String)>,
    page_key: String,
}

impl PageLinkBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            page_key: DEFAULT_PAGE_QUERY_KEY.to_string(),
        }
    }

    /// Build from a path and an undecoded query string such as `search=abc&page=2`
    pub fn from_query_string(path: impl Into<String>, raw_query: &str) -> Self {
        let query = form_urlencoded::parse(raw_query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
        Self {
            query,
            ..Self::new(path)
        }
    }

    /// Build from a relative target such as `/dashboard?search=abc`.
    ///
    /// Any `#fragment` is dropped.
    pub fn from_target(target: &str) -> Self {
        let target = target.split_once('#').map_or(target, |(before, _)| before);
        match target.split_once('?') {
            Some((path, raw_query)) => Self::from_query_string(path, raw_query),
            None => Self::new(target),
        }
    }

    /// Merge query pairs that must survive navigation.
    ///
    /// A key present in `pairs` replaces every pair already held under that
    /// key; the new pairs follow the remaining ones. Repeated keys inside
    /// `pairs` are all kept.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let incoming: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.query
            .retain(|(key, _)| !incoming.iter().any(|(new_key, _)| new_key == key));
        self.query.extend(incoming);
        self
    }

    pub fn with_page_key(mut self, page_key: impl Into<String>) -> Self {
        self.page_key = page_key.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page_key(&self) -> &str {
        &self.page_key
    }

    /// Href for `page`.
    ///
    /// An existing page parameter is replaced in place (repeated ones are
    /// collapsed); otherwise the page is appended last.
    pub fn href(&self, page: u64) -> String {
        let page_value = page.to_string();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut page_written = false;

        for (key, value) in &self.query {
            if *key == self.page_key {
                if !page_written {
                    serializer.append_pair(key, &page_value);
                    page_written = true;
                }
                continue;
            }
            serializer.append_pair(key, value);
        }

        if !page_written {
            serializer.append_pair(&self.page_key, &page_value);
        }

        format!("{}?{}", self.path, serializer.finish())
    }
}

/// A control paired with everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    #[serde(flatten)]
    pub descriptor: PageDescriptor,
    pub label: String,
    pub accessible_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PageLink {
    pub fn new(descriptor: PageDescriptor, links: &PageLinkBuilder) -> Self {
        Self {
            label: descriptor.label(),
            accessible_label: descriptor.accessible_label(),
            href: descriptor.target_page().map(|page| links.href(page)),
            descriptor,
        }
    }
}

/// Attach hrefs to a control strip. Active and ellipsis entries get none.
pub fn link_controls(controls: &[PageDescriptor], links: &PageLinkBuilder) -> Vec<PageLink> {
    controls
        .iter()
        .map(|descriptor| PageLink::new(*descriptor, links))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_appends_page() {
        let links = PageLinkBuilder::new("/dashboard");
        assert_eq!(links.href(3), "/dashboard?page=3");
    }

    #[test]
    fn test_href_preserves_other_params() {
        let links = PageLinkBuilder::from_query_string("/schemes", "search=green+energy&sort=name");
        assert_eq!(
            links.href(2),
            "/schemes?search=green+energy&sort=name&page=2"
        );
    }

    #[test]
    fn test_href_replaces_existing_page_in_place() {
        let links = PageLinkBuilder::from_query_string("/schemes", "page=7&search=x&page=9");
        assert_eq!(links.href(1), "/schemes?page=1&search=x");
    }

    #[test]
    fn test_href_encodes_values() {
        let links = PageLinkBuilder::new("/users").with_query([("role", "super admin&co")]);
        assert_eq!(links.href(4), "/users?role=super+admin%26co&page=4");
    }

    #[test]
    fn test_with_query_replaces_keys_from_target() {
        let links = PageLinkBuilder::from_target("/grants?status=open&sort=date")
            .with_query([("status", "closed")]);
        assert_eq!(links.href(2), "/grants?sort=date&status=closed&page=2");
    }

    #[test]
    fn test_with_query_keeps_repeated_incoming_keys() {
        let links = PageLinkBuilder::from_target("/grants?tag=old")
            .with_query([("tag", "water"), ("tag", "air")]);
        assert_eq!(links.href(1), "/grants?tag=water&tag=air&page=1");
    }

    #[test]
    fn test_is_local_route() {
        assert!(is_local_route("/"));
        assert!(is_local_route("/grants?status=open"));
        assert!(!is_local_route("grants"));
        assert!(!is_local_route(""));
        assert!(!is_local_route("//evil.example/phish"));
        assert!(!is_local_route("/\\evil.example"));
        assert!(!is_local_route("https://evil.example"));
    }

    #[test]
    fn test_custom_page_key() {
        let links = PageLinkBuilder::new("/applications").with_page_key("p");
        assert_eq!(links.href(2), "/applications?p=2");
        assert_eq!(links.page_key(), "p");
    }

    #[test]
    fn test_from_target() {
        let links = PageLinkBuilder::from_target("/dashboard?tab=open#top");
        assert_eq!(links.path(), "/dashboard");
        assert_eq!(links.href(5), "/dashboard?tab=open&page=5");

        let bare = PageLinkBuilder::from_target("/dashboard");
        assert_eq!(bare.href(1), "/dashboard?page=1");
    }

    #[test]
    fn test_link_controls() {
        let links = PageLinkBuilder::new("/list");
        let controls = [
            PageDescriptor::Previous { target_page: 1 },
            PageDescriptor::Active { page: 2 },
            PageDescriptor::Ellipsis {
                skipped_range_start: 3,
                skipped_range_end: 4,
            },
            PageDescriptor::Numeric { page: 5 },
        ];

        let linked = link_controls(&controls, &links);
        let hrefs: Vec<_> = linked.iter().map(|l| l.href.as_deref()).collect();
        assert_eq!(
            hrefs,
            vec![Some("/list?page=1"), None, None, Some("/list?page=5")]
        );
        assert_eq!(linked[2].accessible_label, "Skipping pages 3 to 4");
    }

    #[test]
    fn test_page_link_serialization() {
        let link = PageLink::new(
            PageDescriptor::Numeric { page: 3 },
            &PageLinkBuilder::new("/list"),
        );
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "numeric",
                "page": 3,
                "label": "3",
                "accessible_label": "Page 3",
                "href": "/list?page=3"
            })
        );
    }
}
