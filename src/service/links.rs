//! Absolute hypermedia links for messages and message pages.

use crate::model::Link;
use crate::paging::PageDescriptor;
use crate::projection::FieldSet;

use super::PageRoute;

/// Builds absolute hrefs under one base URL (scheme and authority).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base_url: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new("http://localhost")
    }
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn message_href(&self, id: &str) -> String {
        format!("{}/messages/{}", self.base_url, urlencoding::encode(id))
    }

    /// `self` link to a single message.
    pub fn message(&self, id: &str) -> Link {
        Link::new(Link::SELF, self.message_href(id))
    }

    pub fn page_href(&self, route: PageRoute, page: i64, include_fields: &FieldSet) -> String {
        let mut href = format!("{}/messages/{}/{}", self.base_url, route.segment(), page);
        if let Some(fields) = include_fields.to_query() {
            href.push_str("?includeFields=");
            href.push_str(&urlencoding::encode(&fields));
        }
        href
    }

    /// `prev`, `self` and `next` links for a page, in that order. `prev` and
    /// `next` are present only when such a page exists and carry the
    /// requested fields so that navigation keeps the projection.
    pub fn page_links(
        &self,
        page: &PageDescriptor,
        route: PageRoute,
        include_fields: &FieldSet,
    ) -> Vec<Link> {
        let mut links = Vec::with_capacity(3);
        if page.has_previous {
            links.push(Link::new(
                Link::PREV,
                self.page_href(route, page.page - 1, include_fields),
            ));
        }
        links.push(Link::new(
            Link::SELF,
            self.page_href(route, page.page, &FieldSet::all()),
        ));
        if page.has_next {
            links.push(Link::new(
                Link::NEXT,
                self.page_href(route, page.page + 1, include_fields),
            ));
        }
        links
    }
}
