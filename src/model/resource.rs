//! Hypermedia wrappers: an entity or a page of entities plus navigational links.

use serde::{Deserialize, Serialize};

/// A navigational reference embedded in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub const SELF: &'static str = "self";
    pub const PREV: &'static str = "prev";
    pub const NEXT: &'static str = "next";

    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// An entity with its links. The entity's own fields are inlined next to
/// `links` in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub entity: T,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl<T> Resource<T> {
    pub fn new(entity: T) -> Self {
        Self {
            entity,
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }
}

/// One page of resources plus page-level links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources<T> {
    pub resources: Vec<Resource<T>>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl<T> Default for Resources<T> {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl<T> Resources<T> {
    pub fn new(resources: Vec<Resource<T>>) -> Self {
        Self {
            resources,
            links: Vec::new(),
        }
    }

    pub fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
