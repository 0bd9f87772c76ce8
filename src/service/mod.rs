//! Versioned message API.
//!
//! Both API versions expose the same capabilities (find by id, get a page,
//! create) through [`MessageApi`]. A single [`MessageService`] implements
//! them on top of a [`Store`](crate::store::Store); what differs between
//! versions lives in a [`FieldPolicy`]:
//!
//! - **V1** exposes `entityId` and `title` only. Requested extra fields are
//!   added to that fixed set, never substituted for it.
//! - **V2** exposes every field and lets clients pick fields per page, with
//!   `entityId` always included.
//!
//! ## Example
//!
//! ```ignore
//! use hateoas_messages::service::{LinkBuilder, MessageApi, MessageServiceV2, PageRequest};
//! use hateoas_messages::store::MessageStore;
//!
//! let api = MessageServiceV2::new(MessageStore::new(), 10);
//! let links = LinkBuilder::new("http://localhost");
//! let page = api.get_page(&links, &PageRequest::list(1))?;
//! ```

mod error;
mod links;
mod message_service;
mod policy;

use std::fmt;

use crate::model::{Message, Resource, Resources};
use crate::projection::FieldSet;

pub use error::ServiceError;
pub use links::LinkBuilder;
pub use message_service::{MessageService, MessageServiceV1, MessageServiceV2};
pub use policy::{FieldPolicy, V1Fields, V2Fields};

/// API version, selected by the client through the `Accept` media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1"),
            ApiVersion::V2 => write!(f, "v2"),
        }
    }
}

/// Which paged route a request came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    List,
    FilterList,
}

impl PageRoute {
    /// Path segment under `/messages`.
    pub fn segment(&self) -> &'static str {
        match self {
            PageRoute::List => "list",
            PageRoute::FilterList => "filterList",
        }
    }
}

/// A request for one page of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub route: PageRoute,
    pub include_fields: FieldSet,
}

impl PageRequest {
    pub fn list(page: i64) -> Self {
        Self {
            page,
            route: PageRoute::List,
            include_fields: FieldSet::all(),
        }
    }

    pub fn filter_list(page: i64, include_fields: FieldSet) -> Self {
        Self {
            page,
            route: PageRoute::FilterList,
            include_fields,
        }
    }

    pub fn with_fields(mut self, include_fields: FieldSet) -> Self {
        self.include_fields = include_fields;
        self
    }
}

/// Client input for creating a message. `sender` is filled in by the
/// transport from the caller's network origin, never by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMessage {
    pub title: Option<String>,
    pub content: Option<String>,
    pub sender: Option<String>,
}

/// The capabilities shared by every API version.
pub trait MessageApi: Send + Sync {
    fn version(&self) -> ApiVersion;

    /// A single message with its self link, or `None` when no message has
    /// that identity.
    fn find(&self, links: &LinkBuilder, id: &str) -> Result<Option<Resource<Message>>, ServiceError>;

    /// One page of messages with per-message self links and page links.
    fn get_page(
        &self,
        links: &LinkBuilder,
        request: &PageRequest,
    ) -> Result<Resources<Message>, ServiceError>;

    /// Store a new message. The result carries only the new identity and
    /// its self link.
    fn create(
        &self,
        links: &LinkBuilder,
        request: CreateMessage,
    ) -> Result<Resource<Message>, ServiceError>;

    /// Number of stored messages.
    fn count(&self) -> Result<usize, ServiceError>;
}
