//! A versioned hypermedia (HATEOAS) message API over a concurrent,
//! field-projecting, paginated in-memory store.

pub mod config;
pub mod model;
pub mod paging;
pub mod projection;
pub mod service;
pub mod store;

#[cfg(feature = "http")]
pub mod http;

pub use model::{Entity, Link, Message, MessageBuilder, Resource, Resources, ENTITY_ID};
pub use paging::{PageDescriptor, PagingError};
pub use projection::{project, FieldSet, Projectable};
pub use service::{
    ApiVersion, CreateMessage, LinkBuilder, MessageApi, MessageService, PageRequest, PageRoute,
    ServiceError,
};
pub use store::{InMemoryStore, MessageStore, Store, StoreError};
