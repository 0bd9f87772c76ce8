//! Resource model - the message entity and its hypermedia wrappers.
//!
//! Entities carry an identity that is unset until the store assigns one.
//! After that the identity never changes; there is no update path.
//!
//! ## Example
//!
//! ```ignore
//! use hateoas_messages::model::Message;
//!
//! let message = Message::builder()
//!     .title("Title666")
//!     .content("Test")
//!     .sender("10.11.12.13/sender")
//!     .build();
//!
//! assert!(message.entity_id.is_none());
//! ```

mod builder;
mod message;
mod resource;

pub use builder::MessageBuilder;
pub use message::Message;
pub use resource::{Link, Resource, Resources};

/// Name of the identity field in every serialized representation.
pub const ENTITY_ID: &str = "entityId";

/// Something with a store-assigned identity.
pub trait Entity: Clone + Send + Sync {
    /// Returns the identity, or `None` before the entity has been created.
    fn entity_id(&self) -> Option<&str>;

    /// Assign the identity. Returns the existing id as an error when one is
    /// already set; identities are assigned exactly once.
    fn assign_id(&mut self, id: String) -> Result<(), String>;
}
