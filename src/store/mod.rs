//! Store - the authoritative, process-local collection of entities.
//!
//! A store supports four capabilities: create, find by id, paged scan in
//! insertion order and count. Reads come back projected through a
//! [`FieldSet`](crate::projection::FieldSet); the stored record itself is
//! never handed out or mutated.

mod in_memory;

use thiserror::Error;

use crate::model::{Entity, Message};
use crate::projection::{FieldSet, Projectable};

pub use in_memory::InMemoryStore;

/// The store backing the message API.
pub type MessageStore = InMemoryStore<Message>;

/// Internal store faults. None of these are expected in normal operation;
/// a lookup miss is `Ok(None)`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("entity already has identity {0}")]
    IdentityAssigned(String),
    #[error("identity {0} is already taken")]
    DuplicateId(String),
    #[error("store indexes out of sync (sequence {sequence}, index {index})")]
    Inconsistent { sequence: usize, index: usize },
}

/// Create and read access to a collection of entities.
pub trait Store<T>: Send + Sync
where
    T: Entity + Projectable,
{
    /// Assign a fresh identity to `entity`, store a full snapshot and return
    /// the entity with its identity set.
    fn create(&self, entity: T) -> Result<T, StoreError>;

    /// The projection of the record with identity `id`, if any.
    fn find(&self, id: &str, fields: &FieldSet) -> Result<Option<T>, StoreError>;

    /// Up to `limit` projected records in insertion order, starting at `offset`.
    fn scan(&self, offset: usize, limit: usize, fields: &FieldSet) -> Result<Vec<T>, StoreError>;

    /// Number of stored records.
    fn count(&self) -> Result<usize, StoreError>;

    /// A [`scan`](Store::scan) together with the record count it was taken
    /// against. Implementations that can read both from one snapshot should;
    /// the default reads them separately.
    fn scan_with_total(
        &self,
        offset: usize,
        limit: usize,
        fields: &FieldSet,
    ) -> Result<(Vec<T>, usize), StoreError> {
        let total = self.count()?;
        let records = self.scan(offset, limit, fields)?;
        Ok((records, total))
    }
}
