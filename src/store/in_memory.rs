//! InMemoryStore - RwLock-guarded store with an ordered and a keyed index.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error};
use uuid::Uuid;

use super::{Store, StoreError};
use crate::model::Entity;
use crate::projection::{project, FieldSet, Projectable};

/// A fully materialized entity and its position in insertion order.
#[derive(Debug)]
struct StoredRecord<T> {
    position: usize,
    record: T,
}

/// Both indexes over the same records. They only change together, under
/// the write lock.
#[derive(Debug)]
struct Indexes<T> {
    sequence: Vec<Arc<StoredRecord<T>>>,
    by_id: HashMap<String, Arc<StoredRecord<T>>>,
}

impl<T> Default for Indexes<T> {
    fn default() -> Self {
        Self {
            sequence: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T> Indexes<T> {
    fn check(&self) -> Result<(), StoreError> {
        if self.sequence.len() != self.by_id.len() {
            return Err(StoreError::Inconsistent {
                sequence: self.sequence.len(),
                index: self.by_id.len(),
            });
        }
        Ok(())
    }
}

/// In-memory store. Reads share the lock; create holds it exclusively for
/// the duration of one append.
///
/// Clone-friendly via Arc: every clone sees the same records.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    indexes: Arc<RwLock<Indexes<T>>>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            indexes: Arc::clone(&self.indexes),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            indexes: Arc::new(RwLock::new(Indexes::default())),
        }
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Indexes<T>>, StoreError> {
        self.indexes.read().map_err(|_| {
            error!(operation, "store lock poisoned");
            StoreError::LockPoisoned(operation)
        })
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Indexes<T>>, StoreError> {
        self.indexes.write().map_err(|_| {
            error!(operation, "store lock poisoned");
            StoreError::LockPoisoned(operation)
        })
    }
}

impl<T> Store<T> for InMemoryStore<T>
where
    T: Entity + Projectable + std::fmt::Debug,
{
    fn create(&self, mut entity: T) -> Result<T, StoreError> {
        debug!(?entity, "creating entity");

        let id = Uuid::new_v4().to_string();
        entity.assign_id(id.clone()).map_err(|existing| {
            error!(%existing, "couldn't create entity: identity already assigned");
            StoreError::IdentityAssigned(existing)
        })?;
        let snapshot = entity.clone();

        let mut indexes = self.write("create")?;
        indexes.check().inspect_err(|e| error!(error = %e, "couldn't create entity"))?;
        if indexes.by_id.contains_key(&id) {
            error!(%id, "couldn't create entity: identity collision");
            return Err(StoreError::DuplicateId(id));
        }

        let stored = Arc::new(StoredRecord {
            position: indexes.sequence.len(),
            record: snapshot,
        });
        indexes.sequence.push(Arc::clone(&stored));
        indexes.by_id.insert(id, stored);

        Ok(entity)
    }

    fn find(&self, id: &str, fields: &FieldSet) -> Result<Option<T>, StoreError> {
        debug!(id, %fields, "finding entity");
        let indexes = self.read("find")?;
        Ok(indexes.by_id.get(id).map(|stored| {
            debug!(id, position = stored.position, "entity found");
            project(&stored.record, fields)
        }))
    }

    fn scan(&self, offset: usize, limit: usize, fields: &FieldSet) -> Result<Vec<T>, StoreError> {
        debug!(offset, limit, %fields, "scanning entities");
        let indexes = self.read("scan")?;
        Ok(indexes
            .sequence
            .iter()
            .skip(offset)
            .take(limit)
            .map(|stored| project(&stored.record, fields))
            .collect())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let indexes = self.read("count")?;
        Ok(indexes.sequence.len())
    }

    fn scan_with_total(
        &self,
        offset: usize,
        limit: usize,
        fields: &FieldSet,
    ) -> Result<(Vec<T>, usize), StoreError> {
        debug!(offset, limit, %fields, "scanning entities with total");
        let indexes = self.read("scan")?;
        let records = indexes
            .sequence
            .iter()
            .skip(offset)
            .take(limit)
            .map(|stored| project(&stored.record, fields))
            .collect();
        Ok((records, indexes.sequence.len()))
    }
}
