//! # In-Memory State Store
//!
//! HashMap-backed store for unit tests and ephemeral hosts.

use crate::domain::errors::StoreError;
use crate::ports::outbound::{BatchOperation, StateStore};

/// In-memory state store.
///
/// Batch writes are trivially atomic: operations apply in sequence on a
/// single-threaded map and none of them can fail. Durable hosts use
/// `FileBackedStateStore` instead.
#[derive(Default)]
pub struct InMemoryStateStore {
    data: std::collections::HashMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.data.remove(key);
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(key))
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }
        Ok(())
    }
}
