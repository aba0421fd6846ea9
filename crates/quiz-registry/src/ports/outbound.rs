//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the Quiz Registry requires from the host application.
//! Every effectful collaborator (storage, clock, event emission) enters the
//! service through one of these traits, so tests can substitute all of them.

use crate::domain::errors::StoreError;
use crate::events::QuizCreatedPayload;
use shared_types::Timestamp;

/// Abstract interface for the keyed record store.
///
/// **Production**: a durable adapter such as `FileBackedStateStore`
/// **Testing**: `InMemoryStateStore`
///
/// Absence of a key is `Ok(None)`, never an error. Callers give every
/// absent record a well-defined default meaning.
pub trait StateStore: Send + Sync {
    /// Get a record's bytes by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is a no-op.
    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations are applied, or NONE are. A batch that fails
    /// must leave the store exactly as it was.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Delete a key.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }
}

/// Abstract interface for logical time (for testability).
///
/// The host environment owns the clock; the registry never reads system
/// time directly. All timestamps within one operation come from a single
/// `now()` call.
pub trait TimeSource: Send + Sync {
    /// Get the current timestamp (seconds since epoch).
    fn now(&self) -> Timestamp;
}

/// Append-only sink for domain events.
///
/// The registry appends one entry per successful creation, in commit order,
/// and never reads the log back. Appends are infallible by contract: a sink
/// that buffers or drops entries must still accept them.
pub trait EventSink: Send + Sync {
    /// Append one event to the log.
    fn append(&mut self, event: QuizCreatedPayload);
}
