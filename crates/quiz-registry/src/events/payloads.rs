//! # Event Payloads
//!
//! Payload structures for events emitted by the Quiz Registry.
//!
//! Events are strictly append-only: the registry writes them for external
//! indexers and activity feeds and never reads them back. No registry
//! behavior may ever depend on the event history.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Timestamp};

/// Payload for the QuizCreated event.
///
/// Emitted exactly once per successful creation, after the record batch is
/// committed. Failed creations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCreatedPayload {
    /// Display title of the new quiz.
    pub title: String,
    /// The actor that created it.
    pub creator: Address,
    /// Logical creation timestamp.
    pub timestamp: Timestamp,
}
