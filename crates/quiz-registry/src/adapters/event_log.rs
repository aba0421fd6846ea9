//! # Event Log Adapters
//!
//! Sinks for the append-only event stream. The registry treats appends as
//! infallible, so durable sinks absorb their own I/O failures rather than
//! propagating them into transactions that already committed.

use crate::domain::errors::StoreError;
use crate::events::QuizCreatedPayload;
use crate::ports::outbound::EventSink;

/// In-memory event log for unit tests and ephemeral hosts.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: Vec<QuizCreatedPayload>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All appended events, in append order.
    pub fn events(&self) -> &[QuizCreatedPayload] {
        &self.events
    }

    /// Number of appended events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn append(&mut self, event: QuizCreatedPayload) {
        self.events.push(event);
    }
}

/// Durable event log writing one JSON object per line.
///
/// External indexers tail the file; the registry itself never reads it.
/// A failed write is logged and dropped, never surfaced to the caller,
/// because the transaction that produced the event has already committed.
pub struct JsonLinesEventLog {
    file: std::fs::File,
    path: std::path::PathBuf,
}

impl JsonLinesEventLog {
    /// Open (or create) an event log at the given path.
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::io)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(StoreError::io)?;

        Ok(Self { file, path })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl EventSink for JsonLinesEventLog {
    fn append(&mut self, event: QuizCreatedPayload) {
        use std::io::Write;

        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("[qp-registry] Failed to encode event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(self.file, "{}", line) {
            tracing::error!(
                "[qp-registry] Failed to append event to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
