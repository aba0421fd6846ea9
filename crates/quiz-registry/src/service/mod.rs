//! # Quiz Registry Service
//!
//! The main service implementing the Quiz Registry API.
//!
//! ## Architecture
//!
//! This service coordinates between domain logic and infrastructure:
//!
//! 1. Implements `QuizRegistryApi` (creation transaction, statistics
//!    upserts, platform initialization, reads)
//! 2. Enforces every domain invariant before staging any write
//! 3. Commits each transaction's records through one atomic batch
//! 4. Uses dependency injection for storage, time, and event emission

mod helpers;
mod registry;

use crate::ports::outbound::{EventSink, StateStore, TimeSource};

/// The Quiz Registry Service.
///
/// Write operations take `&mut self`, serializing transactions through
/// ownership. Hosts that share the registry across threads wrap it in
/// `SharedQuizRegistry`.
pub struct QuizRegistryService<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    /// Keyed record store holding all persistent registry state.
    pub(crate) store: KV,
    /// Logical clock supplied by the host environment.
    pub(crate) time_source: TS,
    /// Append-only event log.
    pub(crate) event_sink: EV,
}

/// Dependencies for QuizRegistryService.
pub struct RegistryDependencies<KV, TS, EV> {
    pub store: KV,
    pub time_source: TS,
    pub event_sink: EV,
}

impl<KV, TS, EV> QuizRegistryService<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    /// Create a new service with the given dependencies.
    pub fn new(deps: RegistryDependencies<KV, TS, EV>) -> Self {
        Self {
            store: deps.store,
            time_source: deps.time_source,
            event_sink: deps.event_sink,
        }
    }

    /// Read-only access to the underlying store.
    ///
    /// Lets hosts and tests inspect committed records without going
    /// through the API surface.
    pub fn store(&self) -> &KV {
        &self.store
    }

    /// Read-only access to the event sink.
    pub fn event_sink(&self) -> &EV {
        &self.event_sink
    }
}
