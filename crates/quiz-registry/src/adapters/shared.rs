//! # Shared Registry Handle
//!
//! Write operations on the service take `&mut self`, which serializes
//! transactions through ownership when a single host task drives the
//! registry. Hosts that spread work across threads wrap the service in
//! this handle instead; the mutex provides the same one-at-a-time model.

use crate::ports::outbound::{EventSink, StateStore, TimeSource};
use crate::service::QuizRegistryService;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, thread-safe handle to a registry service.
pub struct SharedQuizRegistry<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    inner: Arc<Mutex<QuizRegistryService<KV, TS, EV>>>,
}

impl<KV, TS, EV> SharedQuizRegistry<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    /// Wrap a service for sharing across threads.
    pub fn new(service: QuizRegistryService<KV, TS, EV>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Lock the underlying service for one or more operations.
    ///
    /// Transactions issued under a single guard observe no interleaving
    /// from other threads.
    pub fn lock(&self) -> MutexGuard<'_, QuizRegistryService<KV, TS, EV>> {
        self.inner.lock()
    }
}

impl<KV, TS, EV> Clone for SharedQuizRegistry<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
