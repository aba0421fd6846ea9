//! # Time Adapters

use crate::ports::outbound::TimeSource;
use shared_types::Timestamp;

/// Default time source using system time.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Controllable time source for tests.
///
/// Reports a fixed timestamp that tests can advance between operations.
/// Clones share the same clock, so a test can keep one handle while the
/// service under test owns another.
#[derive(Clone)]
pub struct FixedTimeSource {
    now: std::sync::Arc<std::sync::atomic::AtomicU64>,
}

impl FixedTimeSource {
    /// Create a source frozen at the given timestamp.
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: std::sync::Arc::new(std::sync::atomic::AtomicU64::new(now)),
        }
    }

    /// Move the reported time to a new value.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, std::sync::atomic::Ordering::SeqCst);
    }

    /// Advance the reported time by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, std::sync::atomic::Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.now.load(std::sync::atomic::Ordering::SeqCst)
    }
}
