//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `memory`: in-memory state store for tests and ephemeral hosts
//! - `file`: file-backed state store for durable hosts
//! - `time`: system and fixed time sources
//! - `event_log`: in-memory and JSON-lines event sinks
//! - `shared`: thread-safe handle around the service

pub mod event_log;
pub mod file;
pub mod memory;
pub mod shared;
pub mod time;

pub use event_log::{InMemoryEventLog, JsonLinesEventLog};
pub use file::FileBackedStateStore;
pub use memory::InMemoryStateStore;
pub use shared::SharedQuizRegistry;
pub use time::{FixedTimeSource, SystemTimeSource};
