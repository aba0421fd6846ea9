//! # Quiz Registry
//!
//! The Quiz Registry is the transactional state layer of the quiz platform.
//! It owns quiz creation end to end: identifier allocation, validation,
//! persistence, aggregate statistics, and the creation event stream.
//!
//! ## Architecture
//!
//! Every effectful collaborator is injected through a driven port, so the
//! same service runs against in-memory adapters in tests and durable
//! adapters in production:
//!
//! ```text
//!               create_quiz(request, caller)
//!                          │
//!                          ▼
//!          ┌───────────────────────────────┐
//!          │ 1. caller == declared_creator │
//!          │ 2. 1 ≤ questions ≤ 50         │
//!          │ 3. reward settings consistent │
//!          └───────────────┬───────────────┘
//!                          │ all checks pass
//!                          ▼
//!          ┌───────────────────────────────┐
//!          │ stage: counter+1, quiz record │
//!          │ creator stats, platform stats │
//!          └───────────────┬───────────────┘
//!                          ▼
//!               [one atomic batch write]
//!                          ▼
//!               append QuizCreated event
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Trusted Identity | `creator` always comes from the host, never the payload |
//! | 2 | Bounded Questions | A quiz carries between 1 and 50 questions |
//! | 3 | Consistent Rewards | Rewarded quizzes have amount > 0, min players > 0, custom shares = 100 |
//! | 4 | Atomic Creation | Counter, quiz, and statistics commit together or not at all |
//! | 5 | Monotonic Identifiers | Ids are dense, strictly increasing, never reused |
//! | 6 | Absence Is Default | A missing record reads as its zeroed default, never an error |
//! | 7 | Init Once | Platform initialization never overwrites existing configuration |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, value objects, invariants)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `service/` - Application service implementing the API
//! - `adapters/` - State store, time, and event log implementations
//! - `events/` - Append-only event payloads
//!
//! ## Usage
//!
//! ```ignore
//! use quiz_registry::{
//!     InMemoryEventLog, InMemoryStateStore, QuizRegistryApi, QuizRegistryService,
//!     RegistryDependencies, SystemTimeSource,
//! };
//!
//! let deps = RegistryDependencies {
//!     store: InMemoryStateStore::new(),
//!     time_source: SystemTimeSource,
//!     event_sink: InMemoryEventLog::new(),
//! };
//! let mut registry = QuizRegistryService::new(deps);
//!
//! registry.initialize_platform_config()?;
//! let quiz = registry.create_quiz(request, caller)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use adapters::{
    FileBackedStateStore, FixedTimeSource, InMemoryEventLog, InMemoryStateStore,
    JsonLinesEventLog, SharedQuizRegistry, SystemTimeSource,
};
pub use domain::entities::{
    CreatorStats, PlatformConfig, PlatformStats, Quiz, QuizCounter, DEFAULT_FEE_PERCENT,
    DEFAULT_MIN_PLATFORM_FEE,
};
pub use domain::errors::{RegistryError, StoreError};
pub use domain::invariants::{
    validate_question_count, validate_reward_settings, MAX_QUESTIONS_PER_QUIZ,
    MIN_QUESTIONS_PER_QUIZ,
};
pub use domain::value_objects::{
    CreateQuizRequest, KeyPrefix, PrizeDistribution, QuizDetails, RewardSettings, StatsAction,
};
pub use events::QuizCreatedPayload;
pub use ports::inbound::QuizRegistryApi;
pub use ports::outbound::{BatchOperation, EventSink, StateStore, TimeSource};
pub use service::{QuizRegistryService, RegistryDependencies};
