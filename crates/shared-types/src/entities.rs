//! # Core Domain Entities
//!
//! Defines the platform-wide primitive types shared by every subsystem.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, the actor identifier supplied by the host
//! - **Identifiers & Time**: `QuizId`, `Timestamp`
//! - **Authoring**: `Question`, supplied wholesale by the authoring subsystem

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 20-byte actor identifier.
///
/// Identifies quiz creators, reward tokens, and the platform treasury. The
/// host environment supplies the invoking actor's address with each call; it
/// is never taken from a caller-controlled payload.
pub type Address = [u8; 20];

/// Globally unique quiz identifier, assigned by the registry's allocator.
///
/// Strictly increasing; the first quiz ever created receives id 1.
pub type QuizId = U256;

/// Logical timestamp supplied by the host environment.
///
/// Monotonically non-decreasing across invocations. Production adapters use
/// seconds since the Unix epoch.
pub type Timestamp = u64;

/// The all-zero address.
///
/// Used only for record fields pending assignment (e.g. the platform treasury
/// before an admin sets it). Absence of a whole record is represented by
/// `Option`, never by a zero sentinel.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// A single authored quiz question.
///
/// Supplied wholesale by the question-authoring subsystem. The registry core
/// counts and stores questions; it never interprets their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text shown to players.
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_option: u8,
    /// Points awarded for a correct answer.
    pub points: u32,
}

impl Question {
    /// Create a question from its authored parts.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: u8,
        points: u32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_option,
            points,
        }
    }
}
