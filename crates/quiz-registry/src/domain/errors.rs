//! # Domain Errors
//!
//! Error types for the Quiz Registry subsystem.
//!
//! Every domain rule is checked before any state is touched, so a failing
//! operation leaves the counter, the stored records, and the event log
//! exactly as they were.

use shared_types::Address;
use thiserror::Error;

/// Errors that can occur in the Quiz Registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The declared creator does not match the invoking actor.
    #[error("declared creator {declared:02x?} does not match caller {caller:02x?}")]
    UnauthorizedCreator { declared: Address, caller: Address },

    /// Question sequence length outside the allowed range.
    #[error("question count {count} outside allowed range [{min}, {max}]")]
    InvalidQuestionCount {
        count: usize,
        min: usize,
        max: usize,
    },

    /// Rewards are enabled but the reward amount is zero.
    #[error("reward amount must be greater than zero when rewards are enabled")]
    InvalidRewardAmount,

    /// Rewards are enabled but the minimum player count is zero.
    #[error("minimum players must be greater than zero when rewards are enabled")]
    InvalidMinPlayers,

    /// Custom prize percentages do not sum to exactly 100.
    #[error("custom prize percentages sum to {sum}, expected exactly 100")]
    InvalidPrizeDistribution { sum: u32 },

    /// The state store rejected an operation.
    #[error("state store error: {0}")]
    Store(#[from] StoreError),

    /// A stored record could not be encoded or decoded.
    #[error("record codec error: {message}")]
    Codec { message: String },
}

/// Errors surfaced by state store adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing engine rejected the operation.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// I/O failure in a durable adapter.
    #[error("i/o error: {message}")]
    Io { message: String },
}

impl StoreError {
    /// Wrap an I/O error.
    pub fn io(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}
