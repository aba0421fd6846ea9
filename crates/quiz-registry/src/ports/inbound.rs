//! # Inbound Ports (Driving Ports)
//!
//! The primary API the Quiz Registry exposes to the rest of the platform.

use crate::domain::entities::{CreatorStats, PlatformConfig, PlatformStats, Quiz};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{CreateQuizRequest, StatsAction};
use shared_types::{Address, QuizId, U256};

/// Primary API for the Quiz Registry.
///
/// The host environment supplies `caller` out of band; it is never taken
/// from a request payload. Write operations take `&mut self`: invocations
/// are serialized, one transaction at a time, and each one either fully
/// commits or leaves no trace.
pub trait QuizRegistryApi {
    /// Create a quiz as one atomic transaction.
    ///
    /// Validates the caller, the question count, and the reward settings in
    /// that order, then allocates the next identifier and commits the quiz
    /// record, the advanced counter, and the refreshed creator and platform
    /// statistics in a single batch. A `QuizCreated` event is appended after
    /// the batch commits.
    ///
    /// # Errors
    /// - `RegistryError::UnauthorizedCreator` - declared creator != caller
    /// - `RegistryError::InvalidQuestionCount` - not within 1 to 50
    /// - `RegistryError::InvalidRewardAmount` - rewards on, amount zero
    /// - `RegistryError::InvalidMinPlayers` - rewards on, min players zero
    /// - `RegistryError::InvalidPrizeDistribution` - custom shares != 100
    /// - `RegistryError::Store` - the state store failed
    fn create_quiz(
        &mut self,
        request: CreateQuizRequest,
        caller: Address,
    ) -> Result<Quiz, RegistryError>;

    /// Record one creator action, upserting the aggregate statistics.
    ///
    /// A first-ever action starts from a zeroed record. The creator and
    /// platform counters move together in one batch, and `last_activity`
    /// refreshes on every call. Returns the updated creator record.
    ///
    /// # Errors
    /// - `RegistryError::Store` - the state store failed
    fn update_creator_stats(
        &mut self,
        creator: Address,
        action: StatsAction,
    ) -> Result<CreatorStats, RegistryError>;

    /// Write the default platform configuration if none exists.
    ///
    /// Idempotent: repeat calls are no-ops and existing configuration is
    /// never overwritten. Returns `true` when defaults were written.
    ///
    /// # Errors
    /// - `RegistryError::Store` - the state store failed
    fn initialize_platform_config(&mut self) -> Result<bool, RegistryError>;

    /// Read a quiz by identifier.
    fn get_quiz(&self, id: QuizId) -> Result<Option<Quiz>, RegistryError>;

    /// Read a creator's aggregate statistics.
    fn get_creator_stats(&self, creator: Address) -> Result<Option<CreatorStats>, RegistryError>;

    /// Read the platform configuration.
    fn get_platform_config(&self) -> Result<Option<PlatformConfig>, RegistryError>;

    /// Read the platform-wide statistics.
    fn get_platform_stats(&self) -> Result<Option<PlatformStats>, RegistryError>;

    /// Total quizzes ever created (the current counter value).
    fn total_quizzes(&self) -> Result<U256, RegistryError>;

    /// Check whether a quiz exists.
    fn quiz_exists(&self, id: QuizId) -> bool;
}
