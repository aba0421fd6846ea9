//! # Domain Entities
//!
//! Persistent records owned by the Quiz Registry. Every entity here is
//! reached exclusively through the state store's atomic accessors; nothing
//! holds shared-mutable references to them.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Question, QuizId, Timestamp, U256, ZERO_ADDRESS};

use super::value_objects::{CreateQuizRequest, QuizDetails, RewardSettings, StatsAction};

/// Default platform fee, in percent of each reward pool.
pub const DEFAULT_FEE_PERCENT: u8 = 5;

/// Default minimum fee worth collecting, in reward-token base units.
pub const DEFAULT_MIN_PLATFORM_FEE: u64 = 1_000;

/// Running count of quizzes ever created.
///
/// Singleton record. The allocator bumps it exactly once per successful
/// creation; it never decreases, and a failed creation never moves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCounter {
    /// Identifier handed out by the most recent successful creation.
    pub current_val: U256,
}

impl QuizCounter {
    /// Reserve the next identifier, advancing the counter.
    pub fn allocate(&mut self) -> QuizId {
        self.current_val += U256::one();
        self.current_val
    }
}

/// The central quiz entity.
///
/// Immutable after creation except for the lifetime counters, which the
/// session and payout subsystems advance through their own transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Globally unique identifier, allocator-assigned.
    pub id: QuizId,
    /// Descriptive fields.
    pub details: QuizDetails,
    /// Authored questions, 1 to 50 entries.
    pub questions: Vec<Question>,
    /// Default per-question duration in seconds.
    pub default_duration_secs: u32,
    /// Default maximum points per question.
    pub default_max_points: u32,
    /// Whether per-question timing overrides the defaults.
    pub custom_timing: bool,
    /// The actor that created this quiz. Never the declared value from the
    /// request payload.
    pub creator: Address,
    /// Reward configuration.
    pub reward_settings: RewardSettings,
    /// Logical creation timestamp supplied by the host environment.
    pub created_at: Timestamp,
    /// Sessions spawned from this quiz.
    pub game_sessions_created: u64,
    /// Rewards paid out across all sessions.
    pub total_rewards_distributed: U256,
    /// Fees this quiz generated for the platform.
    pub platform_fees_generated: U256,
    /// Quizzes start inactive; activation belongs to the session subsystem.
    pub is_active: bool,
}

impl Quiz {
    /// Construct a freshly created quiz from a validated request.
    ///
    /// All lifetime counters start at zero and the quiz starts inactive.
    pub fn from_request(
        id: QuizId,
        request: CreateQuizRequest,
        creator: Address,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            details: request.details,
            questions: request.questions,
            default_duration_secs: request.default_duration_secs,
            default_max_points: request.default_max_points,
            custom_timing: request.custom_timing,
            creator,
            reward_settings: request.reward_settings,
            created_at,
            game_sessions_created: 0,
            total_rewards_distributed: U256::zero(),
            platform_fees_generated: U256::zero(),
            is_active: false,
        }
    }
}

/// Aggregated lifetime counters for one creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorStats {
    /// The creator these counters belong to.
    pub creator: Address,
    /// Quizzes this creator has created.
    pub total_quizzes_created: u64,
    /// Game sessions this creator has hosted.
    pub total_games_hosted: u64,
    /// Rewards distributed across this creator's quizzes.
    pub total_rewards_distributed: U256,
    /// Platform fees this creator's quizzes have paid.
    pub total_platform_fees_paid: U256,
    /// Average players per hosted game.
    pub average_game_size: u32,
    /// Refreshed on every recorded action.
    pub last_activity: Timestamp,
}

impl CreatorStats {
    /// Zeroed record for a creator's first recorded action.
    pub fn new(creator: Address, now: Timestamp) -> Self {
        Self {
            creator,
            total_quizzes_created: 0,
            total_games_hosted: 0,
            total_rewards_distributed: U256::zero(),
            total_platform_fees_paid: U256::zero(),
            average_game_size: 0,
            last_activity: now,
        }
    }

    /// Apply one action and refresh `last_activity`.
    pub fn apply(&mut self, action: StatsAction, now: Timestamp) {
        match action {
            StatsAction::QuizCreated => self.total_quizzes_created += 1,
            StatsAction::GameHosted => self.total_games_hosted += 1,
        }
        self.last_activity = now;
    }
}

/// Platform-wide fee configuration.
///
/// Singleton written once by platform initialization. Existing configuration
/// is never overwritten; later changes belong to the admin subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Fee taken from each reward pool, in percent.
    pub fee_percent: u8,
    /// Treasury receiving platform fees; zeroed until an admin assigns one.
    pub treasury: Address,
    /// Smallest fee worth collecting.
    pub min_platform_fee: U256,
    /// Optional upper bound on a single fee. `None` means uncapped.
    pub fee_cap: Option<U256>,
    /// Master switch; fees stay off until an admin enables them.
    pub fees_enabled: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            fee_percent: DEFAULT_FEE_PERCENT,
            treasury: ZERO_ADDRESS,
            min_platform_fee: U256::from(DEFAULT_MIN_PLATFORM_FEE),
            fee_cap: None,
            fees_enabled: false,
        }
    }
}

/// Platform-wide aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    /// Quizzes created across all creators.
    pub total_quizzes_created: u64,
    /// Game sessions hosted across all creators.
    pub total_game_sessions: u64,
    /// Rewards distributed across the whole platform.
    pub total_rewards_distributed: U256,
    /// Fees collected by the platform treasury.
    pub total_platform_fees_collected: U256,
    /// Refreshed on every recorded action.
    pub last_updated: Timestamp,
}

impl PlatformStats {
    /// Zeroed record stamped with the given time.
    pub fn new(now: Timestamp) -> Self {
        Self {
            total_quizzes_created: 0,
            total_game_sessions: 0,
            total_rewards_distributed: U256::zero(),
            total_platform_fees_collected: U256::zero(),
            last_updated: now,
        }
    }

    /// Apply one action and refresh `last_updated`.
    pub fn apply(&mut self, action: StatsAction, now: Timestamp) {
        match action {
            StatsAction::QuizCreated => self.total_quizzes_created += 1,
            StatsAction::GameHosted => self.total_game_sessions += 1,
        }
        self.last_updated = now;
    }
}
