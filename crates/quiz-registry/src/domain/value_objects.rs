//! # Domain Value Objects
//!
//! Immutable values carried by quiz records and requests, plus the key
//! namespace used by the state store.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Question, QuizId, U256, ZERO_ADDRESS};

/// How a reward pool is split among winners.
///
/// Only `Custom` carries percentage shares; the other strategies have fixed
/// splits, so an invalid percentage list is unrepresentable for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrizeDistribution {
    /// The entire pool goes to first place.
    WinnerTakesAll,
    /// The pool is split among the top three finishers.
    SplitTopThree,
    /// Creator-defined shares, one per paid rank. Must sum to exactly 100.
    Custom { prize_percentages: Vec<u8> },
}

impl PrizeDistribution {
    /// Sum of the custom percentage shares, widened so long share lists
    /// cannot wrap an 8-bit accumulator. Zero for the fixed strategies.
    pub fn percentage_sum(&self) -> u32 {
        match self {
            PrizeDistribution::Custom { prize_percentages } => {
                prize_percentages.iter().map(|&p| u32::from(p)).sum()
            }
            _ => 0,
        }
    }
}

/// Reward configuration embedded in a quiz.
///
/// When `has_rewards` is false the remaining fields are inert and no
/// validation applies to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSettings {
    /// Whether this quiz pays out rewards at all.
    pub has_rewards: bool,
    /// Token the reward pool is denominated in.
    pub token: Address,
    /// Total reward pool, in token base units.
    pub reward_amount: U256,
    /// Split strategy for the pool.
    pub distribution: PrizeDistribution,
    /// Number of winning ranks.
    pub number_of_winners: u8,
    /// Minimum players required before a rewarded session may run.
    pub min_players: u32,
}

impl RewardSettings {
    /// Settings for a quiz that pays no rewards.
    pub fn none() -> Self {
        Self {
            has_rewards: false,
            token: ZERO_ADDRESS,
            reward_amount: U256::zero(),
            distribution: PrizeDistribution::WinnerTakesAll,
            number_of_winners: 0,
            min_players: 0,
        }
    }
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self::none()
    }
}

/// Descriptive quiz fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDetails {
    /// Display title.
    pub title: String,
    /// Longer description shown on the quiz page.
    pub description: String,
    /// Category label used by discovery surfaces.
    pub category: String,
    /// Whether the quiz is publicly listed.
    pub visibility: bool,
}

/// Creator action recorded by the aggregate statistics updater.
///
/// The set is closed: statistics only move through these recognized actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsAction {
    /// A quiz was created.
    QuizCreated,
    /// A game session was hosted.
    GameHosted,
}

/// Everything a caller supplies to `create_quiz`.
///
/// The invoking actor's identity is NOT part of the request. The host passes
/// it separately, and `declared_creator` must match it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuizRequest {
    /// Descriptive fields.
    pub details: QuizDetails,
    /// Authored questions, 1 to 50 entries.
    pub questions: Vec<Question>,
    /// Reward configuration.
    pub reward_settings: RewardSettings,
    /// Default per-question duration in seconds.
    pub default_duration_secs: u32,
    /// Default maximum points per question.
    pub default_max_points: u32,
    /// Whether per-question timing overrides the defaults.
    pub custom_timing: bool,
    /// Creator the caller claims to be; must equal the invoking actor.
    pub declared_creator: Address,
}

/// Key prefixes for the state store.
///
/// All keys are prefixed to namespace the different record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Quiz record: `q:{id, big-endian}` -> Quiz
    Quiz,
    /// Creator statistics: `s:{address}` -> CreatorStats
    CreatorStats,
    /// Quiz counter singleton: `c:counter` -> QuizCounter
    Counter,
    /// Platform configuration singleton: `p:config` -> PlatformConfig
    PlatformConfig,
    /// Platform statistics singleton: `g:stats` -> PlatformStats
    PlatformStats,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Quiz => b"q:",
            KeyPrefix::CreatorStats => b"s:",
            KeyPrefix::Counter => b"c:",
            KeyPrefix::PlatformConfig => b"p:",
            KeyPrefix::PlatformStats => b"g:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build a quiz key from its identifier.
    pub fn quiz_key(id: QuizId) -> Vec<u8> {
        let mut be = [0u8; 32];
        id.to_big_endian(&mut be);
        KeyPrefix::Quiz.key(&be)
    }

    /// Build a creator statistics key from the creator's address.
    pub fn creator_stats_key(creator: &Address) -> Vec<u8> {
        KeyPrefix::CreatorStats.key(creator)
    }

    /// Get the quiz counter key.
    pub fn counter_key() -> Vec<u8> {
        KeyPrefix::Counter.key(b"counter")
    }

    /// Get the platform configuration key.
    pub fn platform_config_key() -> Vec<u8> {
        KeyPrefix::PlatformConfig.key(b"config")
    }

    /// Get the platform statistics key.
    pub fn platform_stats_key() -> Vec<u8> {
        KeyPrefix::PlatformStats.key(b"stats")
    }
}
