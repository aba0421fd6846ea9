//! # Domain Invariants
//!
//! Pure validation rules for quiz creation. No I/O, no clock, no store:
//! callers check these before touching any state.

use super::errors::RegistryError;
use super::value_objects::{PrizeDistribution, RewardSettings};

/// Fewest questions a quiz may carry.
pub const MIN_QUESTIONS_PER_QUIZ: usize = 1;

/// Most questions a quiz may carry.
pub const MAX_QUESTIONS_PER_QUIZ: usize = 50;

/// Custom prize percentages must sum to exactly this value.
pub const REQUIRED_PERCENTAGE_SUM: u32 = 100;

/// Invariant: a quiz carries between 1 and 50 questions.
pub fn validate_question_count(count: usize) -> Result<(), RegistryError> {
    if !(MIN_QUESTIONS_PER_QUIZ..=MAX_QUESTIONS_PER_QUIZ).contains(&count) {
        return Err(RegistryError::InvalidQuestionCount {
            count,
            min: MIN_QUESTIONS_PER_QUIZ,
            max: MAX_QUESTIONS_PER_QUIZ,
        });
    }
    Ok(())
}

/// Invariant: reward configuration is internally consistent.
///
/// Applies only when rewards are enabled; a quiz without rewards passes
/// regardless of what the other fields hold. For the `Custom` strategy the
/// shares must sum to exactly 100. The fixed strategies carry no percentage
/// rule at all, so `number_of_winners` inconsistencies pass through here.
pub fn validate_reward_settings(settings: &RewardSettings) -> Result<(), RegistryError> {
    if !settings.has_rewards {
        return Ok(());
    }

    if settings.reward_amount.is_zero() {
        return Err(RegistryError::InvalidRewardAmount);
    }

    if settings.min_players == 0 {
        return Err(RegistryError::InvalidMinPlayers);
    }

    if let PrizeDistribution::Custom { .. } = settings.distribution {
        let sum = settings.distribution.percentage_sum();
        if sum != REQUIRED_PERCENTAGE_SUM {
            return Err(RegistryError::InvalidPrizeDistribution { sum });
        }
    }

    Ok(())
}
