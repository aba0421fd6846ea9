//! # Quiz Registry API Implementation
//!
//! Implements the QuizRegistryApi trait: the creation transaction, the
//! statistics upsert, platform initialization, and the read surface.

use super::*;
use crate::domain::entities::{CreatorStats, PlatformConfig, PlatformStats, Quiz, QuizCounter};
use crate::domain::errors::RegistryError;
use crate::domain::invariants::{validate_question_count, validate_reward_settings};
use crate::domain::value_objects::{CreateQuizRequest, KeyPrefix, StatsAction};
use crate::events::QuizCreatedPayload;
use crate::ports::inbound::QuizRegistryApi;
use crate::ports::outbound::BatchOperation;
use shared_types::{Address, QuizId, U256};

impl<KV, TS, EV> QuizRegistryApi for QuizRegistryService<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    fn create_quiz(
        &mut self,
        request: CreateQuizRequest,
        caller: Address,
    ) -> Result<Quiz, RegistryError> {
        // Preconditions run in a fixed order before anything is staged;
        // the first failure aborts with the store untouched.

        // 1. The caller must be who the request claims.
        if request.declared_creator != caller {
            return Err(RegistryError::UnauthorizedCreator {
                declared: request.declared_creator,
                caller,
            });
        }

        // 2. Question count within bounds.
        validate_question_count(request.questions.len())?;

        // 3. Reward settings internally consistent.
        validate_reward_settings(&request.reward_settings)?;

        // One clock read stamps every record this transaction touches.
        let now = self.time_source.now();

        let (new_id, counter) = self.allocate_quiz_id()?;
        let quiz = Quiz::from_request(new_id, request, caller, now);
        let (creator_stats, platform_stats) =
            self.stage_stats(caller, StatsAction::QuizCreated, now)?;

        // All four records commit together or not at all. The advanced
        // counter rides in the same batch, so a rejected batch hands out
        // the same identifier next time.
        let operations = vec![
            BatchOperation::put(KeyPrefix::counter_key(), Self::encode(&counter)?),
            BatchOperation::put(KeyPrefix::quiz_key(new_id), Self::encode(&quiz)?),
            BatchOperation::put(
                KeyPrefix::creator_stats_key(&caller),
                Self::encode(&creator_stats)?,
            ),
            BatchOperation::put(
                KeyPrefix::platform_stats_key(),
                Self::encode(&platform_stats)?,
            ),
        ];
        self.store.atomic_batch_write(operations)?;

        // The records are durable; only now does the event become visible.
        self.event_sink.append(QuizCreatedPayload {
            title: quiz.details.title.clone(),
            creator: caller,
            timestamp: now,
        });

        tracing::info!(
            "[qp-registry] ✓ Quiz #{} created by 0x{} ({} questions)",
            quiz.id,
            hex::encode(caller),
            quiz.questions.len()
        );

        Ok(quiz)
    }

    fn update_creator_stats(
        &mut self,
        creator: Address,
        action: StatsAction,
    ) -> Result<CreatorStats, RegistryError> {
        let now = self.time_source.now();
        let (creator_stats, platform_stats) = self.stage_stats(creator, action, now)?;

        let operations = vec![
            BatchOperation::put(
                KeyPrefix::creator_stats_key(&creator),
                Self::encode(&creator_stats)?,
            ),
            BatchOperation::put(
                KeyPrefix::platform_stats_key(),
                Self::encode(&platform_stats)?,
            ),
        ];
        self.store.atomic_batch_write(operations)?;

        tracing::debug!(
            "[qp-registry] Recorded {:?} for 0x{}",
            action,
            hex::encode(creator)
        );

        Ok(creator_stats)
    }

    fn initialize_platform_config(&mut self) -> Result<bool, RegistryError> {
        // Existing configuration is never overwritten; repeat calls no-op.
        if self
            .load::<PlatformConfig>(&KeyPrefix::platform_config_key())?
            .is_some()
        {
            tracing::debug!("[qp-registry] Platform already initialized, nothing to do");
            return Ok(false);
        }

        let now = self.time_source.now();
        let config = PlatformConfig::default();

        let mut operations = vec![BatchOperation::put(
            KeyPrefix::platform_config_key(),
            Self::encode(&config)?,
        )];

        // Statistics may already exist if creations ran before the host
        // initialized the platform; accrued counters are kept.
        if self
            .load::<PlatformStats>(&KeyPrefix::platform_stats_key())?
            .is_none()
        {
            operations.push(BatchOperation::put(
                KeyPrefix::platform_stats_key(),
                Self::encode(&PlatformStats::new(now))?,
            ));
        }

        self.store.atomic_batch_write(operations)?;

        tracing::info!(
            "[qp-registry] ✓ Platform initialized (fee {}%, fees disabled)",
            config.fee_percent
        );

        Ok(true)
    }

    fn get_quiz(&self, id: QuizId) -> Result<Option<Quiz>, RegistryError> {
        self.load(&KeyPrefix::quiz_key(id))
    }

    fn get_creator_stats(&self, creator: Address) -> Result<Option<CreatorStats>, RegistryError> {
        self.load(&KeyPrefix::creator_stats_key(&creator))
    }

    fn get_platform_config(&self) -> Result<Option<PlatformConfig>, RegistryError> {
        self.load(&KeyPrefix::platform_config_key())
    }

    fn get_platform_stats(&self) -> Result<Option<PlatformStats>, RegistryError> {
        self.load(&KeyPrefix::platform_stats_key())
    }

    fn total_quizzes(&self) -> Result<U256, RegistryError> {
        let counter = self
            .load::<QuizCounter>(&KeyPrefix::counter_key())?
            .unwrap_or_default();
        Ok(counter.current_val)
    }

    fn quiz_exists(&self, id: QuizId) -> bool {
        self.store
            .exists(&KeyPrefix::quiz_key(id))
            .unwrap_or(false)
    }
}
