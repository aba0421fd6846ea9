//! # Service Helpers
//!
//! Record codec and staging helpers shared by the API implementation.

use super::QuizRegistryService;
use crate::domain::entities::{CreatorStats, PlatformStats, QuizCounter};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{KeyPrefix, StatsAction};
use crate::ports::outbound::{EventSink, StateStore, TimeSource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{Address, QuizId, Timestamp};

impl<KV, TS, EV> QuizRegistryService<KV, TS, EV>
where
    KV: StateStore,
    TS: TimeSource,
    EV: EventSink,
{
    /// Load and decode a typed record. Absence is `Ok(None)`.
    pub(crate) fn load<T: DeserializeOwned>(&self, key: &[u8]) -> Result<Option<T>, RegistryError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let record = bincode::deserialize(&bytes).map_err(|e| RegistryError::Codec {
                    message: e.to_string(),
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Encode a record for storage.
    pub(crate) fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, RegistryError> {
        bincode::serialize(record).map_err(|e| RegistryError::Codec {
            message: e.to_string(),
        })
    }

    /// Reserve the next quiz identifier.
    ///
    /// Reads the counter singleton (zero when absent) and advances it,
    /// returning the new identifier together with the updated record for
    /// staging. The caller commits the record as part of its batch, so a
    /// creation that fails later consumes no identifier.
    pub(crate) fn allocate_quiz_id(&self) -> Result<(QuizId, QuizCounter), RegistryError> {
        let mut counter = self
            .load::<QuizCounter>(&KeyPrefix::counter_key())?
            .unwrap_or_default();
        let id = counter.allocate();
        Ok((id, counter))
    }

    /// Stage one action onto the creator and platform statistics.
    ///
    /// Both records are loaded (zeroed when absent), advanced, and returned
    /// for the caller to commit in its batch. Nothing is written here.
    pub(crate) fn stage_stats(
        &self,
        creator: Address,
        action: StatsAction,
        now: Timestamp,
    ) -> Result<(CreatorStats, PlatformStats), RegistryError> {
        let mut creator_stats = self
            .load::<CreatorStats>(&KeyPrefix::creator_stats_key(&creator))?
            .unwrap_or_else(|| CreatorStats::new(creator, now));
        creator_stats.apply(action, now);

        let mut platform_stats = self
            .load::<PlatformStats>(&KeyPrefix::platform_stats_key())?
            .unwrap_or_else(|| PlatformStats::new(now));
        platform_stats.apply(action, now);

        Ok((creator_stats, platform_stats))
    }
}
