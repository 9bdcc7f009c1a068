use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::completeness::{should_auto_submit_for_vetting, CompletenessConfig, ProfileStatusEngine};
use super::domain::{ProfileSnapshot, UserId, VettingStatus};
use super::repository::{
    ProfileRecord, ProfileRepository, RepositoryError, VettingQueue, VettingQueueError,
    VettingSubmission,
};

/// Service composing the repository, the status engine, and the vetting
/// queue. The engine stays pure; every side effect lives here.
pub struct ProfileStatusService<R, Q> {
    repository: Arc<R>,
    vetting: Arc<Q>,
    engine: Arc<ProfileStatusEngine>,
}

impl<R, Q> ProfileStatusService<R, Q>
where
    R: ProfileRepository + 'static,
    Q: VettingQueue + 'static,
{
    pub fn new(repository: Arc<R>, vetting: Arc<Q>, config: CompletenessConfig) -> Self {
        Self {
            repository,
            vetting,
            engine: Arc::new(ProfileStatusEngine::new(config)),
        }
    }

    /// Store or replace a snapshot, persist its evaluation, and run the
    /// auto-submit gate.
    pub fn upsert(&self, snapshot: ProfileSnapshot) -> Result<ProfileRecord, ProfileServiceError> {
        let mut record = ProfileRecord {
            result: self.engine.evaluate(&snapshot),
            snapshot,
            evaluated_at: Utc::now(),
        };
        self.maybe_submit_for_vetting(&mut record)?;

        let existing = self.repository.fetch(record.snapshot.user_id())?;
        match existing {
            Some(_) => {
                self.repository.update(record.clone())?;
                Ok(record)
            }
            None => Ok(self.repository.insert(record)?),
        }
    }

    /// Fetch the stored record and its current evaluation.
    pub fn status(&self, user_id: &UserId) -> Result<ProfileRecord, ProfileServiceError> {
        let record = self
            .repository
            .fetch(user_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Re-evaluate the stored snapshot and run the auto-submit gate.
    pub fn refresh(&self, user_id: &UserId) -> Result<ProfileRecord, ProfileServiceError> {
        let mut record = self
            .repository
            .fetch(user_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.result = self.engine.evaluate(&record.snapshot);
        record.evaluated_at = Utc::now();
        self.maybe_submit_for_vetting(&mut record)?;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Apply a staff vetting decision to the stored snapshot. The engine
    /// never writes vetting state; decisions always arrive through here.
    pub fn record_vetting_decision(
        &self,
        user_id: &UserId,
        decision: VettingStatus,
    ) -> Result<ProfileRecord, ProfileServiceError> {
        let mut record = self
            .repository
            .fetch(user_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.snapshot.vetting_status = decision;
        record.result = self.engine.evaluate(&record.snapshot);
        record.evaluated_at = Utc::now();
        self.repository.update(record.clone())?;
        Ok(record)
    }

    fn maybe_submit_for_vetting(
        &self,
        record: &mut ProfileRecord,
    ) -> Result<(), ProfileServiceError> {
        if !should_auto_submit_for_vetting(record.result.tier, record.snapshot.vetting_status) {
            return Ok(());
        }

        let mut details = BTreeMap::new();
        details.insert("tier".to_string(), record.result.tier.label().to_string());
        details.insert("percent".to_string(), record.result.percent.to_string());
        self.vetting.submit(VettingSubmission {
            user_id: record.snapshot.user.id.clone(),
            tier: record.result.tier,
            details,
        })?;

        record.snapshot.vetting_status = VettingStatus::Pending;
        record.result = self.engine.evaluate(&record.snapshot);
        info!(
            user_id = %record.snapshot.user.id.0,
            tier = record.result.tier.label(),
            "profile queued for vetting"
        );
        Ok(())
    }
}

/// Error raised by the profile status service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Vetting(#[from] VettingQueueError),
}
