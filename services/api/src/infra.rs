use gigexecs::workflows::profile::{
    CompletenessConfig, ProfileRecord, ProfileRepository, RepositoryError, UserId, VettingQueue,
    VettingQueueError, VettingStatus, VettingSubmission,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_completeness_config() -> CompletenessConfig {
    CompletenessConfig::default()
}

/// Accepts the staff-facing vetting status names; anything else becomes
/// `unknown`, which the engine treats as "not verified".
pub(crate) fn parse_vetting(raw: &str) -> Result<VettingStatus, String> {
    Ok(match raw.trim().to_ascii_lowercase().as_str() {
        "not_submitted" => VettingStatus::NotSubmitted,
        "pending" => VettingStatus::Pending,
        "in_progress" => VettingStatus::InProgress,
        "verified" => VettingStatus::Verified,
        "rejected" => VettingStatus::Rejected,
        _ => VettingStatus::Unknown,
    })
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.snapshot.user.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.snapshot.user.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.snapshot.user.id) {
            guard.insert(record.snapshot.user.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn awaiting_vetting(&self, limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.snapshot.vetting_status == VettingStatus::Pending)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryVettingQueue {
    events: Arc<Mutex<Vec<VettingSubmission>>>,
}

impl InMemoryVettingQueue {
    pub(crate) fn events(&self) -> Vec<VettingSubmission> {
        self.events.lock().expect("vetting mutex poisoned").clone()
    }
}

impl VettingQueue for InMemoryVettingQueue {
    fn submit(&self, submission: VettingSubmission) -> Result<(), VettingQueueError> {
        self.events
            .lock()
            .expect("vetting mutex poisoned")
            .push(submission);
        Ok(())
    }
}
