use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::workflows::profile::domain::{
    ConsultantProfile, ProfileSnapshot, RateRange, RelatedCounts, RoleProfile, UserData, UserId,
    UserRole, VettingStatus,
};
use crate::workflows::profile::repository::{
    ProfileRecord, ProfileRepository, RepositoryError, VettingQueue, VettingQueueError,
    VettingSubmission,
};
use crate::workflows::profile::{
    profile_router, CompletenessConfig, CompletenessData, ProfileStatusEngine,
    ProfileStatusService,
};

pub(super) fn user(suffix: &str) -> UserData {
    UserData {
        id: UserId(format!("user-{suffix}")),
        account_verified: true,
        role: UserRole::Consultant,
        created_at: Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
        updated_at: Utc
            .with_ymd_and_hms(2025, 7, 15, 17, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn consultant_profile() -> RoleProfile {
    RoleProfile::Consultant(ConsultantProfile {
        headline: Some("Fractional CTO".to_string()),
        bio: Some("Twenty years scaling engineering teams.".to_string()),
        rate: Some(RateRange {
            currency: "USD".to_string(),
            min: 120,
            max: 180,
        }),
    })
}

/// Counts that satisfy the Full tier but not All-Star.
pub(super) fn full_counts() -> RelatedCounts {
    RelatedCounts {
        references: 2,
        has_id_document: true,
        qualifications: 1,
        certifications: 0,
        portfolio_items: 0,
        work_experience: 3,
    }
}

pub(super) fn all_star_counts() -> RelatedCounts {
    RelatedCounts {
        portfolio_items: 1,
        ..full_counts()
    }
}

pub(super) fn snapshot(
    suffix: &str,
    counts: RelatedCounts,
    vetting: VettingStatus,
) -> ProfileSnapshot {
    ProfileSnapshot {
        user: user(suffix),
        role_profile: consultant_profile(),
        counts,
        vetting_status: vetting,
    }
}

/// A freshly registered consultant: confirmed account, nothing else.
pub(super) fn sparse_snapshot(suffix: &str) -> ProfileSnapshot {
    ProfileSnapshot {
        user: user(suffix),
        role_profile: RoleProfile::Consultant(ConsultantProfile::default()),
        counts: RelatedCounts::default(),
        vetting_status: VettingStatus::NotSubmitted,
    }
}

pub(super) fn completeness_config() -> CompletenessConfig {
    CompletenessConfig::default()
}

pub(super) fn engine() -> ProfileStatusEngine {
    ProfileStatusEngine::new(completeness_config())
}

pub(super) fn data(has_core: bool, counts: RelatedCounts) -> CompletenessData {
    CompletenessData { has_core, counts }
}

pub(super) fn build_service() -> (
    ProfileStatusService<MemoryRepository, MemoryVettingQueue>,
    Arc<MemoryRepository>,
    Arc<MemoryVettingQueue>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let vetting = Arc::new(MemoryVettingQueue::default());
    let service =
        ProfileStatusService::new(repository.clone(), vetting.clone(), completeness_config());
    (service, repository, vetting)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryRepository {
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
        guard.insert(record.snapshot.user.id.clone(), record);
        Ok(())
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
pub(super) struct MemoryVettingQueue {
    events: Arc<Mutex<Vec<VettingSubmission>>>,
}

impl MemoryVettingQueue {
    pub(super) fn events(&self) -> Vec<VettingSubmission> {
        self.events.lock().expect("vetting mutex poisoned").clone()
    }
}

impl VettingQueue for MemoryVettingQueue {
    fn submit(&self, submission: VettingSubmission) -> Result<(), VettingQueueError> {
        self.events
            .lock()
            .expect("vetting mutex poisoned")
            .push(submission);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl ProfileRepository for ConflictRepository {
    fn insert(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Ok(None)
    }

    fn awaiting_vetting(&self, _limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn awaiting_vetting(&self, _limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct FailingVettingQueue;

impl VettingQueue for FailingVettingQueue {
    fn submit(&self, _submission: VettingSubmission) -> Result<(), VettingQueueError> {
        Err(VettingQueueError::Transport("queue offline".to_string()))
    }
}

pub(super) fn profile_router_with_service(
    service: ProfileStatusService<MemoryRepository, MemoryVettingQueue>,
) -> axum::Router {
    profile_router(Arc::new(service))
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 16)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
