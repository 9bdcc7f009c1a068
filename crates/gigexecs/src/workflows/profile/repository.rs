use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::completeness::StatusResult;
use super::domain::{CompletenessTier, ProfileSnapshot, UserId};

/// Repository record pairing a stored snapshot with its latest evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub snapshot: ProfileSnapshot,
    pub result: StatusResult,
    pub evaluated_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn status_view(&self) -> ProfileStatusView {
        ProfileStatusView {
            user_id: self.snapshot.user.id.clone(),
            status: self.result.status.label(),
            tier: self.result.tier.label(),
            percent: self.result.percent,
            cta_route: self.result.cta_route.clone(),
            next_steps: self.result.next_steps.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in
/// isolation.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError>;
    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError>;
    fn awaiting_vetting(&self, limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired when a profile crosses the vetting-readiness gate.
pub trait VettingQueue: Send + Sync {
    fn submit(&self, submission: VettingSubmission) -> Result<(), VettingQueueError>;
}

/// Payload handed to the staff vetting workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VettingSubmission {
    pub user_id: UserId,
    pub tier: CompletenessTier,
    pub details: BTreeMap<String, String>,
}

/// Vetting queue dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum VettingQueueError {
    #[error("vetting queue unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a profile's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileStatusView {
    pub user_id: UserId,
    pub status: &'static str,
    pub tier: &'static str,
    pub percent: u8,
    pub cta_route: String,
    pub next_steps: Vec<String>,
}
