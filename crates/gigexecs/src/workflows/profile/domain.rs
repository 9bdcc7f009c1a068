use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for marketplace users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Population a user belongs to. Internal staff never reach this engine;
/// their decisions arrive through `VettingStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Consultant,
}

/// Account-level record supplied fresh on every invocation by the
/// data-fetching layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: UserId,
    pub account_verified: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Advertised hourly-rate band. The `min < max` invariant is enforced by
/// the onboarding forms upstream, not revalidated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRange {
    pub currency: String,
    pub min: u32,
    pub max: u32,
}

/// Consultant onboarding fields; each is either present or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantProfile {
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub rate: Option<RateRange>,
}

/// Client onboarding fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub company_name: Option<String>,
    pub industry: Option<String>,
}

/// Role-specific profile, modeled as an explicit variant so an absent
/// record is distinguishable from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleProfile {
    Client(ClientProfile),
    Consultant(ConsultantProfile),
    None,
}

impl RoleProfile {
    /// Whether every basic onboarding field for the role is filled in.
    pub fn core_complete(&self) -> bool {
        match self {
            RoleProfile::Client(profile) => {
                has_text(&profile.company_name) && has_text(&profile.industry)
            }
            RoleProfile::Consultant(profile) => {
                has_text(&profile.headline) && has_text(&profile.bio) && profile.rate.is_some()
            }
            RoleProfile::None => false,
        }
    }
}

fn has_text(field: &Option<String>) -> bool {
    field
        .as_deref()
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}

/// Counts of related records gathered by role-aware queries upstream.
/// Non-negative by construction; zeroes simply lower the computed tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCounts {
    pub references: u32,
    pub has_id_document: bool,
    pub qualifications: u32,
    pub certifications: u32,
    pub portfolio_items: u32,
    pub work_experience: u32,
}

/// Outcome of the staff vetting workflow. The engine only reads this;
/// every value other than `Verified` behaves as "not verified".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VettingStatus {
    #[default]
    NotSubmitted,
    Pending,
    InProgress,
    Verified,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl VettingStatus {
    pub const fn is_verified(self) -> bool {
        matches!(self, VettingStatus::Verified)
    }

    pub const fn label(self) -> &'static str {
        match self {
            VettingStatus::NotSubmitted => "not_submitted",
            VettingStatus::Pending => "pending",
            VettingStatus::InProgress => "in_progress",
            VettingStatus::Verified => "verified",
            VettingStatus::Rejected => "rejected",
            VettingStatus::Unknown => "unknown",
        }
    }
}

/// Everything the data-fetching layer gathers for one user in a single
/// pass: account record, role profile, related-entity counts, and the
/// latest vetting outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub user: UserData,
    pub role_profile: RoleProfile,
    pub counts: RelatedCounts,
    pub vetting_status: VettingStatus,
}

impl ProfileSnapshot {
    pub fn user_id(&self) -> &UserId {
        &self.user.id
    }
}

/// Cumulative completeness level. `Basic` is the floor label even when no
/// tier has been earned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessTier {
    Basic,
    Full,
    AllStar,
}

impl CompletenessTier {
    pub const fn label(self) -> &'static str {
        match self {
            CompletenessTier::Basic => "basic",
            CompletenessTier::Full => "full",
            CompletenessTier::AllStar => "all_star",
        }
    }
}

/// Tier combined with the vetting outcome, as displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Incomplete,
    Basic,
    Full,
    Verified,
    AllStar,
}

impl ProfileStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileStatus::Incomplete => "incomplete",
            ProfileStatus::Basic => "basic",
            ProfileStatus::Full => "full",
            ProfileStatus::Verified => "verified",
            ProfileStatus::AllStar => "all_star",
        }
    }
}
