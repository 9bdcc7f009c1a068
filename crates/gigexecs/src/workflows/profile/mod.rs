//! Profile progression: completeness tiers, the vetting overlay, and the
//! guidance surfaced to marketplace users.
//!
//! The engine itself is a pure leaf: callers gather a snapshot, invoke it
//! synchronously, and render the result. The service and router wrap it
//! with storage and the auto-submit side effect.

pub(crate) mod completeness;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use completeness::{
    badge_style, display_text, is_ready_for_vetting, next_steps, resolve_status,
    should_auto_submit_for_vetting, CompletenessConfig, CompletenessData, CompletenessResult,
    MissingRequirements, ProfileStatusEngine, StatusResult, TierSegments, ALL_STAR_TIER_WEIGHT,
    BASIC_TIER_WEIGHT, FULL_TIER_WEIGHT, MIN_CREDENTIALS, MIN_PORTFOLIO_ITEMS, MIN_REFERENCES,
    ROUTE_BASIC_PROFILE, ROUTE_CREDENTIALS, ROUTE_DASHBOARD, ROUTE_ID_VERIFICATION,
    ROUTE_PORTFOLIO, ROUTE_REFERENCES, ROUTE_VETTING,
};
pub use domain::{
    ClientProfile, CompletenessTier, ConsultantProfile, ProfileSnapshot, ProfileStatus, RateRange,
    RelatedCounts, RoleProfile, UserData, UserId, UserRole, VettingStatus,
};
pub use repository::{
    ProfileRecord, ProfileRepository, ProfileStatusView, RepositoryError, VettingQueue,
    VettingQueueError, VettingSubmission,
};
pub use router::profile_router;
pub use service::{ProfileServiceError, ProfileStatusService};
