mod config;
mod rules;
mod status;

pub use config::{
    CompletenessConfig, ALL_STAR_TIER_WEIGHT, BASIC_TIER_WEIGHT, FULL_TIER_WEIGHT,
    MIN_CREDENTIALS, MIN_PORTFOLIO_ITEMS, MIN_REFERENCES,
};
pub use status::{
    badge_style, display_text, is_ready_for_vetting, next_steps, resolve_status,
    should_auto_submit_for_vetting, ROUTE_BASIC_PROFILE, ROUTE_CREDENTIALS, ROUTE_DASHBOARD,
    ROUTE_ID_VERIFICATION, ROUTE_PORTFOLIO, ROUTE_REFERENCES, ROUTE_VETTING,
};

use super::domain::{CompletenessTier, ProfileSnapshot, ProfileStatus, RelatedCounts, UserId};
use serde::{Deserialize, Serialize};

/// Stateless engine applying the tier configuration to profile snapshots.
/// Every exposed method is a pure computation; identical inputs always
/// produce identical results.
pub struct ProfileStatusEngine {
    config: CompletenessConfig,
}

impl ProfileStatusEngine {
    pub fn new(config: CompletenessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompletenessConfig {
        &self.config
    }

    /// Weighted completeness over raw counts and flags. Total over its
    /// input domain: absent or zero-valued data lowers the score instead
    /// of erroring.
    pub fn completeness(&self, user_id: UserId, data: &CompletenessData) -> CompletenessResult {
        let outcome = rules::assess_tiers(data, &self.config);
        CompletenessResult {
            user_id,
            tier: outcome.tier,
            percent: outcome.segments.total(),
            segments: outcome.segments,
            missing: outcome.missing,
        }
    }

    /// Full pipeline: completeness, vetting overlay, CTA route, and
    /// ordered guidance.
    pub fn evaluate(&self, snapshot: &ProfileSnapshot) -> StatusResult {
        let data = CompletenessData::from_snapshot(snapshot);
        let outcome = rules::assess_tiers(&data, &self.config);
        let earned_tier = if outcome.basic_earned {
            Some(outcome.tier)
        } else {
            None
        };
        let status = status::resolve_status(earned_tier, snapshot.vetting_status);
        let cta_route = status::cta_route(status, &outcome.signals);
        let next_steps = status::next_steps(&outcome.missing);

        StatusResult {
            user_id: snapshot.user.id.clone(),
            tier: outcome.tier,
            status,
            percent: outcome.segments.total(),
            segments: outcome.segments,
            missing: outcome.missing,
            cta_route: cta_route.to_string(),
            next_steps,
        }
    }
}

impl Default for ProfileStatusEngine {
    fn default() -> Self {
        Self::new(CompletenessConfig::default())
    }
}

/// Calculator input: the caller-resolved core flag plus related counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessData {
    pub has_core: bool,
    pub counts: RelatedCounts,
}

impl CompletenessData {
    /// Derive the opaque `has_core` flag from a snapshot: confirmed
    /// account plus every basic onboarding field for the role.
    pub fn from_snapshot(snapshot: &ProfileSnapshot) -> Self {
        Self {
            has_core: snapshot.user.account_verified && snapshot.role_profile.core_complete(),
            counts: snapshot.counts,
        }
    }
}

/// Earned weight per tier; zero when the tier is not complete. There is
/// no partial credit inside a tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSegments {
    pub basic: u8,
    pub full: u8,
    pub all_star: u8,
}

impl TierSegments {
    pub fn total(&self) -> u8 {
        self.basic + self.full + self.all_star
    }
}

/// Human-readable unmet requirements, grouped by tier. Each list tracks
/// its own tier's requirements; cross-tier gating lives in the segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRequirements {
    pub basic: Vec<String>,
    pub full: Vec<String>,
    pub all_star: Vec<String>,
}

/// Output of the completeness calculator alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessResult {
    pub user_id: UserId,
    pub tier: CompletenessTier,
    pub percent: u8,
    pub segments: TierSegments,
    pub missing: MissingRequirements,
}

/// Combined engine output consumed by the UI layer: the 4-step progress
/// indicator renders `segments`, the badge renders `status`, and the
/// call-to-action button follows `cta_route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    pub user_id: UserId,
    pub tier: CompletenessTier,
    pub status: ProfileStatus,
    pub percent: u8,
    pub segments: TierSegments,
    pub missing: MissingRequirements,
    pub cta_route: String,
    pub next_steps: Vec<String>,
}
