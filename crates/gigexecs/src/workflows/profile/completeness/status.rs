use super::super::domain::{CompletenessTier, ProfileStatus, VettingStatus};
use super::rules::TierSignals;
use super::MissingRequirements;

/// UI route suggestions, one per onboarding area.
pub const ROUTE_BASIC_PROFILE: &str = "/profile/edit";
pub const ROUTE_REFERENCES: &str = "/profile/references";
pub const ROUTE_ID_VERIFICATION: &str = "/profile/identity";
pub const ROUTE_CREDENTIALS: &str = "/profile/credentials";
pub const ROUTE_PORTFOLIO: &str = "/profile/portfolio";
pub const ROUTE_VETTING: &str = "/profile/vetting";
pub const ROUTE_DASHBOARD: &str = "/dashboard";

/// Map an earned tier and the external vetting outcome onto the display
/// status. Total over every input pair; `None` covers profiles whose
/// basic tier could not be determined. A complete tier alone never grants
/// `Verified` or `AllStar`; only a verified vetting outcome does.
pub fn resolve_status(tier: Option<CompletenessTier>, vetting: VettingStatus) -> ProfileStatus {
    match tier {
        None => ProfileStatus::Incomplete,
        Some(CompletenessTier::Basic) => ProfileStatus::Basic,
        Some(CompletenessTier::Full) => {
            if vetting.is_verified() {
                ProfileStatus::Verified
            } else {
                ProfileStatus::Full
            }
        }
        Some(CompletenessTier::AllStar) => {
            if vetting.is_verified() {
                ProfileStatus::AllStar
            } else {
                ProfileStatus::Full
            }
        }
    }
}

/// Style token for the status badge; consumed opaquely by the UI.
pub fn badge_style(status: ProfileStatus) -> &'static str {
    match status {
        ProfileStatus::Incomplete => "badge-muted",
        ProfileStatus::Basic => "badge-info",
        ProfileStatus::Full => "badge-primary",
        ProfileStatus::Verified => "badge-success",
        ProfileStatus::AllStar => "badge-premium",
    }
}

/// Human-facing label for the status badge.
pub fn display_text(status: ProfileStatus) -> &'static str {
    match status {
        ProfileStatus::Incomplete => "Incomplete",
        ProfileStatus::Basic => "Basic",
        ProfileStatus::Full => "Full",
        ProfileStatus::Verified => "Verified",
        ProfileStatus::AllStar => "All-Star",
    }
}

/// Guidance messages in tier order: Basic advice first, All-Star last.
pub fn next_steps(missing: &MissingRequirements) -> Vec<String> {
    let mut steps =
        Vec::with_capacity(missing.basic.len() + missing.full.len() + missing.all_star.len());
    steps.extend(missing.basic.iter().cloned());
    steps.extend(missing.full.iter().cloned());
    steps.extend(missing.all_star.iter().cloned());
    steps
}

/// Gate used by external workflows to decide whether a profile may be
/// queued for staff vetting.
pub fn is_ready_for_vetting(tier: CompletenessTier) -> bool {
    tier != CompletenessTier::Basic
}

/// Thin gate over `is_ready_for_vetting`: only never-submitted profiles
/// are auto-queued.
pub fn should_auto_submit_for_vetting(tier: CompletenessTier, vetting: VettingStatus) -> bool {
    is_ready_for_vetting(tier) && matches!(vetting, VettingStatus::NotSubmitted)
}

pub(crate) fn cta_route(status: ProfileStatus, signals: &TierSignals) -> &'static str {
    match status {
        ProfileStatus::Incomplete => ROUTE_BASIC_PROFILE,
        ProfileStatus::Basic => {
            if signals.references_shortfall > 0 {
                ROUTE_REFERENCES
            } else if signals.needs_id_document {
                ROUTE_ID_VERIFICATION
            } else {
                ROUTE_CREDENTIALS
            }
        }
        ProfileStatus::Full => {
            if signals.needs_portfolio {
                ROUTE_PORTFOLIO
            } else {
                ROUTE_VETTING
            }
        }
        ProfileStatus::Verified => {
            if signals.needs_portfolio {
                ROUTE_PORTFOLIO
            } else {
                ROUTE_DASHBOARD
            }
        }
        ProfileStatus::AllStar => ROUTE_DASHBOARD,
    }
}
