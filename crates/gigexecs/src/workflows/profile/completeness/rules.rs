use super::super::domain::CompletenessTier;
use super::config::CompletenessConfig;
use super::{CompletenessData, MissingRequirements, TierSegments};

/// Gap flags shared with the status layer so the CTA route can point at
/// the first unmet requirement without re-parsing guidance strings.
pub(crate) struct TierSignals {
    pub references_shortfall: u32,
    pub needs_id_document: bool,
    pub needs_credentials: bool,
    pub needs_portfolio: bool,
}

pub(crate) struct TierOutcome {
    pub tier: CompletenessTier,
    pub basic_earned: bool,
    pub segments: TierSegments,
    pub missing: MissingRequirements,
    pub signals: TierSignals,
}

pub(crate) fn assess_tiers(data: &CompletenessData, config: &CompletenessConfig) -> TierOutcome {
    let counts = &data.counts;
    let mut missing = MissingRequirements::default();

    let basic_earned = data.has_core;
    if !basic_earned {
        missing
            .basic
            .push("Complete basic profile information".to_string());
    }

    let references_shortfall = config.min_references.saturating_sub(counts.references);
    if references_shortfall > 0 {
        missing
            .full
            .push(format!("Add {references_shortfall} more references"));
    }

    let needs_id_document = !counts.has_id_document;
    if needs_id_document {
        missing.full.push("Upload proof of ID document".to_string());
    }

    // Either credential kind satisfies the requirement.
    let needs_credentials = counts.qualifications < config.min_credentials
        && counts.certifications < config.min_credentials;
    if needs_credentials {
        missing
            .full
            .push("Add qualifications or certifications".to_string());
    }

    // Listed even while the Full tier is incomplete.
    let needs_portfolio = counts.portfolio_items < config.min_portfolio_items;
    if needs_portfolio {
        missing.all_star.push("Add portfolio projects".to_string());
    }

    // Tiers unlock strictly in order: no Full credit without Basic, no
    // All-Star credit without Full.
    let full_requirements_met =
        references_shortfall == 0 && !needs_id_document && !needs_credentials;
    let full_earned = basic_earned && full_requirements_met;
    let all_star_earned = full_earned && !needs_portfolio;

    let segments = TierSegments {
        basic: if basic_earned { config.basic_weight } else { 0 },
        full: if full_earned { config.full_weight } else { 0 },
        all_star: if all_star_earned {
            config.all_star_weight
        } else {
            0
        },
    };

    let tier = if all_star_earned {
        CompletenessTier::AllStar
    } else if full_earned {
        CompletenessTier::Full
    } else {
        CompletenessTier::Basic
    };

    TierOutcome {
        tier,
        basic_earned,
        segments,
        missing,
        signals: TierSignals {
            references_shortfall,
            needs_id_document,
            needs_credentials,
            needs_portfolio,
        },
    }
}
