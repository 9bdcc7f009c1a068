use serde::{Deserialize, Serialize};

/// Production tier weights. Tiers are all-or-nothing, so the reachable
/// percent values are exactly 0, 40, 80, and 100.
pub const BASIC_TIER_WEIGHT: u8 = 40;
pub const FULL_TIER_WEIGHT: u8 = 40;
pub const ALL_STAR_TIER_WEIGHT: u8 = 20;

/// Production thresholds for the Full and All-Star tiers.
pub const MIN_REFERENCES: u32 = 2;
pub const MIN_CREDENTIALS: u32 = 1;
pub const MIN_PORTFOLIO_ITEMS: u32 = 1;

/// Tier weights and thresholds applied by the completeness calculator.
/// Passed in as one immutable value so tests can exercise alternative
/// threshold sets without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessConfig {
    pub basic_weight: u8,
    pub full_weight: u8,
    pub all_star_weight: u8,
    pub min_references: u32,
    pub min_credentials: u32,
    pub min_portfolio_items: u32,
}

impl Default for CompletenessConfig {
    fn default() -> Self {
        Self {
            basic_weight: BASIC_TIER_WEIGHT,
            full_weight: FULL_TIER_WEIGHT,
            all_star_weight: ALL_STAR_TIER_WEIGHT,
            min_references: MIN_REFERENCES,
            min_credentials: MIN_CREDENTIALS,
            min_portfolio_items: MIN_PORTFOLIO_ITEMS,
        }
    }
}
