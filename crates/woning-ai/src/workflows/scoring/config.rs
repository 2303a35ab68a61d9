use crate::workflows::dashboard::SortOption;
use serde::{Deserialize, Serialize};

/// Share of the total investment that must remain in the budget for a
/// property to count as comfortably affordable.
pub const DEFAULT_STRETCH_THRESHOLD: f64 = 0.05;

/// Number of summaries on one dashboard page.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Lower bounds (inclusive) of the four upper tiers; anything below `weak`
/// is not recommended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub excellent: f64,
    pub strong: f64,
    pub moderate: f64,
    pub weak: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            strong: 70.0,
            moderate: 50.0,
            weak: 25.0,
        }
    }
}

impl TierThresholds {
    /// Thresholds must be finite and strictly descending.
    pub fn is_descending(&self) -> bool {
        let values = [self.excellent, self.strong, self.moderate, self.weak];
        values.iter().all(|value| value.is_finite())
            && values.windows(2).all(|pair| pair[0] > pair[1])
    }
}

/// Scoring and ranking knobs shared by the budget, tier, and sort stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub stretch_threshold: f64,
    pub tier_thresholds: TierThresholds,
    pub default_sort: SortOption,
    pub page_size: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stretch_threshold: DEFAULT_STRETCH_THRESHOLD,
            tier_thresholds: TierThresholds::default(),
            default_sort: SortOption::ScoreDesc,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
