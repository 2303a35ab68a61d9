use super::config::TierThresholds;
use super::domain::Tier;

/// Highest threshold met wins; a score equal to a threshold belongs to the
/// higher tier.
pub fn classify(score: f64, thresholds: &TierThresholds) -> Tier {
    if !score.is_finite() {
        return Tier::NotRecommended;
    }

    if score >= thresholds.excellent {
        Tier::Excellent
    } else if score >= thresholds.strong {
        Tier::Strong
    } else if score >= thresholds.moderate {
        Tier::Moderate
    } else if score >= thresholds.weak {
        Tier::Weak
    } else {
        Tier::NotRecommended
    }
}
