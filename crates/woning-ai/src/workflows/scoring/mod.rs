//! Derivations applied to an analysis before it reaches the dashboard:
//! budget status and utilization, investment range, top risks, and tiers.

pub mod budget;
pub mod config;
pub mod domain;
pub mod risk;
pub mod tiers;

pub use budget::{BudgetInput, InvestmentRange};
pub use config::{ScoringConfig, TierThresholds};
pub use domain::{BudgetStatus, Condition, Recommendation, RiskLevel, Tier};
pub use risk::{RiskFinding, RiskFlag};

/// Stateless engine applying one [`ScoringConfig`] to analysis fields.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn tier(&self, score: f64) -> Tier {
        tiers::classify(score, &self.config.tier_thresholds)
    }

    pub fn budget_status(&self, input: Option<&BudgetInput>) -> BudgetStatus {
        budget::derive_status(input, self.config.stretch_threshold)
    }

    pub fn budget_utilization(&self, input: Option<&BudgetInput>) -> u32 {
        budget::derive_utilization(input)
    }

    pub fn investment_range(
        &self,
        total_mid: f64,
        reno_low: f64,
        reno_mid: f64,
        reno_high: f64,
    ) -> InvestmentRange {
        budget::derive_investment_range(total_mid, reno_low, reno_mid, reno_high)
    }

    pub fn top_risk_flags(&self, findings: &[RiskFinding]) -> Vec<RiskFlag> {
        risk::top_risk_flags(findings)
    }
}
