use super::domain::BudgetStatus;
use serde::Serialize;

/// Budget fields of an analysis; `None` at the call site means the property
/// has not been analyzed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetInput {
    pub total_investment: f64,
    pub within_budget: Option<bool>,
    pub budget_remaining: Option<f64>,
}

/// Un-analyzed properties are reported as safe so they are not penalized by
/// budget filters.
pub fn derive_status(input: Option<&BudgetInput>, stretch_threshold: f64) -> BudgetStatus {
    let Some(input) = input else {
        return BudgetStatus::Safe;
    };

    if input.within_budget == Some(false) {
        return BudgetStatus::OverBudget;
    }

    let remaining = input.budget_remaining.unwrap_or(0.0);
    if input.total_investment > 0.0 && remaining / input.total_investment < stretch_threshold {
        return BudgetStatus::Stretch;
    }

    BudgetStatus::Safe
}

/// Percentage of the implied maximum budget (`total + remaining`) consumed by
/// the total investment. Exceeds 100 only when the remaining budget is
/// negative.
pub fn derive_utilization(input: Option<&BudgetInput>) -> u32 {
    let Some(input) = input else {
        return 0;
    };
    if !(input.total_investment > 0.0) {
        return 0;
    }

    let remaining = input.budget_remaining.unwrap_or(0.0);
    let max_budget = input.total_investment + remaining;
    if !(max_budget > 0.0) {
        return 0;
    }

    let pct = (input.total_investment / max_budget * 100.0).round();
    if pct.is_finite() {
        pct as u32
    } else {
        0
    }
}

/// Low/mid/high total investment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRange {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl InvestmentRange {
    pub fn point(value: f64) -> Self {
        Self {
            low: value,
            mid: value,
            high: value,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.low <= self.mid && self.mid <= self.high
    }
}

/// Expands a single investment figure by the renovation estimate's spread.
/// Asking price and fixed buyer costs are treated as certain.
pub fn derive_investment_range(
    total_mid: f64,
    reno_low: f64,
    reno_mid: f64,
    reno_high: f64,
) -> InvestmentRange {
    let spread_low = reno_mid - reno_low;
    let spread_high = reno_high - reno_mid;
    InvestmentRange {
        low: total_mid - spread_low,
        mid: total_mid,
        high: total_mid + spread_high,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::scoring::config::DEFAULT_STRETCH_THRESHOLD;

    fn input(total: f64, within: Option<bool>, remaining: Option<f64>) -> BudgetInput {
        BudgetInput {
            total_investment: total,
            within_budget: within,
            budget_remaining: remaining,
        }
    }

    #[test]
    fn missing_analysis_is_safe_with_zero_utilization() {
        assert_eq!(
            derive_status(None, DEFAULT_STRETCH_THRESHOLD),
            BudgetStatus::Safe
        );
        assert_eq!(derive_utilization(None), 0);
    }

    #[test]
    fn stretch_boundary_sits_at_five_percent() {
        let tight = input(100_000.0, Some(true), Some(4_999.0));
        assert_eq!(
            derive_status(Some(&tight), DEFAULT_STRETCH_THRESHOLD),
            BudgetStatus::Stretch
        );

        let comfortable = input(100_000.0, Some(true), Some(5_001.0));
        assert_eq!(
            derive_status(Some(&comfortable), DEFAULT_STRETCH_THRESHOLD),
            BudgetStatus::Safe
        );
    }

    #[test]
    fn explicit_over_budget_flag_wins() {
        let over = input(480_000.0, Some(false), Some(-30_000.0));
        assert_eq!(
            derive_status(Some(&over), DEFAULT_STRETCH_THRESHOLD),
            BudgetStatus::OverBudget
        );
        assert_eq!(derive_utilization(Some(&over)), 107);
    }

    #[test]
    fn unknown_within_budget_falls_through_to_ratio() {
        let unknown = input(400_000.0, None, Some(50_000.0));
        assert_eq!(
            derive_status(Some(&unknown), DEFAULT_STRETCH_THRESHOLD),
            BudgetStatus::Safe
        );
        let unknown_no_remaining = input(400_000.0, None, None);
        assert_eq!(
            derive_status(Some(&unknown_no_remaining), DEFAULT_STRETCH_THRESHOLD),
            BudgetStatus::Stretch
        );
    }

    #[test]
    fn utilization_rounds_against_implied_budget() {
        let within = input(424_525.0, Some(true), Some(25_475.0));
        assert_eq!(derive_utilization(Some(&within)), 94);
    }

    #[test]
    fn utilization_guards_non_positive_denominators() {
        assert_eq!(derive_utilization(Some(&input(0.0, Some(true), Some(10.0)))), 0);
        assert_eq!(
            derive_utilization(Some(&input(100.0, Some(false), Some(-100.0)))),
            0
        );
        assert_eq!(
            derive_utilization(Some(&input(100.0, Some(false), Some(-250.0)))),
            0
        );
    }

    #[test]
    fn investment_range_uses_renovation_spread() {
        let range = derive_investment_range(450_000.0, 20_000.0, 35_000.0, 60_000.0);
        assert_eq!(range.low, 435_000.0);
        assert_eq!(range.mid, 450_000.0);
        assert_eq!(range.high, 475_000.0);
        assert!(range.is_ordered());

        let point = derive_investment_range(300_000.0, 0.0, 0.0, 0.0);
        assert_eq!(point, InvestmentRange::point(300_000.0));
    }
}
