use super::domain::RiskLevel;
use serde::{Deserialize, Serialize};

/// Number of risk flags shown on a compact summary.
pub const TOP_RISK_FLAG_LIMIT: usize = 2;

/// Categorized concern reported by the analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFinding {
    pub category: String,
    pub level: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFlag {
    pub label: String,
    pub severity: RiskLevel,
}

/// Keeps the most severe non-low findings. Findings with an unrecognized
/// level cannot be ranked and are dropped; ties keep their input order.
pub fn top_risk_flags(findings: &[RiskFinding]) -> Vec<RiskFlag> {
    let mut flags: Vec<RiskFlag> = findings
        .iter()
        .filter_map(|finding| {
            RiskLevel::parse(&finding.level).map(|severity| RiskFlag {
                label: finding.category.clone(),
                severity,
            })
        })
        .filter(|flag| flag.severity != RiskLevel::Low)
        .collect();

    flags.sort_by(|a, b| b.severity.cmp(&a.severity));
    flags.truncate(TOP_RISK_FLAG_LIMIT);
    flags
}
