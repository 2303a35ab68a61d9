use serde::{Deserialize, Serialize};

/// Qualitative band a match score falls into, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Strong,
    Moderate,
    Weak,
    NotRecommended,
}

impl Tier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Strong,
            Self::Moderate,
            Self::Weak,
            Self::NotRecommended,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::NotRecommended => "not_recommended",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Uitstekende match",
            Self::Strong => "Sterke match",
            Self::Moderate => "Redelijke match",
            Self::Weak => "Zwakke match",
            Self::NotRecommended => "Niet aanbevolen",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    VisitImmediately,
    WorthVisiting,
    NeedsResearch,
    Skip,
}

impl Recommendation {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::VisitImmediately,
            Self::WorthVisiting,
            Self::NeedsResearch,
            Self::Skip,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::VisitImmediately => "visit_immediately",
            Self::WorthVisiting => "worth_visiting",
            Self::NeedsResearch => "needs_research",
            Self::Skip => "skip",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VisitImmediately => "Direct bezichtigen",
            Self::WorthVisiting => "Bezichtigen",
            Self::NeedsResearch => "Nader onderzoek",
            Self::Skip => "Overslaan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|recommendation| recommendation.key().eq_ignore_ascii_case(value))
    }
}

/// Ordinal risk scale; the derived ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Laag",
            Self::Medium => "Gemiddeld",
            Self::High => "Hoog",
        }
    }

    pub const fn severity(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub fn is_within(self, ceiling: RiskLevel) -> bool {
        self.severity() <= ceiling.severity()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.key().eq_ignore_ascii_case(value))
    }
}

/// How close the total investment sits to the buyer's maximum budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Safe,
    Stretch,
    OverBudget,
}

impl BudgetStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Safe, Self::Stretch, Self::OverBudget]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Stretch => "stretch",
            Self::OverBudget => "over_budget",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Binnen budget",
            Self::Stretch => "Krap binnen budget",
            Self::OverBudget => "Boven budget",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.key().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
    Bad,
}

impl Condition {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Good,
            Self::Fair,
            Self::Poor,
            Self::Bad,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Bad => "bad",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Uitstekend",
            Self::Good => "Goed",
            Self::Fair => "Redelijk",
            Self::Poor => "Matig",
            Self::Bad => "Slecht",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|condition| condition.key().eq_ignore_ascii_case(value))
    }
}
