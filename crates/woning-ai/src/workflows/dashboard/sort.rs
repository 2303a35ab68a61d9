use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::summary::PropertySummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    ScoreDesc,
    PriceAsc,
    PriceDesc,
    InvestmentAsc,
    DateDesc,
}

impl SortOption {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ScoreDesc,
            Self::PriceAsc,
            Self::PriceDesc,
            Self::InvestmentAsc,
            Self::DateDesc,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ScoreDesc => "score_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::InvestmentAsc => "investment_asc",
            Self::DateDesc => "date_desc",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ScoreDesc => "Score (hoogste eerst)",
            Self::PriceAsc => "Prijs (laagste eerst)",
            Self::PriceDesc => "Prijs (hoogste eerst)",
            Self::InvestmentAsc => "Investering (laagste eerst)",
            Self::DateDesc => "Nieuwste eerst",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|option| option.key().eq_ignore_ascii_case(value))
    }

    fn compare(self, a: &PropertySummary, b: &PropertySummary) -> Ordering {
        match self {
            Self::ScoreDesc => b.match_score.total_cmp(&a.match_score),
            Self::PriceAsc => a.asking_price.total_cmp(&b.asking_price),
            Self::PriceDesc => b.asking_price.total_cmp(&a.asking_price),
            Self::InvestmentAsc => a.total_investment_mid.total_cmp(&b.total_investment_mid),
            Self::DateDesc => b
                .days_on_market
                .unwrap_or(0)
                .cmp(&a.days_on_market.unwrap_or(0)),
        }
    }
}

/// Returns a sorted copy; equal keys keep their input order.
pub fn sort_properties(properties: &[PropertySummary], sort_by: SortOption) -> Vec<PropertySummary> {
    let mut sorted = properties.to_vec();
    sorted.sort_by(|a, b| sort_by.compare(a, b));
    sorted
}
