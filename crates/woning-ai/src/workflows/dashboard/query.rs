//! Dashboard state carried in the URL query string.
//!
//! Serialization is canonical and minimal: a key is written only when its
//! value differs from the default, so the default state encodes to an empty
//! string and `parse(serialize(state)) == state` for every state `parse` can
//! produce. Unknown keys are ignored and malformed values fall back to their
//! defaults. Single-valued keys take their first occurrence.

use std::collections::HashSet;

use url::form_urlencoded;

use super::filters::{normalize_cities, FilterState};
use super::sort::SortOption;
use crate::workflows::scoring::{BudgetStatus, RiskLevel, Tier};

pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";
pub const MIN_SCORE_KEY: &str = "minScore";
pub const MAX_RISK_KEY: &str = "maxRisk";
pub const CITY_KEY: &str = "city";
pub const TIER_KEY: &str = "tier";
pub const BUDGET_KEY: &str = "budget";
pub const STARRED_KEY: &str = "starred";
pub const SORT_KEY: &str = "sort";
pub const PAGE_KEY: &str = "page";

const STARRED_VALUE: &str = "1";

/// Filters plus the 1-based page they are viewed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub filters: FilterState,
    pub page: usize,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            page: 1,
        }
    }
}

/// Codec bound to the configured default sort order, which is omitted from
/// serialized queries and assumed when a query carries no `sort` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCodec {
    default_sort: SortOption,
}

impl QueryCodec {
    pub const fn new(default_sort: SortOption) -> Self {
        Self { default_sort }
    }

    pub fn default_sort(&self) -> SortOption {
        self.default_sort
    }

    pub fn defaults(&self) -> DashboardQuery {
        DashboardQuery {
            filters: FilterState {
                sort_by: self.default_sort,
                ..FilterState::default()
            },
            page: 1,
        }
    }

    /// Accepts the raw query with or without its leading `?`.
    pub fn parse(&self, query: &str) -> DashboardQuery {
        let query = query.strip_prefix('?').unwrap_or(query);
        self.parse_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    pub fn parse_pairs<I, K, V>(&self, pairs: I) -> DashboardQuery
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = self.defaults();
        let mut seen: HashSet<&'static str> = HashSet::new();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                MIN_PRICE_KEY if seen.insert(MIN_PRICE_KEY) => {
                    query.filters.min_price = value.parse().ok();
                }
                MAX_PRICE_KEY if seen.insert(MAX_PRICE_KEY) => {
                    query.filters.max_price = value.parse().ok();
                }
                MIN_SCORE_KEY if seen.insert(MIN_SCORE_KEY) => {
                    query.filters.min_score = value.parse().unwrap_or(0);
                }
                MAX_RISK_KEY if seen.insert(MAX_RISK_KEY) => {
                    query.filters.max_risk = RiskLevel::parse(value);
                }
                STARRED_KEY if seen.insert(STARRED_KEY) => {
                    query.filters.starred_only = value == STARRED_VALUE;
                }
                SORT_KEY if seen.insert(SORT_KEY) => {
                    query.filters.sort_by = SortOption::parse(value).unwrap_or(self.default_sort);
                }
                PAGE_KEY if seen.insert(PAGE_KEY) => {
                    query.page = value.parse().ok().filter(|page| *page >= 1).unwrap_or(1);
                }
                CITY_KEY => {
                    query.filters.cities.extend(normalize_cities([value]));
                }
                TIER_KEY => {
                    query.filters.tiers.extend(Tier::parse(value));
                }
                BUDGET_KEY => {
                    query.filters.budget_statuses.extend(BudgetStatus::parse(value));
                }
                _ => {}
            }
        }

        query
    }

    /// Non-default entries in a fixed key order.
    pub fn pairs(&self, query: &DashboardQuery) -> Vec<(String, String)> {
        let filters = &query.filters;
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((key.to_string(), value));

        if let Some(min_price) = filters.min_price {
            push(MIN_PRICE_KEY, min_price.to_string());
        }
        if let Some(max_price) = filters.max_price {
            push(MAX_PRICE_KEY, max_price.to_string());
        }
        if filters.min_score > 0 {
            push(MIN_SCORE_KEY, filters.min_score.to_string());
        }
        if let Some(max_risk) = filters.max_risk {
            push(MAX_RISK_KEY, max_risk.key().to_string());
        }
        for city in &filters.cities {
            push(CITY_KEY, city.clone());
        }
        for tier in &filters.tiers {
            push(TIER_KEY, tier.key().to_string());
        }
        for status in &filters.budget_statuses {
            push(BUDGET_KEY, status.key().to_string());
        }
        if filters.starred_only {
            push(STARRED_KEY, STARRED_VALUE.to_string());
        }
        if filters.sort_by != self.default_sort {
            push(SORT_KEY, filters.sort_by.key().to_string());
        }
        if query.page > 1 {
            push(PAGE_KEY, query.page.to_string());
        }

        pairs
    }

    pub fn serialize(&self, query: &DashboardQuery) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs(query))
            .finish()
    }
}

pub fn parse_filters(query: &str) -> FilterState {
    QueryCodec::default().parse(query).filters
}

pub fn parse_filter_pairs<I, K, V>(pairs: I) -> FilterState
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    QueryCodec::default().parse_pairs(pairs).filters
}

pub fn filter_pairs(filters: &FilterState) -> Vec<(String, String)> {
    QueryCodec::default().pairs(&DashboardQuery {
        filters: filters.clone(),
        page: 1,
    })
}

pub fn serialize_filters(filters: &FilterState) -> String {
    QueryCodec::default().serialize(&DashboardQuery {
        filters: filters.clone(),
        page: 1,
    })
}
