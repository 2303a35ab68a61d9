use std::collections::BTreeSet;

use serde::Serialize;

use super::sort::SortOption;
use super::summary::PropertySummary;
use crate::workflows::scoring::{BudgetStatus, RiskLevel, Tier};

/// Dashboard filter and sort selection. Empty sets place no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_score: u32,
    pub max_risk: Option<RiskLevel>,
    pub cities: BTreeSet<String>,
    pub tiers: BTreeSet<Tier>,
    pub budget_statuses: BTreeSet<BudgetStatus>,
    pub starred_only: bool,
    pub sort_by: SortOption,
}

/// Partial update; `None` keeps the current value. The nested options of
/// the nullable fields distinguish "clear" (`Some(None)`) from "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub min_price: Option<Option<u64>>,
    pub max_price: Option<Option<u64>>,
    pub min_score: Option<u32>,
    pub max_risk: Option<Option<RiskLevel>>,
    pub cities: Option<BTreeSet<String>>,
    pub tiers: Option<BTreeSet<Tier>>,
    pub budget_statuses: Option<BTreeSet<BudgetStatus>>,
    pub starred_only: Option<bool>,
    pub sort_by: Option<SortOption>,
}

impl FilterState {
    /// Returns a new state; `self` is left untouched.
    pub fn merge(&self, patch: FilterPatch) -> FilterState {
        FilterState {
            min_price: patch.min_price.unwrap_or(self.min_price),
            max_price: patch.max_price.unwrap_or(self.max_price),
            min_score: patch.min_score.unwrap_or(self.min_score),
            max_risk: patch.max_risk.unwrap_or(self.max_risk),
            cities: patch
                .cities
                .map(normalize_cities)
                .unwrap_or_else(|| self.cities.clone()),
            tiers: patch.tiers.unwrap_or_else(|| self.tiers.clone()),
            budget_statuses: patch
                .budget_statuses
                .unwrap_or_else(|| self.budget_statuses.clone()),
            starred_only: patch.starred_only.unwrap_or(self.starred_only),
            sort_by: patch.sort_by.unwrap_or(self.sort_by),
        }
    }

    pub fn matches(&self, property: &PropertySummary) -> bool {
        if let Some(min_price) = self.min_price {
            if property.asking_price < min_price as f64 {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if property.asking_price > max_price as f64 {
                return false;
            }
        }
        if property.match_score < f64::from(self.min_score) {
            return false;
        }
        if let Some(ceiling) = self.max_risk {
            if !property.overall_risk.is_within(ceiling) {
                return false;
            }
        }
        if !self.cities.is_empty() && !self.cities.contains(&property.city) {
            return false;
        }
        if !self.tiers.is_empty() && !self.tiers.contains(&property.match_tier) {
            return false;
        }
        if !self.budget_statuses.is_empty() && !self.budget_statuses.contains(&property.budget_status) {
            return false;
        }
        !self.starred_only || property.starred
    }
}

/// Trims city names and drops blank ones, matching what the query codec
/// accepts.
pub fn normalize_cities<I, S>(cities: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cities
        .into_iter()
        .map(|city| city.as_ref().trim().to_string())
        .filter(|city| !city.is_empty())
        .collect()
}

/// Keeps matching summaries in their input order.
pub fn filter_properties(properties: &[PropertySummary], state: &FilterState) -> Vec<PropertySummary> {
    properties
        .iter()
        .filter(|property| state.matches(property))
        .cloned()
        .collect()
}

/// Number of filter dimensions that differ from their default; sorting does
/// not count.
pub fn active_filter_count(state: &FilterState) -> usize {
    [
        state.min_price.is_some(),
        state.max_price.is_some(),
        state.min_score > 0,
        state.max_risk.is_some(),
        !state.cities.is_empty(),
        !state.tiers.is_empty(),
        !state.budget_statuses.is_empty(),
        state.starred_only,
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}
