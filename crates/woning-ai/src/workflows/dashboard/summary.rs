use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use super::records::{finite_or_zero, RawAnalysis, RawProperty};
use crate::workflows::scoring::{
    BudgetStatus, Condition, InvestmentRange, Recommendation, RiskFlag, RiskLevel, ScoringEngine,
    Tier,
};

/// Flattened, fully defaulted view of one property and its latest analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: String,
    pub slug: String,
    pub address: String,
    pub city: String,
    pub neighborhood: Option<String>,
    pub asking_price: f64,
    pub living_area: f64,
    pub rooms: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub energy_label: Option<String>,
    pub image_url: Option<String>,
    pub image_lqip: Option<String>,
    pub starred: bool,
    pub funda_url: Option<String>,
    pub days_on_market: Option<u32>,
    pub analysis_id: Option<String>,
    pub match_score: f64,
    pub match_tier: Tier,
    pub recommendation: Recommendation,
    pub total_investment_low: f64,
    pub total_investment_mid: f64,
    pub total_investment_high: f64,
    pub budget_status: BudgetStatus,
    pub budget_utilization: u32,
    pub overall_risk: RiskLevel,
    pub dealbreakers: Vec<String>,
    pub top_risk_flags: Vec<RiskFlag>,
    pub renovation_condition: Option<Condition>,
    pub renovation_estimate_low: f64,
    pub renovation_estimate_high: f64,
    pub negotiation_signal_count: usize,
}

impl PropertySummary {
    pub fn is_analyzed(&self) -> bool {
        self.analysis_id.is_some()
    }

    pub fn investment_range(&self) -> InvestmentRange {
        InvestmentRange {
            low: self.total_investment_low,
            mid: self.total_investment_mid,
            high: self.total_investment_high,
        }
    }
}

/// Joins properties with their latest analysis.
///
/// With a non-empty property list every property yields exactly one summary,
/// analyzed or not. With an empty property list the properties embedded in
/// the analyses are used instead, so properties nobody analyzed cannot
/// appear in that case.
pub fn map_summaries(
    properties: &[RawProperty],
    analyses: &[RawAnalysis],
    engine: &ScoringEngine,
) -> Vec<PropertySummary> {
    let latest = latest_by_property(analyses);

    let joined: Vec<(&RawProperty, Option<&RawAnalysis>)> = if properties.is_empty() {
        embedded_properties(analyses, &latest)
    } else {
        properties
            .iter()
            .map(|property| (property, latest.get(property.id.as_str()).copied()))
            .collect()
    };

    joined
        .into_iter()
        .map(|(property, analysis)| summarize(property, analysis, engine))
        .collect()
}

/// Latest analysis per property id. Dated analyses beat undated ones; on
/// equal timestamps the later record in the input wins.
fn latest_by_property(analyses: &[RawAnalysis]) -> HashMap<&str, &RawAnalysis> {
    let mut latest: HashMap<&str, &RawAnalysis> = HashMap::new();
    for analysis in analyses {
        let Some(property_id) = analysis.property_id() else {
            continue;
        };
        let replace = latest
            .get(property_id)
            .map_or(true, |current| analysis.analyzed_at >= current.analyzed_at);
        if replace {
            latest.insert(property_id, analysis);
        }
    }
    latest
}

fn embedded_properties<'a>(
    analyses: &'a [RawAnalysis],
    latest: &HashMap<&str, &'a RawAnalysis>,
) -> Vec<(&'a RawProperty, Option<&'a RawAnalysis>)> {
    let mut seen = HashSet::new();
    analyses
        .iter()
        .filter_map(RawAnalysis::embedded_property)
        .filter(|property| seen.insert(property.id.as_str()))
        .map(|first_seen| {
            let analysis = latest.get(first_seen.id.as_str()).copied();
            let property = analysis
                .and_then(RawAnalysis::embedded_property)
                .unwrap_or(first_seen);
            (property, analysis)
        })
        .collect()
}

fn summarize(
    property: &RawProperty,
    analysis: Option<&RawAnalysis>,
    engine: &ScoringEngine,
) -> PropertySummary {
    let budget = analysis.map(RawAnalysis::budget_input);
    let reno_low = analysis.map_or(0.0, |a| finite_or_zero(a.total_renovation_cost_low));
    let reno_mid = analysis.map_or(0.0, |a| finite_or_zero(a.total_renovation_cost_mid));
    let reno_high = analysis.map_or(0.0, |a| finite_or_zero(a.total_renovation_cost_high));

    let range = match &budget {
        Some(input) => engine.investment_range(input.total_investment, reno_low, reno_mid, reno_high),
        None => InvestmentRange::default(),
    };
    if !range.is_ordered() {
        warn!(
            property_id = %property.id,
            low = range.low,
            mid = range.mid,
            high = range.high,
            "investment range is inverted; renovation estimates are out of order"
        );
    }

    let match_score = analysis.map_or(0.0, |a| finite_or_zero(a.match_score));
    let match_tier = engine.tier(match_score);
    if let Some(hint) = analysis.and_then(|a| a.tier.as_deref()) {
        if Tier::parse(hint) != Some(match_tier) {
            debug!(
                property_id = %property.id,
                hint,
                derived = match_tier.key(),
                "stored tier disagrees with score; using derived tier"
            );
        }
    }

    PropertySummary {
        id: property.id.clone(),
        slug: property.slug().to_string(),
        address: property.address.clone().unwrap_or_default(),
        city: property.city.clone().unwrap_or_default(),
        neighborhood: property.neighborhood_name().map(str::to_string),
        asking_price: finite_or_zero(property.asking_price),
        living_area: finite_or_zero(property.living_area),
        rooms: property.rooms.unwrap_or(0),
        bedrooms: property.bedrooms.unwrap_or(0),
        bathrooms: property.bathrooms.unwrap_or(0),
        energy_label: property.energy_label.clone(),
        image_url: property.image_url().map(str::to_string),
        image_lqip: property.image_lqip().map(str::to_string),
        starred: property.starred.unwrap_or(false),
        funda_url: property.funda_url.clone(),
        days_on_market: property.days_on_market,
        analysis_id: analysis.map(|a| a.id.clone()),
        match_score,
        match_tier,
        recommendation: recommendation(property, analysis),
        total_investment_low: range.low,
        total_investment_mid: range.mid,
        total_investment_high: range.high,
        budget_status: engine.budget_status(budget.as_ref()),
        budget_utilization: engine.budget_utilization(budget.as_ref()),
        overall_risk: overall_risk(property, analysis),
        dealbreakers: analysis
            .and_then(|a| a.dealbreakers.clone())
            .unwrap_or_default(),
        top_risk_flags: analysis
            .and_then(|a| a.risks.as_deref())
            .map(|risks| engine.top_risk_flags(risks))
            .unwrap_or_default(),
        renovation_condition: analysis
            .and_then(|a| a.overall_condition.as_deref())
            .and_then(Condition::parse),
        renovation_estimate_low: reno_low,
        renovation_estimate_high: reno_high,
        negotiation_signal_count: analysis.map_or(0, RawAnalysis::negotiation_signal_count),
    }
}

fn recommendation(property: &RawProperty, analysis: Option<&RawAnalysis>) -> Recommendation {
    let Some(raw) = analysis.and_then(|a| a.recommendation.as_deref()) else {
        return Recommendation::Skip;
    };
    Recommendation::parse(raw).unwrap_or_else(|| {
        warn!(property_id = %property.id, recommendation = raw, "unknown recommendation; treating as skip");
        Recommendation::Skip
    })
}

fn overall_risk(property: &RawProperty, analysis: Option<&RawAnalysis>) -> RiskLevel {
    let Some(raw) = analysis.and_then(|a| a.overall_risk_level.as_deref()) else {
        return RiskLevel::Low;
    };
    RiskLevel::parse(raw).unwrap_or_else(|| {
        warn!(property_id = %property.id, risk = raw, "unknown risk level; treating as low");
        RiskLevel::Low
    })
}
