use super::common::*;
use crate::workflows::dashboard::records::{PropertyLink, RawAnalysis};
use crate::workflows::dashboard::map_summaries;
use crate::workflows::scoring::{
    BudgetStatus, Condition, Recommendation, RiskLevel, ScoringConfig, ScoringEngine,
    TierThresholds, Tier,
};

#[test]
fn every_property_yields_exactly_one_summary_in_input_order() {
    let summaries = summaries();
    assert_eq!(
        ids(&summaries),
        vec!["property-1", "property-2", "property-3", "property-4"]
    );
}

#[test]
fn analyzed_property_carries_derived_fields() {
    let summaries = summaries();
    let keizersgracht = &summaries[0];

    assert_eq!(keizersgracht.slug, "keizersgracht-1");
    assert_eq!(keizersgracht.match_tier, Tier::Excellent);
    assert_eq!(keizersgracht.recommendation, Recommendation::VisitImmediately);
    assert_eq!(keizersgracht.total_investment_low, 685_000.0);
    assert_eq!(keizersgracht.total_investment_mid, 700_000.0);
    assert_eq!(keizersgracht.total_investment_high, 725_000.0);
    assert_eq!(keizersgracht.budget_status, BudgetStatus::Stretch);
    assert_eq!(keizersgracht.budget_utilization, 99);
    assert_eq!(keizersgracht.overall_risk, RiskLevel::High);
    assert_eq!(keizersgracht.renovation_condition, Some(Condition::Fair));
    assert_eq!(keizersgracht.renovation_estimate_low, 20_000.0);
    assert_eq!(keizersgracht.renovation_estimate_high, 60_000.0);
    assert_eq!(keizersgracht.negotiation_signal_count, 2);
    assert_eq!(keizersgracht.dealbreakers.len(), 1);

    let flags: Vec<(&str, RiskLevel)> = keizersgracht
        .top_risk_flags
        .iter()
        .map(|flag| (flag.label.as_str(), flag.severity))
        .collect();
    assert_eq!(
        flags,
        vec![("Fundering", RiskLevel::High), ("Asbest", RiskLevel::Medium)]
    );
}

#[test]
fn property_without_analysis_degrades_to_defaults() {
    let summaries = summaries();
    let grote_markt = summaries
        .iter()
        .find(|summary| summary.id == "property-4")
        .expect("unanalyzed property present");

    assert!(!grote_markt.is_analyzed());
    assert_eq!(grote_markt.match_score, 0.0);
    assert_eq!(grote_markt.match_tier, Tier::NotRecommended);
    assert_eq!(grote_markt.recommendation, Recommendation::Skip);
    assert_eq!(grote_markt.budget_status, BudgetStatus::Safe);
    assert_eq!(grote_markt.budget_utilization, 0);
    assert_eq!(grote_markt.overall_risk, RiskLevel::Low);
    assert_eq!(grote_markt.total_investment_low, 0.0);
    assert_eq!(grote_markt.total_investment_mid, 0.0);
    assert_eq!(grote_markt.total_investment_high, 0.0);
    assert!(grote_markt.top_risk_flags.is_empty());
    assert_eq!(grote_markt.asking_price, 510_000.0);
}

#[test]
fn latest_analysis_wins_regardless_of_input_order() {
    let summaries = summaries();
    let oudegracht = &summaries[1];

    assert_eq!(oudegracht.analysis_id.as_deref(), Some("analysis-2"));
    assert_eq!(oudegracht.match_score, 72.0);
    assert_eq!(oudegracht.match_tier, Tier::Strong);
    assert_eq!(oudegracht.budget_status, BudgetStatus::Safe);
    assert_eq!(oudegracht.budget_utilization, 84);
}

#[test]
fn equal_timestamps_prefer_the_later_record() {
    let snapshot = snapshot();
    let analyses = vec![
        analysis("analysis-a", "property-4", 30.0, 5),
        analysis("analysis-b", "property-4", 60.0, 5),
    ];
    let summaries = map_summaries(&snapshot.properties, &analyses, &engine());
    assert_eq!(summaries[3].analysis_id.as_deref(), Some("analysis-b"));
}

#[test]
fn over_budget_analysis_may_exceed_full_utilization() {
    let summaries = summaries();
    let biltstraat = &summaries[2];

    assert_eq!(biltstraat.budget_status, BudgetStatus::OverBudget);
    assert_eq!(biltstraat.budget_utilization, 105);
    assert_eq!(biltstraat.match_tier, Tier::Weak);
    assert_eq!(biltstraat.days_on_market, None);
}

#[test]
fn embedded_properties_are_used_when_no_property_list_is_given() {
    let snapshot = snapshot();
    let embed = |analysis: &RawAnalysis, index: usize| RawAnalysis {
        property: Some(PropertyLink::Embedded(Box::new(
            snapshot.properties[index].clone(),
        ))),
        ..analysis.clone()
    };
    let analyses = vec![
        embed(&snapshot.analyses[0], 0),
        embed(&snapshot.analyses[1], 1),
        embed(&snapshot.analyses[2], 1),
    ];

    let summaries = map_summaries(&[], &analyses, &engine());

    assert_eq!(ids(&summaries), vec!["property-1", "property-2"]);
    assert_eq!(summaries[1].analysis_id.as_deref(), Some("analysis-2"));
    assert_eq!(summaries[0].match_tier, Tier::Excellent);
}

#[test]
fn referenced_analyses_without_properties_yield_nothing() {
    let snapshot = snapshot();
    let summaries = map_summaries(&[], &snapshot.analyses, &engine());
    assert!(summaries.is_empty());
}

#[test]
fn tier_is_derived_from_score_not_from_stored_hint() {
    let snapshot = snapshot();
    let analyses = vec![RawAnalysis {
        tier: Some("excellent".to_string()),
        ..analysis("analysis-x", "property-4", 55.0, 3)
    }];
    let summaries = map_summaries(&snapshot.properties, &analyses, &engine());
    assert_eq!(summaries[3].match_tier, Tier::Moderate);
}

#[test]
fn configured_thresholds_flow_into_tiers() {
    let snapshot = snapshot();
    let strict = ScoringEngine::new(ScoringConfig {
        tier_thresholds: TierThresholds {
            excellent: 95.0,
            strong: 90.0,
            moderate: 80.0,
            weak: 70.0,
        },
        ..ScoringConfig::default()
    });
    let summaries = map_summaries(&snapshot.properties, &snapshot.analyses, &strict);
    assert_eq!(summaries[0].match_tier, Tier::Strong);
    assert_eq!(summaries[1].match_tier, Tier::Weak);
}

#[test]
fn unknown_labels_fall_back_to_safe_defaults() {
    let snapshot = snapshot();
    let analyses = vec![RawAnalysis {
        recommendation: Some("buy_now".to_string()),
        overall_risk_level: Some("catastrophic".to_string()),
        overall_condition: Some("ruin".to_string()),
        ..analysis("analysis-y", "property-4", 80.0, 3)
    }];
    let summaries = map_summaries(&snapshot.properties, &analyses, &engine());
    let summary = &summaries[3];

    assert_eq!(summary.recommendation, Recommendation::Skip);
    assert_eq!(summary.overall_risk, RiskLevel::Low);
    assert_eq!(summary.renovation_condition, None);
}

#[test]
fn inverted_renovation_estimates_are_reported_not_repaired() {
    let snapshot = snapshot();
    let analyses = vec![RawAnalysis {
        total_investment: Some(400_000.0),
        total_renovation_cost_low: Some(50_000.0),
        total_renovation_cost_mid: Some(30_000.0),
        total_renovation_cost_high: Some(40_000.0),
        ..analysis("analysis-z", "property-4", 60.0, 3)
    }];
    let summaries = map_summaries(&snapshot.properties, &analyses, &engine());
    let range = summaries[3].investment_range();

    assert_eq!(range.low, 420_000.0);
    assert_eq!(range.mid, 400_000.0);
    assert_eq!(range.high, 410_000.0);
    assert!(!range.is_ordered());
}
