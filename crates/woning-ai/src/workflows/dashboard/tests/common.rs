use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::dashboard::records::{PropertyLink, RawAnalysis, RawProperty, Slug};
use crate::workflows::dashboard::{
    dashboard_router, map_summaries, DashboardService, InMemorySnapshot,
    PlaceholderAnalysisGenerator, PropertySummary, Snapshot, SnapshotError, SnapshotSource,
};
use crate::workflows::scoring::{RiskFinding, ScoringConfig, ScoringEngine};

pub(super) fn analyzed_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn property(id: &str, slug: &str, city: &str, asking_price: f64) -> RawProperty {
    RawProperty {
        id: id.to_string(),
        slug: Some(Slug {
            current: Some(slug.to_string()),
        }),
        address: Some(format!("{slug} (adres)")),
        city: Some(city.to_string()),
        asking_price: Some(asking_price),
        living_area: Some(95.0),
        rooms: Some(4),
        bedrooms: Some(2),
        bathrooms: Some(1),
        listing_status: Some("beschikbaar".to_string()),
        ..RawProperty::default()
    }
}

pub(super) fn finding(category: &str, level: &str) -> RiskFinding {
    RiskFinding {
        category: category.to_string(),
        level: level.to_string(),
        description: None,
        mitigation: None,
    }
}

pub(super) fn analysis(id: &str, property_id: &str, score: f64, day: u32) -> RawAnalysis {
    RawAnalysis {
        id: id.to_string(),
        match_score: Some(score),
        analyzed_at: Some(analyzed_at(day)),
        property: Some(PropertyLink::Reference {
            reference: property_id.to_string(),
        }),
        ..RawAnalysis::default()
    }
}

/// Four properties in three cities; the Haarlem one has no analysis and
/// Oudegracht has an older, superseded analysis.
pub(super) fn snapshot() -> Snapshot {
    let mut keizersgracht = property("property-1", "keizersgracht-1", "Amsterdam", 625_000.0);
    keizersgracht.starred = Some(true);
    keizersgracht.days_on_market = Some(12);

    let mut oudegracht = property("property-2", "oudegracht-2", "Utrecht", 425_000.0);
    oudegracht.days_on_market = Some(30);

    let biltstraat = property("property-3", "biltstraat-3", "Utrecht", 350_000.0);

    let mut grote_markt = property("property-4", "grote-markt-4", "Haarlem", 510_000.0);
    grote_markt.days_on_market = Some(5);

    let first = RawAnalysis {
        tier: Some("excellent".to_string()),
        recommendation: Some("visit_immediately".to_string()),
        total_investment: Some(700_000.0),
        total_renovation_cost_low: Some(20_000.0),
        total_renovation_cost_mid: Some(35_000.0),
        total_renovation_cost_high: Some(60_000.0),
        overall_condition: Some("fair".to_string()),
        overall_risk_level: Some("high".to_string()),
        dealbreakers: Some(vec!["Erfpacht afgekocht tot 2030".to_string()]),
        within_budget: Some(true),
        budget_remaining: Some(10_000.0),
        risks: Some(vec![
            finding("Fundering", "high"),
            finding("Asbest", "medium"),
            finding("Geluid", "low"),
            finding("Erfpacht", "medium"),
        ]),
        negotiation_signals: Some(vec![Value::from("lang te koop"), Value::from("prijsdaling")]),
        ..analysis("analysis-1", "property-1", 91.0, 10)
    };

    let stale = RawAnalysis {
        recommendation: Some("skip".to_string()),
        total_investment: Some(460_000.0),
        within_budget: Some(false),
        ..analysis("analysis-2-old", "property-2", 20.0, 1)
    };

    let second = RawAnalysis {
        tier: Some("strong".to_string()),
        recommendation: Some("worth_visiting".to_string()),
        total_investment: Some(460_000.0),
        total_renovation_cost_low: Some(10_000.0),
        total_renovation_cost_mid: Some(15_000.0),
        total_renovation_cost_high: Some(25_000.0),
        overall_risk_level: Some("medium".to_string()),
        within_budget: Some(true),
        budget_remaining: Some(90_000.0),
        ..analysis("analysis-2", "property-2", 72.0, 8)
    };

    let third = RawAnalysis {
        tier: Some("weak".to_string()),
        recommendation: Some("needs_research".to_string()),
        total_investment: Some(420_000.0),
        overall_risk_level: Some("low".to_string()),
        within_budget: Some(false),
        budget_remaining: Some(-20_000.0),
        ..analysis("analysis-3", "property-3", 40.0, 9)
    };

    Snapshot {
        properties: vec![keizersgracht, oudegracht, biltstraat, grote_markt],
        analyses: vec![first, second, stale, third],
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn summaries() -> Vec<PropertySummary> {
    let snapshot = snapshot();
    map_summaries(&snapshot.properties, &snapshot.analyses, &engine())
}

pub(super) fn ids(summaries: &[PropertySummary]) -> Vec<&str> {
    summaries.iter().map(|summary| summary.id.as_str()).collect()
}

pub(super) fn small_page_config() -> ScoringConfig {
    ScoringConfig {
        page_size: 2,
        ..ScoringConfig::default()
    }
}

pub(super) fn build_service() -> DashboardService<InMemorySnapshot, PlaceholderAnalysisGenerator> {
    DashboardService::new(
        Arc::new(InMemorySnapshot::new(snapshot())),
        Arc::new(PlaceholderAnalysisGenerator),
        small_page_config(),
    )
}

pub(super) struct UnavailableSnapshot;

impl SnapshotSource for UnavailableSnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        Err(SnapshotError::Unavailable("cms offline".to_string()))
    }
}

pub(super) fn dashboard_router_with_service<S>(
    service: DashboardService<S, PlaceholderAnalysisGenerator>,
) -> axum::Router
where
    S: SnapshotSource + 'static,
{
    dashboard_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
