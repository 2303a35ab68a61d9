//! Loosely typed property and analysis records as the CMS query layer
//! returns them. Every field except the document id is optional; the
//! summary mapper is the only place these shapes are interpreted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::scoring::{BudgetInput, RiskFinding};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    pub current: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub lqip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: Option<String>,
    pub metadata: Option<ImageMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: Option<ImageAsset>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: Option<Slug>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub asking_price: Option<f64>,
    pub living_area: Option<f64>,
    pub rooms: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub energy_label: Option<String>,
    pub features: Option<Vec<String>>,
    pub main_image: Option<ImageRef>,
    pub starred: Option<bool>,
    pub listing_status: Option<String>,
    pub days_on_market: Option<u32>,
    pub neighborhood: Option<NeighborhoodRef>,
    pub funda_url: Option<String>,
}

impl RawProperty {
    /// Falls back to the document id when the slug was never generated.
    pub fn slug(&self) -> &str {
        self.slug
            .as_ref()
            .and_then(|slug| slug.current.as_deref())
            .filter(|slug| !slug.trim().is_empty())
            .unwrap_or(&self.id)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_asset().and_then(|asset| asset.url.as_deref())
    }

    pub fn image_lqip(&self) -> Option<&str> {
        self.image_asset()
            .and_then(|asset| asset.metadata.as_ref())
            .and_then(|metadata| metadata.lqip.as_deref())
    }

    pub fn neighborhood_name(&self) -> Option<&str> {
        self.neighborhood
            .as_ref()
            .and_then(|neighborhood| neighborhood.name.as_deref())
    }

    fn image_asset(&self) -> Option<&ImageAsset> {
        self.main_image.as_ref().and_then(|image| image.asset.as_ref())
    }
}

/// An analysis either references its property by id or carries a copy of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyLink {
    Reference {
        #[serde(rename = "_ref")]
        reference: String,
    },
    Embedded(Box<RawProperty>),
}

impl PropertyLink {
    pub fn property_id(&self) -> &str {
        match self {
            PropertyLink::Reference { reference } => reference,
            PropertyLink::Embedded(property) => &property.id,
        }
    }

    pub fn embedded(&self) -> Option<&RawProperty> {
        match self {
            PropertyLink::Reference { .. } => None,
            PropertyLink::Embedded(property) => Some(property),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysis {
    #[serde(rename = "_id")]
    pub id: String,
    pub match_score: Option<f64>,
    pub tier: Option<String>,
    pub recommendation: Option<String>,
    pub total_investment: Option<f64>,
    pub total_renovation_cost_low: Option<f64>,
    pub total_renovation_cost_mid: Option<f64>,
    pub total_renovation_cost_high: Option<f64>,
    pub overall_condition: Option<String>,
    pub overall_risk_level: Option<String>,
    pub dealbreakers: Option<Vec<String>>,
    pub within_budget: Option<bool>,
    pub budget_remaining: Option<f64>,
    pub risks: Option<Vec<RiskFinding>>,
    pub negotiation_signals: Option<Vec<serde_json::Value>>,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub property: Option<PropertyLink>,
}

impl RawAnalysis {
    pub fn property_id(&self) -> Option<&str> {
        self.property.as_ref().map(PropertyLink::property_id)
    }

    pub fn embedded_property(&self) -> Option<&RawProperty> {
        self.property.as_ref().and_then(PropertyLink::embedded)
    }

    pub fn budget_input(&self) -> BudgetInput {
        BudgetInput {
            total_investment: finite_or_zero(self.total_investment),
            within_budget: self.within_budget,
            budget_remaining: self.budget_remaining.filter(|value| value.is_finite()),
        }
    }

    pub fn negotiation_signal_count(&self) -> usize {
        self.negotiation_signals.as_ref().map_or(0, Vec::len)
    }
}

pub(crate) fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|number| number.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_reads_cms_shapes() {
        let property: RawProperty = serde_json::from_value(json!({
            "_id": "property-1",
            "slug": { "current": "keizersgracht-123" },
            "askingPrice": 625000,
            "mainImage": {
                "asset": {
                    "url": "https://cdn.example.nl/1.jpg",
                    "metadata": { "lqip": "data:image/jpeg;base64,AAA" }
                }
            },
            "neighborhood": { "name": "Grachtengordel" }
        }))
        .expect("deserialize property");

        assert_eq!(property.slug(), "keizersgracht-123");
        assert_eq!(property.asking_price, Some(625_000.0));
        assert_eq!(property.image_url(), Some("https://cdn.example.nl/1.jpg"));
        assert_eq!(property.image_lqip(), Some("data:image/jpeg;base64,AAA"));
        assert_eq!(property.neighborhood_name(), Some("Grachtengordel"));
    }

    #[test]
    fn slug_falls_back_to_id() {
        let property = RawProperty {
            id: "property-2".to_string(),
            slug: Some(Slug {
                current: Some("  ".to_string()),
            }),
            ..RawProperty::default()
        };
        assert_eq!(property.slug(), "property-2");
    }

    #[test]
    fn analysis_link_accepts_reference_or_embedded_property() {
        let referenced: RawAnalysis = serde_json::from_value(json!({
            "_id": "analysis-1",
            "property": { "_ref": "property-1" }
        }))
        .expect("deserialize reference");
        assert_eq!(referenced.property_id(), Some("property-1"));
        assert!(referenced.embedded_property().is_none());

        let embedded: RawAnalysis = serde_json::from_value(json!({
            "_id": "analysis-2",
            "analyzedAt": "2025-02-01T10:00:00Z",
            "property": { "_id": "property-2", "city": "Utrecht" }
        }))
        .expect("deserialize embedded");
        assert_eq!(embedded.property_id(), Some("property-2"));
        assert_eq!(
            embedded
                .embedded_property()
                .and_then(|property| property.city.as_deref()),
            Some("Utrecht")
        );
        assert!(embedded.analyzed_at.is_some());
    }

    #[test]
    fn budget_input_defaults_missing_totals_to_zero() {
        let analysis = RawAnalysis {
            id: "analysis-3".to_string(),
            within_budget: Some(true),
            ..RawAnalysis::default()
        };
        let input = analysis.budget_input();
        assert_eq!(input.total_investment, 0.0);
        assert_eq!(input.budget_remaining, None);
        assert_eq!(analysis.negotiation_signal_count(), 0);
    }
}
