use super::normalizer::normalize_key;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Appartement,
    Tussenwoning,
    Hoekwoning,
    TweeOnderEenKap,
    Vrijstaand,
    Penthouse,
    Grachtenpand,
    Bovenwoning,
    Benedenwoning,
    Maisonnette,
    Villa,
    Woonboerderij,
    Overig,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appartement => "Appartement",
            Self::Tussenwoning => "Tussenwoning",
            Self::Hoekwoning => "Hoekwoning",
            Self::TweeOnderEenKap => "Twee-onder-een-kap",
            Self::Vrijstaand => "Vrijstaand",
            Self::Penthouse => "Penthouse",
            Self::Grachtenpand => "Grachtenpand",
            Self::Bovenwoning => "Bovenwoning",
            Self::Benedenwoning => "Benedenwoning",
            Self::Maisonnette => "Maisonnette",
            Self::Villa => "Villa",
            Self::Woonboerderij => "Woonboerderij",
            Self::Overig => "Overig",
        }
    }
}

/// Checked in order; the first key contained in the scraped type wins.
const TYPE_KEYWORDS: &[(&str, PropertyType)] = &[
    ("appartement", PropertyType::Appartement),
    ("apartment", PropertyType::Appartement),
    ("tussenwoning", PropertyType::Tussenwoning),
    ("hoekwoning", PropertyType::Hoekwoning),
    ("twee-onder-een-kap", PropertyType::TweeOnderEenKap),
    ("2-onder-1-kap", PropertyType::TweeOnderEenKap),
    ("vrijstaand", PropertyType::Vrijstaand),
    ("vrijstaande woning", PropertyType::Vrijstaand),
    ("penthouse", PropertyType::Penthouse),
    ("grachtenpand", PropertyType::Grachtenpand),
    ("bovenwoning", PropertyType::Bovenwoning),
    ("benedenwoning", PropertyType::Benedenwoning),
    ("maisonnette", PropertyType::Maisonnette),
    ("villa", PropertyType::Villa),
    ("woonboerderij", PropertyType::Woonboerderij),
];

pub fn map_property_type(value: Option<&str>) -> PropertyType {
    let Some(value) = value else {
        return PropertyType::Overig;
    };
    let key = normalize_key(value);
    if key.is_empty() {
        return PropertyType::Overig;
    }

    TYPE_KEYWORDS
        .iter()
        .find(|(keyword, _)| key.contains(keyword))
        .map(|(_, property_type)| *property_type)
        .unwrap_or(PropertyType::Overig)
}

/// Scraper boolean flags and the feature name each one contributes.
const FEATURE_FLAGS: &[(&str, &str)] = &[
    ("has_garden", "tuin"),
    ("has_balcony", "balkon"),
    ("has_roof_terrace", "dakterras"),
    ("has_garage", "garage"),
    ("has_parking", "parkeerplaats"),
    ("has_storage", "berging"),
    ("has_elevator", "lift"),
    ("has_attic", "zolder"),
    ("has_basement", "kelder"),
    ("has_solar_panels", "zonnepanelen"),
];

/// Only an explicit `true` adds a feature; `false` and missing flags do not.
pub(crate) fn extract_features(listing: &Map<String, Value>) -> Vec<String> {
    FEATURE_FLAGS
        .iter()
        .filter(|(flag, _)| listing.get(*flag) == Some(&Value::Bool(true)))
        .map(|(_, feature)| (*feature).to_string())
        .collect()
}
