//! Import of scraped listing JSON into typed, normalized listing fields.

mod mapping;
mod normalizer;
mod parser;

pub use mapping::{map_property_type, PropertyType};
pub use parser::{
    parse_area, parse_comma_separated, parse_currency, parse_energy_label, parse_vve_boolean,
    parse_vve_contribution,
};

use chrono::{DateTime, Utc};
use normalizer::clean_text;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

const SOURCE_TYPE: &str = "pyfunda";
const DEFAULT_LISTING_STATUS: &str = "beschikbaar";
const CHARACTERISTICS_KEY: &str = "characteristics";

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotAnObject,
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ImportError::Json(err) => write!(f, "invalid listing JSON: {}", err),
            ImportError::NotAnObject => {
                write!(f, "listing export must be a JSON object or an array of objects")
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Json(err) => Some(err),
            ImportError::NotAnObject => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Owners' association (VvE) facts taken from the characteristics table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VveData {
    pub monthly_contribution: Option<f64>,
    pub has_reserve_fund: Option<bool>,
    pub has_maintenance_plan: Option<bool>,
    pub kvk_registered: Option<bool>,
    pub has_building_insurance: Option<bool>,
}

pub fn extract_vve_data(characteristics: &Map<String, Value>) -> VveData {
    let field = |key: &str| characteristic(characteristics, key).unwrap_or_default();
    VveData {
        monthly_contribution: parse_vve_contribution(&field("Bijdrage VvE")),
        has_reserve_fund: parse_vve_boolean(&field("Reservefonds aanwezig")),
        has_maintenance_plan: parse_vve_boolean(&field("Onderhoudsplan")),
        kvk_registered: parse_vve_boolean(&field("Inschrijving KvK")),
        has_building_insurance: parse_vve_boolean(&field("Opstalverzekering")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceStamp {
    pub source: &'static str,
    pub fetched_at: DateTime<Utc>,
    pub fields_provided: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListing {
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub property_type: PropertyType,
    pub asking_price: Option<f64>,
    pub living_area: Option<f64>,
    pub plot_area: Option<f64>,
    pub rooms: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub build_year: Option<u32>,
    pub energy_label: Option<String>,
    pub features: Vec<String>,
    pub description: Option<String>,
    pub price_per_sqm: Option<f64>,
    pub photo_urls: Vec<String>,
    pub floor_plan_urls: Vec<String>,
    pub funda_url: Option<String>,
    pub funda_id: Option<String>,
    pub source_type: &'static str,
    pub listing_status: &'static str,
    pub listing_date: Option<String>,
    pub vve: VveData,
    pub data_source: DataSourceStamp,
}

pub struct FundaListingImporter;

impl FundaListingImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        fetched_at: DateTime<Utc>,
    ) -> Result<Vec<NormalizedListing>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, fetched_at)
    }

    /// Accepts a single listing object or an array of them.
    pub fn from_reader<R: Read>(
        reader: R,
        fetched_at: DateTime<Utc>,
    ) -> Result<Vec<NormalizedListing>, ImportError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::import_all(&value, fetched_at)
    }

    pub fn import_all(
        value: &Value,
        fetched_at: DateTime<Utc>,
    ) -> Result<Vec<NormalizedListing>, ImportError> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| Self::from_value(item, fetched_at))
                .collect(),
            Value::Object(_) => Ok(vec![Self::from_value(value, fetched_at)?]),
            _ => Err(ImportError::NotAnObject),
        }
    }

    pub fn from_value(
        value: &Value,
        fetched_at: DateTime<Utc>,
    ) -> Result<NormalizedListing, ImportError> {
        let listing = value.as_object().ok_or(ImportError::NotAnObject)?;
        Ok(normalize_listing(listing, fetched_at))
    }
}

fn normalize_listing(listing: &Map<String, Value>, fetched_at: DateTime<Utc>) -> NormalizedListing {
    let empty = Map::new();
    let characteristics = listing
        .get(CHARACTERISTICS_KEY)
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let asking_price = money(listing, "asking_price");
    let living_area = area(listing, "living_area")
        .or_else(|| characteristic(characteristics, "Woonoppervlakte").and_then(|v| parse_area(&v)));
    let plot_area = area(listing, "plot_area").or_else(|| {
        characteristic(characteristics, "Perceeloppervlakte").and_then(|v| parse_area(&v))
    });

    let price_per_sqm = match (asking_price, living_area) {
        (Some(price), Some(area)) if area > 0.0 => Some((price / area).round()),
        _ => None,
    };

    let characteristic_label = characteristic(characteristics, "Energielabel");
    let top_level_label = text(listing, "energy_label");

    NormalizedListing {
        address: text(listing, "address"),
        zip_code: text(listing, "zip_code"),
        city: text(listing, "city"),
        property_type: map_property_type(text(listing, "property_type").as_deref()),
        asking_price,
        living_area,
        plot_area,
        rooms: count(listing, "num_rooms"),
        bedrooms: count(listing, "num_bedrooms"),
        bathrooms: count(listing, "num_bathrooms"),
        build_year: count(listing, "build_year"),
        energy_label: parse_energy_label(
            characteristic_label.as_deref(),
            top_level_label.as_deref(),
        ),
        features: mapping::extract_features(listing),
        description: text(listing, "description"),
        price_per_sqm,
        photo_urls: string_list(listing, "photo_urls"),
        floor_plan_urls: string_list(listing, "floorplan_urls"),
        funda_url: text(listing, "url"),
        funda_id: text(listing, "funda_id").or_else(|| text(listing, "id")),
        source_type: SOURCE_TYPE,
        listing_status: DEFAULT_LISTING_STATUS,
        listing_date: text(listing, "listing_date"),
        vve: extract_vve_data(characteristics),
        data_source: DataSourceStamp {
            source: SOURCE_TYPE,
            fetched_at,
            fields_provided: provided_fields(listing),
        },
    }
}

/// Strings are cleaned; numbers are rendered so ids survive either shape.
fn text(listing: &Map<String, Value>, key: &str) -> Option<String> {
    match listing.get(key)? {
        Value::String(raw) => {
            let cleaned = clean_text(raw);
            (!cleaned.is_empty()).then_some(cleaned)
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn characteristic(characteristics: &Map<String, Value>, key: &str) -> Option<String> {
    text(characteristics, key)
}

fn positive_number(listing: &Map<String, Value>, key: &str) -> Option<f64> {
    listing
        .get(key)?
        .as_f64()
        .filter(|number| number.is_finite() && *number > 0.0)
}

fn money(listing: &Map<String, Value>, key: &str) -> Option<f64> {
    positive_number(listing, key).or_else(|| {
        listing
            .get(key)?
            .as_str()
            .and_then(parse_currency)
            .filter(|number| *number > 0.0)
    })
}

fn area(listing: &Map<String, Value>, key: &str) -> Option<f64> {
    positive_number(listing, key).or_else(|| {
        listing
            .get(key)?
            .as_str()
            .and_then(parse_area)
            .filter(|number| *number > 0.0)
    })
}

fn count(listing: &Map<String, Value>, key: &str) -> Option<u32> {
    match listing.get(key)? {
        Value::Number(number) => number
            .as_u64()
            .filter(|value| *value > 0)
            .and_then(|value| u32::try_from(value).ok()),
        Value::String(raw) => raw.trim().parse::<u32>().ok().filter(|value| *value > 0),
        _ => None,
    }
}

fn string_list(listing: &Map<String, Value>, key: &str) -> Vec<String> {
    listing
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(clean_text)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn provided_fields(listing: &Map<String, Value>) -> Vec<String> {
    let mut fields: Vec<String> = listing
        .iter()
        .filter(|(key, value)| !value.is_null() && key.as_str() != CHARACTERISTICS_KEY)
        .map(|(key, _)| key.clone())
        .collect();
    fields.sort();
    fields
}
