//! Field parsers for scraped listing characteristics. Every parser is total:
//! unparseable input yields `None` or an empty collection.

use super::normalizer::{clean_text, normalize_key};
use regex::Regex;
use std::sync::OnceLock;

/// Filler text the listing site shows next to the energy label.
const ENERGY_LABEL_PLACEHOLDER: &str = "betekent";

const AFFIRMATIVE: &[&str] = &["ja", "aanwezig", "yes", "true"];
const NEGATIVE: &[&str] = &["nee", "niet aanwezig", "no", "false"];

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid number pattern")
    })
}

fn unit_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)per.*").expect("valid suffix pattern"))
}

fn yearly_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)per\s*jaar").expect("valid yearly pattern"))
}

fn numeric_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9][0-9.,]*").expect("valid numeric run pattern"))
}

/// Parses the numeric prefix of an already cleaned string.
fn parse_leading_float(value: &str) -> Option<f64> {
    leading_number()
        .find(value.trim())
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

/// Dutch currency text to a number: `"€ 9.706"` → `9706`,
/// `"€ 123,50 per maand"` → `123.5`.
pub fn parse_currency(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }

    let compact: String = value
        .chars()
        .filter(|c| *c != '€' && *c != '.' && !c.is_whitespace())
        .collect();
    let compact = compact.replacen(',', ".", 1);
    let without_unit = unit_suffix().replace(&compact, "");

    parse_leading_float(&without_unit)
}

/// Homeowners' association contribution normalized to a monthly amount.
pub fn parse_vve_contribution(value: &str) -> Option<f64> {
    let amount = parse_currency(value)?;

    if yearly_suffix().is_match(value) {
        Some((amount / 12.0 * 100.0).round() / 100.0)
    } else {
        Some(amount)
    }
}

/// First numeric run of an area string: `"181 m²"` → `181`. Periods are
/// thousands separators, the first comma is the decimal point.
pub fn parse_area(value: &str) -> Option<f64> {
    let run = numeric_run().find(value)?;
    let cleaned = run.as_str().replace('.', "").replacen(',', ".", 1);
    parse_leading_float(&cleaned)
}

/// `"Dubbel glas, Dakisolatie"` → `["Dubbel glas", "Dakisolatie"]`.
pub fn parse_comma_separated(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(clean_text)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Prefers the top-level label; rejects the site's explanatory placeholder
/// in either source.
pub fn parse_energy_label(
    characteristic_value: Option<&str>,
    top_level_value: Option<&str>,
) -> Option<String> {
    [top_level_value, characteristic_value]
        .into_iter()
        .flatten()
        .map(clean_text)
        .find(|label| !label.is_empty() && !label.to_lowercase().contains(ENERGY_LABEL_PLACEHOLDER))
}

/// `None` means unknown, which is distinct from an explicit "nee".
pub fn parse_vve_boolean(value: &str) -> Option<bool> {
    let key = normalize_key(value);
    if key.is_empty() {
        return None;
    }
    if AFFIRMATIVE.contains(&key.as_str()) {
        return Some(true);
    }
    if NEGATIVE.contains(&key.as_str()) {
        return Some(false);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_handles_dutch_formats() {
        assert_eq!(parse_currency("€ 1.482 per jaar"), Some(1482.0));
        assert_eq!(parse_currency("€ 123,50 per maand"), Some(123.5));
        assert_eq!(parse_currency("€ 9.706"), Some(9706.0));
        assert_eq!(parse_currency("€ 425.000 k.k."), Some(425000.0));
        assert_eq!(parse_currency("Prijs op aanvraag"), None);
        assert_eq!(parse_currency("   "), None);
    }

    #[test]
    fn vve_contribution_normalizes_yearly_amounts() {
        assert_eq!(parse_vve_contribution("€ 1.482 per jaar"), Some(123.5));
        assert_eq!(parse_vve_contribution("€ 1.000 PER JAAR"), Some(83.33));
        assert_eq!(parse_vve_contribution("€ 123,50 per maand"), Some(123.5));
        assert_eq!(parse_vve_contribution("onbekend"), None);
    }

    #[test]
    fn area_takes_first_numeric_run() {
        assert_eq!(parse_area("181 m²"), Some(181.0));
        assert_eq!(parse_area("85m²"), Some(85.0));
        assert_eq!(parse_area("1.250 m²"), Some(1250.0));
        assert_eq!(parse_area("72,5 m²"), Some(72.5));
        assert_eq!(parse_area("geen"), None);
        assert_eq!(parse_area("ca. 181 m²"), Some(181.0));
    }

    #[test]
    fn comma_lists_drop_empty_segments() {
        assert_eq!(
            parse_comma_separated("Dubbel glas, Dakisolatie,, Muurisolatie ,"),
            vec!["Dubbel glas", "Dakisolatie", "Muurisolatie"]
        );
        assert!(parse_comma_separated("").is_empty());
    }

    #[test]
    fn energy_label_rejects_placeholder_text() {
        assert_eq!(
            parse_energy_label(Some("Wat betekent dit?"), Some("B")),
            Some("B".to_string())
        );
        assert_eq!(
            parse_energy_label(Some("A+"), Some("Wat betekent dit?")),
            Some("A+".to_string())
        );
        assert_eq!(parse_energy_label(Some("Wat betekent dit?"), None), None);
        assert_eq!(parse_energy_label(None, Some("  C ")), Some("C".to_string()));
    }

    #[test]
    fn vve_booleans_distinguish_unknown_from_false() {
        assert_eq!(parse_vve_boolean("Ja"), Some(true));
        assert_eq!(parse_vve_boolean(" Aanwezig "), Some(true));
        assert_eq!(parse_vve_boolean("Niet aanwezig"), Some(false));
        assert_eq!(parse_vve_boolean("nee"), Some(false));
        assert_eq!(parse_vve_boolean("Onbekend"), None);
        assert_eq!(parse_vve_boolean(""), None);
    }
}
