/// Strips invisible characters scraped along with listing text and collapses
/// runs of whitespace.
pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '\u{a0}'], " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cased [`clean_text`], used for vocabulary lookups.
pub(crate) fn normalize_key(value: &str) -> String {
    clean_text(value).to_lowercase()
}
