#![deny(unsafe_code)]

use tracing::debug;

use commune_model::{Codgeo, CommuneRecord};

/// Result cap for suggestion lists; keeps dropdowns responsive.
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Resolve a record by its geographic code, exact match only.
///
/// The query goes through the same normalization as load time (trim,
/// zero-pad), so "1001" and "01001" resolve the same record. Anything else
/// would make legitimately-formatted keys silently miss.
pub fn find_by_code<'a>(records: &'a [CommuneRecord], raw: &str) -> Option<&'a CommuneRecord> {
    let code = Codgeo::new(raw).ok()?;
    let found = records.iter().find(|record| record.codgeo == code);
    debug!(code = %code, found = found.is_some(), "lookup by code");
    found
}

/// Case-insensitive substring search over codes, capped at `limit`.
///
/// The population's decimal form is matched too, so typing "450" surfaces
/// communes of that size. Matches keep dataset order; there is no
/// relevance ranking.
pub fn search<'a>(
    records: &'a [CommuneRecord],
    term: &str,
    limit: usize,
) -> Vec<&'a CommuneRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| matches_term(record, &needle))
        .take(limit)
        .collect()
}

/// Whether a record would be a hit for `term`, with the same normalization
/// as [`search`]. Blank terms match nothing.
pub fn record_matches(record: &CommuneRecord, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    !needle.is_empty() && matches_term(record, &needle)
}

fn matches_term(record: &CommuneRecord, needle: &str) -> bool {
    if record.codgeo.as_str().to_lowercase().contains(needle) {
        return true;
    }
    record
        .population
        .as_f64()
        .is_some_and(|pop| decimal_text(pop).contains(needle))
}

/// Plain decimal rendering without trailing zeros ("450", "12.3").
fn decimal_text(value: f64) -> String {
    let text = format!("{value}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commune_model::StatValue;

    fn record(code: &str, population: StatValue) -> CommuneRecord {
        let mut record = CommuneRecord::empty(Codgeo::new(code).expect("valid code"));
        record.population = population;
        record
    }

    fn fixture() -> Vec<CommuneRecord> {
        vec![
            record("01001", StatValue::Observed(767.0)),
            record("01002", StatValue::Observed(248.0)),
            record("69001", StatValue::Observed(29_677.0)),
            record("69002", StatValue::Missing),
        ]
    }

    #[test]
    fn finds_exact_code() {
        let records = fixture();
        let found = find_by_code(&records, "69001").expect("hit");
        assert_eq!(found.codgeo.as_str(), "69001");
        assert!(find_by_code(&records, "99999").is_none());
    }

    #[test]
    fn lookup_is_normalization_invariant() {
        let records = fixture();
        let padded = find_by_code(&records, "01001").expect("padded hit");
        let short = find_by_code(&records, "1001").expect("short hit");
        assert_eq!(padded, short);
    }

    #[test]
    fn lookup_is_idempotent() {
        let records = fixture();
        assert_eq!(
            find_by_code(&records, "1001"),
            find_by_code(&records, "1001")
        );
    }

    #[test]
    fn search_matches_code_substring_in_dataset_order() {
        let records = fixture();
        let hits = search(&records, "6900", DEFAULT_SEARCH_LIMIT);
        let codes: Vec<&str> = hits.iter().map(|r| r.codgeo.as_str()).collect();
        assert_eq!(codes, vec!["69001", "69002"]);
    }

    #[test]
    fn search_matches_population_text() {
        let records = fixture();
        let hits = search(&records, "248", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].codgeo.as_str(), "01002");
    }

    #[test]
    fn record_matches_mirrors_search_normalization() {
        let records = fixture();
        assert!(record_matches(&records[0], " 0100 "));
        assert!(!record_matches(&records[0], ""));
        assert!(!record_matches(&records[0], "zzz"));
    }

    #[test]
    fn search_is_bounded_and_blank_terms_match_nothing() {
        let records = fixture();
        assert_eq!(search(&records, "0", 2).len(), 2);
        assert!(search(&records, "", DEFAULT_SEARCH_LIMIT).is_empty());
        assert!(search(&records, "   ", DEFAULT_SEARCH_LIMIT).is_empty());
    }
}
