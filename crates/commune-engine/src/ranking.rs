#![deny(unsafe_code)]

use std::cmp::Ordering;

use commune_model::{CommuneRecord, StatField};

/// Number of entries on the trending panel.
pub const DEFAULT_TOP_LIMIT: usize = 6;

/// A record with its natural-growth score, as ranked.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub record: &'a CommuneRecord,
    pub score: f64,
}

/// Natural growth in percent: (births − deaths) / population × 100.
///
/// `None` when population is missing or non-positive; such records cannot
/// be scored and never rank (missing population is not zero growth).
/// Missing births or deaths count as 0 inside the numerator.
pub fn growth_score(record: &CommuneRecord) -> Option<f64> {
    let population = record.population.as_f64().filter(|pop| *pop > 0.0)?;
    let births = record.births.or_zero();
    let deaths = record.deaths.or_zero();
    Some((births - deaths) / population * 100.0)
}

/// Growth for a single stat card; unscorable records display as 0.
/// Display boundary only, never fed back into ranking.
pub fn growth_for_display(record: &CommuneRecord) -> f64 {
    growth_score(record).unwrap_or(0.0)
}

/// Top `limit` records by natural growth, descending.
///
/// The sort is stable, so ties keep original dataset order.
pub fn top_by_growth(records: &[CommuneRecord], limit: usize) -> Vec<Ranked<'_>> {
    let mut scored: Vec<Ranked<'_>> = records
        .iter()
        .filter_map(|record| {
            growth_score(record).map(|score| Ranked { record, score })
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Order records by one numeric column.
///
/// Missing values sort last under both directions, so unknown data never
/// floats to the top of either view. Stable within equal keys.
pub fn sort_by_field<'a>(
    records: &'a [CommuneRecord],
    field: StatField,
    direction: SortDirection,
) -> Vec<&'a CommuneRecord> {
    let mut out: Vec<&CommuneRecord> = records.iter().collect();
    out.sort_by(|a, b| {
        match (field.value_of(a).as_f64(), field.value_of(b).as_f64()) {
            (Some(x), Some(y)) => {
                let ordering = x.total_cmp(&y);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    out
}

/// Order records by their code, as strings.
pub fn sort_by_code<'a>(
    records: &'a [CommuneRecord],
    direction: SortDirection,
) -> Vec<&'a CommuneRecord> {
    let mut out: Vec<&CommuneRecord> = records.iter().collect();
    out.sort_by(|a, b| {
        let ordering = a.codgeo.cmp(&b.codgeo);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use commune_model::{Codgeo, StatValue};

    fn record(code: &str, pop: StatValue, births: StatValue, deaths: StatValue) -> CommuneRecord {
        let mut record = CommuneRecord::empty(Codgeo::new(code).expect("valid code"));
        record.population = pop;
        record.births = births;
        record.deaths = deaths;
        record
    }

    #[test]
    fn ranking_excludes_missing_and_non_positive_population() {
        let records = vec![
            record(
                "00001",
                StatValue::Observed(1000.0),
                StatValue::Observed(50.0),
                StatValue::Observed(10.0),
            ),
            record(
                "00002",
                StatValue::Observed(0.0),
                StatValue::Observed(5.0),
                StatValue::Observed(1.0),
            ),
            record(
                "00003",
                StatValue::Missing,
                StatValue::Observed(5.0),
                StatValue::Observed(1.0),
            ),
        ];
        let ranked = top_by_growth(&records, DEFAULT_TOP_LIMIT);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.codgeo.as_str(), "00001");
        assert!((ranked[0].score - 4.0).abs() < 1e-9);
    }

    #[test]
    fn ranking_is_descending_and_ties_keep_dataset_order() {
        let one = record(
            "00001",
            StatValue::Observed(100.0),
            StatValue::Observed(2.0),
            StatValue::Observed(1.0),
        );
        let two = record(
            "00002",
            StatValue::Observed(200.0),
            StatValue::Observed(4.0),
            StatValue::Observed(2.0),
        );
        let three = record(
            "00003",
            StatValue::Observed(100.0),
            StatValue::Observed(5.0),
            StatValue::Observed(1.0),
        );
        let records = vec![one, two, three];
        let ranked = top_by_growth(&records, DEFAULT_TOP_LIMIT);
        let codes: Vec<&str> = ranked.iter().map(|r| r.record.codgeo.as_str()).collect();
        // 00001 and 00002 both score 1.0; 00001 comes first in the file.
        assert_eq!(codes, vec!["00003", "00001", "00002"]);
    }

    #[test]
    fn missing_births_count_as_zero_in_the_score() {
        let shrinking = record(
            "00001",
            StatValue::Observed(100.0),
            StatValue::Missing,
            StatValue::Observed(10.0),
        );
        assert_eq!(growth_score(&shrinking), Some(-10.0));
    }

    #[test]
    fn display_growth_defaults_to_zero() {
        let unscorable = record(
            "00001",
            StatValue::Missing,
            StatValue::Observed(5.0),
            StatValue::Observed(1.0),
        );
        assert_eq!(growth_score(&unscorable), None);
        assert_eq!(growth_for_display(&unscorable), 0.0);
    }

    #[test]
    fn sort_keeps_missing_values_last_in_both_directions() {
        let records = vec![
            record("00001", StatValue::Observed(100.0), StatValue::Missing, StatValue::Missing),
            record("00002", StatValue::Missing, StatValue::Missing, StatValue::Missing),
            record("00003", StatValue::Observed(300.0), StatValue::Missing, StatValue::Missing),
        ];

        let ascending = sort_by_field(&records, StatField::Population, SortDirection::Ascending);
        let codes: Vec<&str> = ascending.iter().map(|r| r.codgeo.as_str()).collect();
        assert_eq!(codes, vec!["00001", "00003", "00002"]);

        let descending = sort_by_field(&records, StatField::Population, SortDirection::Descending);
        let codes: Vec<&str> = descending.iter().map(|r| r.codgeo.as_str()).collect();
        assert_eq!(codes, vec!["00003", "00001", "00002"]);
    }

    #[test]
    fn sort_by_code_orders_as_strings() {
        let records = vec![
            record("69001", StatValue::Missing, StatValue::Missing, StatValue::Missing),
            record("01001", StatValue::Missing, StatValue::Missing, StatValue::Missing),
        ];
        let sorted = sort_by_code(&records, SortDirection::Ascending);
        let codes: Vec<&str> = sorted.iter().map(|r| r.codgeo.as_str()).collect();
        assert_eq!(codes, vec!["01001", "69001"]);
    }
}
