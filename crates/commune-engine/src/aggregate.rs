#![deny(unsafe_code)]

use commune_model::{CommuneRecord, StatField};

/// Sum one column across all records, missing values counted as zero.
///
/// This is the single place where missing-as-zero is correct: a total over
/// partially-unknown data must still produce a meaningful total. Per-record
/// arithmetic elsewhere propagates the missing state instead.
pub fn sum_field(records: &[CommuneRecord], field: StatField) -> f64 {
    records
        .iter()
        .map(|record| field.value_of(record).or_zero())
        .sum()
}

/// Dataset-wide headline figures.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DatasetTotals {
    pub communes: usize,
    pub population: f64,
    pub area_km2: f64,
    pub births: f64,
    pub deaths: f64,
}

pub fn dataset_totals(records: &[CommuneRecord]) -> DatasetTotals {
    DatasetTotals {
        communes: records.len(),
        population: sum_field(records, StatField::Population),
        area_km2: sum_field(records, StatField::AreaKm2),
        births: sum_field(records, StatField::Births),
        deaths: sum_field(records, StatField::Deaths),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commune_model::{Codgeo, StatValue};

    fn record(code: &str, population: StatValue) -> CommuneRecord {
        let mut record = CommuneRecord::empty(Codgeo::new(code).expect("valid code"));
        record.population = population;
        record
    }

    #[test]
    fn sum_treats_missing_as_zero() {
        let records = vec![
            record("00001", StatValue::Observed(100.0)),
            record("00002", StatValue::Missing),
            record("00003", StatValue::Observed(50.0)),
        ];
        assert_eq!(sum_field(&records, StatField::Population), 150.0);
    }

    #[test]
    fn totals_count_every_record() {
        let records = vec![
            record("00001", StatValue::Observed(100.0)),
            record("00002", StatValue::Missing),
        ];
        let totals = dataset_totals(&records);
        assert_eq!(totals.communes, 2);
        assert_eq!(totals.population, 100.0);
        assert_eq!(totals.births, 0.0);
    }
}
