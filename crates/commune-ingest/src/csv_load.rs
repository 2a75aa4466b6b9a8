#![deny(unsafe_code)]

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use commune_model::{Codgeo, CommuneRecord, StatField, StatValue};

use crate::dataset::{Dataset, fingerprint};
use crate::error::{IngestError, Result};

/// Header name of the key column. Its presence is mandatory.
pub const KEY_COLUMN: &str = "CODGEO";

/// Read the commune dataset from a CSV file.
///
/// The first line names the columns. Rows are emitted in file order; a row
/// whose cells are all blank is skipped, and so is a row without a key.
/// Unparseable numeric cells become [`StatValue::Missing`] without dropping
/// the row. On duplicate keys the first occurrence wins.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let bytes = std::fs::read(path)?;
    let fingerprint = fingerprint(&bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());
    let headers = reader.headers()?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut seen: HashSet<Codgeo> = HashSet::new();
    let mut skipped = 0usize;
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        let record_number = idx + 1;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let raw_code = row.get(layout.codgeo).unwrap_or("");
        let Ok(codgeo) = Codgeo::new(raw_code) else {
            warn!(record_number, "row without a CODGEO key, skipped");
            skipped += 1;
            continue;
        };
        if !seen.insert(codgeo.clone()) {
            warn!(code = %codgeo, record_number, "duplicate CODGEO, keeping first occurrence");
            skipped += 1;
            continue;
        }
        records.push(build_record(codgeo, &layout, &row));
    }

    info!(
        path = %path.display(),
        records = records.len(),
        skipped,
        fingerprint = %fingerprint,
        "dataset loaded"
    );
    Ok(Dataset {
        source: path.to_path_buf(),
        fingerprint,
        records,
    })
}

fn build_record(codgeo: Codgeo, layout: &ColumnLayout, row: &csv::StringRecord) -> CommuneRecord {
    CommuneRecord {
        codgeo,
        population: layout.stat(row, StatField::Population),
        area_km2: layout.stat(row, StatField::AreaKm2),
        births: layout.stat(row, StatField::Births),
        deaths: layout.stat(row, StatField::Deaths),
        housing: layout.stat(row, StatField::Housing),
        vacant_housing: layout.stat(row, StatField::VacantHousing),
        median_income: layout.stat(row, StatField::MedianIncome),
        unemployed: layout.stat(row, StatField::Unemployed),
        active: layout.stat(row, StatField::Active),
        men: layout.stat(row, StatField::Men),
        women: layout.stat(row, StatField::Women),
        self_employed: layout.stat(row, StatField::SelfEmployed),
    }
}

/// Column positions resolved from the header row.
struct ColumnLayout {
    codgeo: usize,
    stats: [Option<usize>; StatField::ALL.len()],
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position =
            |name: &str| headers.iter().position(|header| normalize_header(header) == name);
        let codgeo = position(KEY_COLUMN)
            .ok_or_else(|| IngestError::MissingColumn(KEY_COLUMN.to_string()))?;
        let mut stats = [None; StatField::ALL.len()];
        for field in StatField::ALL {
            stats[field as usize] = position(field.column_name());
            if stats[field as usize].is_none() {
                warn!(
                    column = field.column_name(),
                    "column absent from header, values will be missing"
                );
            }
        }
        Ok(Self { codgeo, stats })
    }

    fn stat(&self, row: &csv::StringRecord, field: StatField) -> StatValue {
        match self.stats[field as usize].and_then(|idx| row.get(idx)) {
            Some(cell) => StatValue::parse(cell),
            None => StatValue::Missing,
        }
    }
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}
