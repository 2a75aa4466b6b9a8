//! Command implementations over the shared dataset store.

use anyhow::{Context, Result};

use commune_engine::{
    SortDirection, dataset_totals, find_by_code, record_matches, search, smooth_series,
    sort_by_code, sort_by_field, spark_series, top_by_growth,
};
use commune_ingest::{CsvFileSource, Dataset, DatasetStore};
use commune_model::{CommuneRecord, StatField};
use commune_report::{fmt_pop, listing_table, profile_table, ranking_table, sparkline, totals_table};

use crate::cli::{ListArgs, ProfileArgs, SearchArgs, SortArg, TopArgs};

pub type Store = DatasetStore<CsvFileSource>;

fn load(store: &Store) -> Result<&Dataset> {
    store
        .get()
        .with_context(|| format!("load dataset {}", store.source().path().display()))
}

/// Print the stat-card profile of one commune. Returns false on a miss.
pub fn run_profile(store: &Store, args: &ProfileArgs) -> Result<bool> {
    let dataset = load(store)?;
    let Some(record) = find_by_code(&dataset.records, &args.code) else {
        println!(
            "Aucune donnée pour « {} » — vérifie que {} contient bien ce CODGEO.",
            args.code,
            store.source().path().display()
        );
        return Ok(false);
    };
    println!("Commune {}", record.codgeo);
    println!("{}", profile_table(record));
    println!(
        "Naissances 2023  {}",
        sparkline(&spark_series(record.births.or_zero()))
    );
    println!(
        "Décès 2023       {}",
        sparkline(&spark_series(record.deaths.or_zero()))
    );
    println!(
        "Évolution 5 ans  {}",
        sparkline(&smooth_series(record.population.or_zero()))
    );
    Ok(true)
}

/// Print bounded search suggestions, one per line.
pub fn run_search(store: &Store, args: &SearchArgs) -> Result<()> {
    let dataset = load(store)?;
    let hits = search(&dataset.records, &args.term, args.limit);
    if hits.is_empty() {
        println!("Aucun résultat pour « {} »", args.term);
        return Ok(());
    }
    for record in hits {
        println!("{} • {} hab.", record.codgeo, fmt_pop(record.population));
    }
    Ok(())
}

/// Print the natural-growth ranking.
pub fn run_top(store: &Store, args: &TopArgs) -> Result<()> {
    let dataset = load(store)?;
    let ranked = top_by_growth(&dataset.records, args.limit);
    if ranked.is_empty() {
        println!("Aucune commune classable (population manquante ou nulle).");
        return Ok(());
    }
    println!("{}", ranking_table(&ranked));
    Ok(())
}

/// Print dataset-wide totals.
pub fn run_totals(store: &Store) -> Result<()> {
    let dataset = load(store)?;
    println!("{}", totals_table(&dataset_totals(&dataset.records)));
    Ok(())
}

/// Print the sortable, filterable listing.
pub fn run_list(store: &Store, args: &ListArgs) -> Result<()> {
    let dataset = load(store)?;
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let mut rows: Vec<&CommuneRecord> = match sort_field(args.sort) {
        Some(field) => sort_by_field(&dataset.records, field, direction),
        None => sort_by_code(&dataset.records, direction),
    };
    if let Some(term) = &args.filter {
        rows.retain(|record| record_matches(record, term));
    }
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    let count = rows.len();
    println!("{}", listing_table(rows));
    println!("{count} communes");
    Ok(())
}

fn sort_field(sort: SortArg) -> Option<StatField> {
    match sort {
        SortArg::Code => None,
        SortArg::Population => Some(StatField::Population),
        SortArg::Area => Some(StatField::AreaKm2),
        SortArg::Births => Some(StatField::Births),
        SortArg::Deaths => Some(StatField::Deaths),
        SortArg::Housing => Some(StatField::Housing),
        SortArg::VacantHousing => Some(StatField::VacantHousing),
        SortArg::Income => Some(StatField::MedianIncome),
        SortArg::Unemployed => Some(StatField::Unemployed),
        SortArg::Active => Some(StatField::Active),
        SortArg::Men => Some(StatField::Men),
        SortArg::Women => Some(StatField::Women),
        SortArg::SelfEmployed => Some(StatField::SelfEmployed),
    }
}
