#![deny(unsafe_code)]

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use commune_engine::{
    DatasetTotals, Ranked, density, gender_split, growth_for_display, unemployment_rate,
    vacancy_rate,
};
use commune_model::{CommuneRecord, StatField, StatValue};

use crate::format::{
    MISSING_PLACEHOLDER, fmt_area, fmt_euros, fmt_int, fmt_number, fmt_percent, fmt_pop,
};

/// Stat-card profile of a single commune, one indicator per row.
pub fn profile_table(record: &CommuneRecord) -> Table {
    let split = gender_split(record);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Indicateur"), header_cell("Valeur")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let rows: Vec<(&str, String)> = vec![
        (
            StatField::Population.label(),
            with_unit(fmt_int(record.population), "hab."),
        ),
        (StatField::AreaKm2.label(), fmt_area(record.area_km2)),
        ("Densité", opt_value(density(record), "hab./km²")),
        (StatField::Births.label(), fmt_int(record.births)),
        (StatField::Deaths.label(), fmt_int(record.deaths)),
        ("Croissance naturelle", trend(growth_for_display(record))),
        (StatField::Housing.label(), fmt_int(record.housing)),
        (
            StatField::VacantHousing.label(),
            fmt_int(record.vacant_housing),
        ),
        ("Taux de vacance", opt_percent(vacancy_rate(record))),
        (
            StatField::MedianIncome.label(),
            fmt_euros(record.median_income),
        ),
        (StatField::Active.label(), fmt_int(record.active)),
        (StatField::Unemployed.label(), fmt_int(record.unemployed)),
        ("Taux de chômage", opt_percent(unemployment_rate(record))),
        (
            StatField::Men.label(),
            share_row(fmt_int(record.men), record.men, split.men_pct),
        ),
        (
            StatField::Women.label(),
            share_row(fmt_int(record.women), record.women, split.women_pct),
        ),
        (
            StatField::SelfEmployed.label(),
            fmt_number(record.self_employed),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

/// Trending communes by natural growth.
pub fn ranking_table(ranked: &[Ranked<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("CODGEO"),
        header_cell("Croissance"),
        header_cell("Population"),
        header_cell("Superficie"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, entry) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(entry.record.codgeo.as_str()),
            trend_cell(entry.score),
            Cell::new(fmt_pop(entry.record.population)),
            Cell::new(fmt_area(entry.record.area_km2)),
        ]);
    }
    table
}

/// Dataset-wide headline figures.
pub fn totals_table(totals: &DatasetTotals) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Indicateur"), header_cell("Total")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Communes"),
        Cell::new(fmt_int(StatValue::Observed(totals.communes as f64))),
    ]);
    table.add_row(vec![
        Cell::new("Population"),
        Cell::new(with_unit(
            fmt_int(StatValue::Observed(totals.population)),
            "hab.",
        )),
    ]);
    table.add_row(vec![
        Cell::new("Superficie"),
        Cell::new(fmt_area(StatValue::Observed(totals.area_km2))),
    ]);
    table.add_row(vec![
        Cell::new("Naissances 2023"),
        Cell::new(fmt_int(StatValue::Observed(totals.births))),
    ]);
    table.add_row(vec![
        Cell::new("Décès 2023"),
        Cell::new(fmt_int(StatValue::Observed(totals.deaths))),
    ]);
    table
}

/// Columns of the flat listing.
const LISTING_FIELDS: [StatField; 5] = [
    StatField::Population,
    StatField::AreaKm2,
    StatField::Births,
    StatField::Deaths,
    StatField::MedianIncome,
];

/// Flat listing of records, one line per commune.
pub fn listing_table<'a>(records: impl IntoIterator<Item = &'a CommuneRecord>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("CODGEO")];
    header.extend(LISTING_FIELDS.iter().map(|field| header_cell(field.label())));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=LISTING_FIELDS.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        let mut row = vec![Cell::new(record.codgeo.as_str())];
        row.extend(
            LISTING_FIELDS
                .iter()
                .map(|field| Cell::new(listing_text(record, *field))),
        );
        table.add_row(row);
    }
    table
}

fn listing_text(record: &CommuneRecord, field: StatField) -> String {
    let value = field.value_of(record);
    match field {
        StatField::AreaKm2 => fmt_area(value),
        StatField::MedianIncome => fmt_euros(value),
        _ => fmt_int(value),
    }
}

fn trend(score: f64) -> String {
    let arrow = if score >= 0.0 { '▲' } else { '▼' };
    format!("{arrow} {}", fmt_percent(score.abs()))
}

fn trend_cell(score: f64) -> Cell {
    let color = if score >= 0.0 {
        Color::Green
    } else {
        Color::Yellow
    };
    Cell::new(trend(score)).fg(color)
}

fn share_row(text: String, value: StatValue, pct: f64) -> String {
    if value.is_missing() {
        text
    } else {
        format!("{text} ({})", fmt_percent(pct))
    }
}

fn opt_percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_PLACEHOLDER.to_string(), fmt_percent)
}

fn opt_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => with_unit(fmt_int(StatValue::Observed(v)), unit),
        None => MISSING_PLACEHOLDER.to_string(),
    }
}

fn with_unit(text: String, unit: &str) -> String {
    if text == MISSING_PLACEHOLDER {
        text
    } else {
        format!("{text} {unit}")
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
