#![deny(unsafe_code)]

use commune_model::{CommuneRecord, StatValue};

/// part / whole × 100, with a display-safe default.
///
/// A missing or non-positive denominator yields 0 rather than an unknown,
/// so progress bars and donut charts always have a drawable figure. The
/// default applies only at this formatting boundary; nothing is written
/// back into the record.
pub fn share(part: StatValue, whole: StatValue) -> f64 {
    match (part.as_f64(), whole.as_f64()) {
        (Some(part), Some(whole)) if whole > 0.0 => part / whole * 100.0,
        _ => 0.0,
    }
}

/// Gender split of the population, in percent.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GenderSplit {
    pub men_pct: f64,
    pub women_pct: f64,
}

pub fn gender_split(record: &CommuneRecord) -> GenderSplit {
    GenderSplit {
        men_pct: share(record.men, record.population),
        women_pct: share(record.women, record.population),
    }
}

/// Inhabitants per km². `None` when either side is unknown or the area is
/// non-positive; the caller renders the placeholder.
pub fn density(record: &CommuneRecord) -> Option<f64> {
    let population = record.population.as_f64()?;
    let area = record.area_km2.as_f64().filter(|a| *a > 0.0)?;
    Some(population / area)
}

/// Vacant share of the housing stock, in percent.
pub fn vacancy_rate(record: &CommuneRecord) -> Option<f64> {
    let vacant = record.vacant_housing.as_f64()?;
    let housing = record.housing.as_f64().filter(|h| *h > 0.0)?;
    Some(vacant / housing * 100.0)
}

/// Unemployed share of the 15-64 active population, in percent.
pub fn unemployment_rate(record: &CommuneRecord) -> Option<f64> {
    let unemployed = record.unemployed.as_f64()?;
    let active = record.active.as_f64().filter(|a| *a > 0.0)?;
    Some(unemployed / active * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use commune_model::Codgeo;

    fn base() -> CommuneRecord {
        CommuneRecord::empty(Codgeo::new("01001").expect("valid code"))
    }

    #[test]
    fn share_of_zero_total_is_zero_not_unknown() {
        assert_eq!(share(StatValue::Observed(5.0), StatValue::Observed(0.0)), 0.0);
        assert_eq!(share(StatValue::Observed(5.0), StatValue::Missing), 0.0);
        assert_eq!(share(StatValue::Missing, StatValue::Observed(10.0)), 0.0);
    }

    #[test]
    fn gender_split_adds_up() {
        let mut record = base();
        record.population = StatValue::Observed(1000.0);
        record.men = StatValue::Observed(480.0);
        record.women = StatValue::Observed(520.0);
        let split = gender_split(&record);
        assert!((split.men_pct - 48.0).abs() < 1e-9);
        assert!((split.women_pct - 52.0).abs() < 1e-9);
    }

    #[test]
    fn density_propagates_unknowns() {
        let mut record = base();
        record.population = StatValue::Observed(767.0);
        assert_eq!(density(&record), None);
        record.area_km2 = StatValue::Observed(0.0);
        assert_eq!(density(&record), None);
        record.area_km2 = StatValue::Observed(15.95);
        let value = density(&record).expect("density");
        assert!((value - 767.0 / 15.95).abs() < 1e-9);
    }

    #[test]
    fn rates_need_a_positive_denominator() {
        let mut record = base();
        record.vacant_housing = StatValue::Observed(26.0);
        record.housing = StatValue::Observed(400.0);
        let rate = vacancy_rate(&record).expect("vacancy");
        assert!((rate - 6.5).abs() < 1e-9);

        record.unemployed = StatValue::Observed(30.0);
        record.active = StatValue::Observed(0.0);
        assert_eq!(unemployment_rate(&record), None);
    }
}
