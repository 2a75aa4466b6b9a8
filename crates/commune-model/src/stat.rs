#![deny(unsafe_code)]

use crate::CommuneRecord;

/// A numeric observation that may be absent.
///
/// The source data marks unknown values with an empty or unparseable cell;
/// those become `Missing` rather than zero, since zero is a legitimate
/// observed count. Arithmetic goes through [`StatValue::as_f64`] so a
/// missing value can never silently behave as zero.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum StatValue {
    Observed(f64),
    Missing,
}

impl StatValue {
    /// Coerce a raw CSV cell into a numeric value.
    ///
    /// Blank cells are `Missing`. Otherwise every whitespace character is
    /// stripped (the data uses spaces, including U+00A0 and U+202F, as
    /// thousands separators), the decimal comma becomes a period, and the
    /// result is parsed as `f64`. Anything unparseable is `Missing`, never
    /// an error.
    pub fn parse(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| if ch == ',' { '.' } else { ch })
            .collect();
        if cleaned.is_empty() {
            return Self::Missing;
        }
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Observed(value),
            _ => Self::Missing,
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Observed(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Missing-as-zero, for summation only.
    ///
    /// A total over partially-unknown data must still be a meaningful
    /// total; everywhere else `Missing` propagates through [`Self::as_f64`].
    pub fn or_zero(self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// The numeric columns of the dataset, for generic sorting and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Population,
    AreaKm2,
    Births,
    Deaths,
    Housing,
    VacantHousing,
    MedianIncome,
    Unemployed,
    Active,
    Men,
    Women,
    SelfEmployed,
}

impl StatField {
    pub const ALL: [StatField; 12] = [
        StatField::Population,
        StatField::AreaKm2,
        StatField::Births,
        StatField::Deaths,
        StatField::Housing,
        StatField::VacantHousing,
        StatField::MedianIncome,
        StatField::Unemployed,
        StatField::Active,
        StatField::Men,
        StatField::Women,
        StatField::SelfEmployed,
    ];

    /// Header name of the column in `fusion.csv`.
    pub fn column_name(self) -> &'static str {
        match self {
            StatField::Population => "P22_POP",
            StatField::AreaKm2 => "SUPERF",
            StatField::Births => "NAIS23",
            StatField::Deaths => "DECES23",
            StatField::Housing => "P22_LOG",
            StatField::VacantHousing => "P22_LOGVAC",
            StatField::MedianIncome => "MED21",
            StatField::Unemployed => "P22_CHOM1564",
            StatField::Active => "P22_ACT1564",
            StatField::Men => "P22_POPH",
            StatField::Women => "P22_POPF",
            StatField::SelfEmployed => "C22_POP15P_STAT_GSEC32",
        }
    }

    /// Display label, as shown on the dashboard cards.
    pub fn label(self) -> &'static str {
        match self {
            StatField::Population => "Population",
            StatField::AreaKm2 => "Superficie",
            StatField::Births => "Naissances 2023",
            StatField::Deaths => "Décès 2023",
            StatField::Housing => "Logements",
            StatField::VacantHousing => "Logements vacants",
            StatField::MedianIncome => "Revenu médian",
            StatField::Unemployed => "Chômeurs 15-64 ans",
            StatField::Active => "Actifs 15-64 ans",
            StatField::Men => "Hommes",
            StatField::Women => "Femmes",
            StatField::SelfEmployed => "Cat. socio-éco (32)",
        }
    }

    pub fn value_of(self, record: &CommuneRecord) -> StatValue {
        match self {
            StatField::Population => record.population,
            StatField::AreaKm2 => record.area_km2,
            StatField::Births => record.births,
            StatField::Deaths => record.deaths,
            StatField::Housing => record.housing,
            StatField::VacantHousing => record.vacant_housing,
            StatField::MedianIncome => record.median_income,
            StatField::Unemployed => record.unemployed,
            StatField::Active => record.active,
            StatField::Men => record.men,
            StatField::Women => record.women,
            StatField::SelfEmployed => record.self_employed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_formatted_numbers() {
        assert_eq!(StatValue::parse("1 234,5"), StatValue::Observed(1234.5));
        assert_eq!(StatValue::parse("12\u{202F}500"), StatValue::Observed(12500.0));
        assert_eq!(StatValue::parse("450"), StatValue::Observed(450.0));
        assert_eq!(StatValue::parse("12.3"), StatValue::Observed(12.3));
    }

    #[test]
    fn blank_and_garbage_cells_are_missing() {
        assert_eq!(StatValue::parse(""), StatValue::Missing);
        assert_eq!(StatValue::parse("   "), StatValue::Missing);
        assert_eq!(StatValue::parse("n/a"), StatValue::Missing);
        assert_eq!(StatValue::parse("1,2,3"), StatValue::Missing);
    }

    #[test]
    fn zero_is_observed_not_missing() {
        assert_eq!(StatValue::parse("0"), StatValue::Observed(0.0));
        assert!(!StatValue::parse("0").is_missing());
    }

    #[test]
    fn or_zero_only_defaults_missing() {
        assert_eq!(StatValue::Missing.or_zero(), 0.0);
        assert_eq!(StatValue::Observed(7.0).or_zero(), 7.0);
    }

    #[test]
    fn field_column_names_are_distinct() {
        let names: std::collections::BTreeSet<&str> =
            StatField::ALL.iter().map(|f| f.column_name()).collect();
        assert_eq!(names.len(), StatField::ALL.len());
    }
}
