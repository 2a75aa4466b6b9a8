#![deny(unsafe_code)]

use crate::{Codgeo, StatValue};

/// One row of the commune statistics dataset.
///
/// Records are immutable once loaded; the dataset is reloaded wholesale,
/// never patched in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommuneRecord {
    pub codgeo: Codgeo,
    pub population: StatValue,
    pub area_km2: StatValue,
    pub births: StatValue,
    pub deaths: StatValue,
    pub housing: StatValue,
    pub vacant_housing: StatValue,
    pub median_income: StatValue,
    pub unemployed: StatValue,
    pub active: StatValue,
    pub men: StatValue,
    pub women: StatValue,
    pub self_employed: StatValue,
}

impl CommuneRecord {
    /// A record with every statistic missing, for building fixtures.
    pub fn empty(codgeo: Codgeo) -> Self {
        Self {
            codgeo,
            population: StatValue::Missing,
            area_km2: StatValue::Missing,
            births: StatValue::Missing,
            deaths: StatValue::Missing,
            housing: StatValue::Missing,
            vacant_housing: StatValue::Missing,
            median_income: StatValue::Missing,
            unemployed: StatValue::Missing,
            active: StatValue::Missing,
            men: StatValue::Missing,
            women: StatValue::Missing,
            self_employed: StatValue::Missing,
        }
    }
}
