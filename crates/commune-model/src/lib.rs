pub mod codgeo;
pub mod error;
pub mod record;
pub mod stat;

pub use codgeo::{CODGEO_WIDTH, Codgeo};
pub use error::{ModelError, Result};
pub use record::CommuneRecord;
pub use stat::{StatField, StatValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_tagged_values() {
        let mut record = CommuneRecord::empty(Codgeo::new("01001").expect("valid code"));
        record.population = StatValue::Observed(450.0);
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: CommuneRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert!(json.contains("\"01001\""));
        assert!(json.contains("\"Missing\""));
    }
}
